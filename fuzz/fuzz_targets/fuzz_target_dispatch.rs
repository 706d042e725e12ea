#![no_main]
use arbitrary::Arbitrary;
use fileprobe::probe::buffer::{FixedBuffer, OverflowPolicy, FIXED_BUFFER_CAPACITY};
use fileprobe::probe::sentinel::{dispatch, Branch};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    truncate: bool,
    content: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Dispatch and the bounded copy must never panic or write past the buffer
    let policy = if input.truncate {
        OverflowPolicy::Truncate
    } else {
        OverflowPolicy::Reject
    };
    if let Ok(Branch::Copy) = dispatch(&input.content) {
        let mut dest = FixedBuffer::new();
        match dest.copy_from(&input.content, policy) {
            Ok(report) => {
                assert!(report.copied <= FIXED_BUFFER_CAPACITY);
                assert!(dest.as_c_str_bytes().len() <= report.copied);
            }
            Err(_) => assert!(input.content.len() > FIXED_BUFFER_CAPACITY),
        }
    }
});
