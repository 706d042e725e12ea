#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoder must not panic on arbitrary inputs
    if let Ok(scores) = fileprobe::probe::scores::parse_scores(data) {
        assert_eq!(scores.len() * 8, data.len());
    }
});
