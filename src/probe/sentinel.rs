use crate::probe::error::ProbeError;

pub const SENTINEL_OFFSET: usize = 2;
pub const COPY_SENTINEL: u8 = 0x42;
pub const DELAY_SENTINEL: u8 = 0x43;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Copy,
    Delay,
    Noop(u8),
}

pub fn classify(byte: u8) -> Branch {
    match byte {
        COPY_SENTINEL => Branch::Copy,
        DELAY_SENTINEL => Branch::Delay,
        other => Branch::Noop(other),
    }
}

/// The byte at `SENTINEL_OFFSET`, bounds-checked.
pub fn sentinel(content: &[u8]) -> Result<u8, ProbeError> {
    content
        .get(SENTINEL_OFFSET)
        .copied()
        .ok_or(ProbeError::OutOfBounds {
            index: SENTINEL_OFFSET,
            len: content.len(),
        })
}

pub fn dispatch(content: &[u8]) -> Result<Branch, ProbeError> {
    sentinel(content).map(classify)
}
