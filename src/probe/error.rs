use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_MISSING_ARGUMENT: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_IO: i32 = 3;
pub const EXIT_ALLOCATION: i32 = 4;
pub const EXIT_OUT_OF_BOUNDS: i32 = 5;
pub const EXIT_OVERFLOW: i32 = 6;
pub const EXIT_SCORE_DATA: i32 = 7;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("no path argument supplied")]
    MissingArgument,
    #[error("failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to allocate {requested} bytes for file contents")]
    Allocation { requested: u64 },
    #[error("index {index} is out of bounds for content of {len} bytes")]
    OutOfBounds { index: usize, len: usize },
    #[error("copy of {len} bytes overflows a {capacity}-byte buffer")]
    BufferOverflow { len: usize, capacity: usize },
    #[error("delay of {requested_ms} ms exceeds the maximum of {max_ms} ms")]
    DelayTooLong { requested_ms: u128, max_ms: u128 },
    #[error("score data must contain only pairs of 32 bit integers (got {len} bytes)")]
    ScoreAlignment { len: usize },
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl ProbeError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeError::MissingArgument => EXIT_MISSING_ARGUMENT,
            ProbeError::DelayTooLong { .. } => EXIT_USAGE,
            ProbeError::FileOpen { .. } | ProbeError::Read { .. } | ProbeError::Output(_) => {
                EXIT_IO
            }
            ProbeError::Allocation { .. } => EXIT_ALLOCATION,
            ProbeError::OutOfBounds { .. } => EXIT_OUT_OF_BOUNDS,
            ProbeError::BufferOverflow { .. } => EXIT_OVERFLOW,
            ProbeError::ScoreAlignment { .. } => EXIT_SCORE_DATA,
        }
    }
}
