pub mod buffer;
pub mod delay;
pub mod error;
pub mod reader;
pub mod runner;
pub mod scores;
pub mod sentinel;

pub use error::ProbeError;
pub use runner::{FileProbe, Outcome};
