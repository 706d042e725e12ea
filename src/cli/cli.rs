use crate::probe::buffer::OverflowPolicy;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

const FILEPROBE_LONG_VERSION: &str = concat!(
"version: ", env!("CARGO_PKG_VERSION"), "\n",
"git sha: ", env!("FILEPROBE_GIT_SHA"), "\n",
"build time (UTC): ", env!("FILEPROBE_BUILD_TIME"), "\n",
"target: ", env!("FILEPROBE_TARGET")
);

#[derive(Parser, Debug)]
#[command(
    name = "fileprobe",
    version = env!("CARGO_PKG_VERSION"),
    long_version = FILEPROBE_LONG_VERSION,
    about = "Inspect byte 2 of a file and copy, wait or do nothing"
)]
pub struct Cli {
    /// File to probe
    pub path: Option<PathBuf>,
    /// Tokens after the path are accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<OsString>,
    /// Delay for the 0x43 branch in milliseconds (overrides FILEPROBE_DELAY_MS)
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// Behavior when the 0x42 copy does not fit the 20-byte buffer
    #[arg(long, value_enum)]
    pub on_overflow: Option<OverflowArg>,
    /// Decode the file as pairs of little-endian u32 scores instead of probing it
    #[arg(long)]
    pub scores: bool,
    /// Print scores as a JSON array
    #[arg(long, requires = "scores")]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OverflowArg {
    Reject,
    Truncate,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Reject => OverflowPolicy::Reject,
            OverflowArg::Truncate => OverflowPolicy::Truncate,
        }
    }
}
