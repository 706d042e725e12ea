use crate::config::config::Config;
use crate::probe::buffer::{CopyReport, FixedBuffer, OverflowPolicy};
use crate::probe::delay::{Delay, DelayOutcome};
use crate::probe::error::ProbeError;
use crate::probe::reader::read_contents;
use crate::probe::scores::parse_scores;
use crate::probe::sentinel::{dispatch, Branch};
use std::future::Future;
use std::io::Write;
use std::path::Path;

pub const MISSING_ARGUMENT_INDICATOR: &[u8] = b"No";

/// Terminal state of a successful probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Copied(CopyReport),
    Delayed(DelayOutcome),
    Noop(u8),
    Scores(usize),
}

#[derive(Debug, Clone)]
pub struct FileProbe {
    delay: Delay,
    overflow: OverflowPolicy,
}

impl FileProbe {
    pub fn new(config: &Config) -> Result<Self, ProbeError> {
        Ok(Self {
            delay: Delay::from_millis(config.delay_ms)?,
            overflow: config.overflow_policy,
        })
    }

    pub fn with_settings(delay: Delay, overflow: OverflowPolicy) -> Self {
        Self { delay, overflow }
    }

    /// Read `path`, inspect its sentinel byte and act on it.
    ///
    /// Output goes to `out`; `cancel` ends the delay branch early. With no
    /// path the `No` indicator is written and `MissingArgument` returned.
    pub async fn run<W, C>(
        &self,
        path: Option<&Path>,
        out: &mut W,
        cancel: C,
    ) -> Result<Outcome, ProbeError>
    where
        W: Write,
        C: Future<Output = ()>,
    {
        let path = require_path(path, out)?;
        let content = read_contents(path).into_result(path)?;

        match dispatch(&content)? {
            Branch::Copy => {
                tracing::info!(len = content.len(), "copy branch");
                let mut dest = FixedBuffer::new();
                let report = dest.copy_from(&content, self.overflow)?;
                if report.truncated {
                    tracing::warn!(
                        len = content.len(),
                        capacity = dest.capacity(),
                        "content truncated to fit destination"
                    );
                }
                out.write_all(dest.as_c_str_bytes())
                    .and_then(|_| out.flush())
                    .map_err(ProbeError::Output)?;
                Ok(Outcome::Copied(report))
            }
            Branch::Delay => {
                tracing::info!(delay_ms = self.delay.duration().as_millis() as u64, "delay branch");
                let outcome = self.delay.wait(cancel).await;
                tracing::info!(?outcome, "delay finished");
                Ok(Outcome::Delayed(outcome))
            }
            Branch::Noop(byte) => {
                tracing::info!(sentinel = byte, "no-op branch");
                Ok(Outcome::Noop(byte))
            }
        }
    }

    /// Decode `path` as score pairs and print them, one `a b` line each or as JSON.
    pub fn scores<W: Write>(
        &self,
        path: Option<&Path>,
        out: &mut W,
        json: bool,
    ) -> Result<Outcome, ProbeError> {
        let path = require_path(path, out)?;
        let content = read_contents(path).into_result(path)?;
        let scores = parse_scores(&content)?;
        tracing::info!(pairs = scores.len(), "decoded scores");

        let written = if json {
            serde_json::to_writer_pretty(&mut *out, &scores)
                .map_err(std::io::Error::from)
                .and_then(|_| writeln!(out))
        } else {
            scores
                .iter()
                .try_for_each(|(a, b)| writeln!(out, "{a} {b}"))
        };
        written
            .and_then(|_| out.flush())
            .map_err(ProbeError::Output)?;
        Ok(Outcome::Scores(scores.len()))
    }
}

/// Unwrap the path argument, writing the `No` indicator when it is absent.
pub fn require_path<'a, W: Write>(
    path: Option<&'a Path>,
    out: &mut W,
) -> Result<&'a Path, ProbeError> {
    match path {
        Some(p) => Ok(p),
        None => {
            out.write_all(MISSING_ARGUMENT_INDICATOR)
                .and_then(|_| out.flush())
                .map_err(ProbeError::Output)?;
            Err(ProbeError::MissingArgument)
        }
    }
}
