use crate::probe::error::ProbeError;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(20);
pub const MAX_DELAY: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    Elapsed,
    Cancelled,
}

/// Bounded wait used for the slow path. Cancellation is supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    duration: Duration,
}

impl Delay {
    pub fn new(duration: Duration) -> Result<Self, ProbeError> {
        if duration > MAX_DELAY {
            return Err(ProbeError::DelayTooLong {
                requested_ms: duration.as_millis(),
                max_ms: MAX_DELAY.as_millis(),
            });
        }
        Ok(Self { duration })
    }

    pub fn from_millis(ms: u64) -> Result<Self, ProbeError> {
        Self::new(Duration::from_millis(ms))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Sleep for the configured duration, or until `cancel` resolves.
    pub async fn wait<C>(&self, cancel: C) -> DelayOutcome
    where
        C: Future<Output = ()>,
    {
        if self.duration.is_zero() {
            return DelayOutcome::Elapsed;
        }
        tokio::select! {
            biased;
            _ = cancel => DelayOutcome::Cancelled,
            _ = tokio::time::sleep(self.duration) => DelayOutcome::Elapsed,
        }
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DELAY,
        }
    }
}

/// Resolves on Ctrl-C; never resolves if the signal handler cannot be installed.
pub async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
