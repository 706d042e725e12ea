use crate::config::config::ENV_LOG;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `FILEPROBE_LOG` wins over `fallback`.
/// Calling this more than once is harmless.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
