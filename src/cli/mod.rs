#![allow(clippy::module_inception)]
use crate::cli::cli::Cli;
use crate::config::config::{Config, ConfigError};
use crate::logging;
use crate::probe::delay::ctrl_c;
use crate::probe::error::{ProbeError, EXIT_USAGE};
use crate::probe::runner::require_path;
use crate::probe::FileProbe;
use anyhow::Context;
use clap::Parser;
use std::ffi::OsString;
use std::io;

pub mod cli;

pub async fn run() -> anyhow::Result<()> {
    run_from(std::env::args_os()).await
}

/// Parse `args` (program name first) and probe the named file.
pub async fn run_from<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A missing path wins over any configuration problem.
    let path = require_path(cli.path.as_deref(), &mut out)?;

    let config = Config::create(cli.delay_ms, cli.on_overflow.map(Into::into))
        .context("Failed to resolve configuration")?;
    logging::init(&config.log);
    tracing::debug!(?config, "resolved configuration");

    let probe = FileProbe::new(&config)?;
    let outcome = if cli.scores {
        probe.scores(Some(path), &mut out, cli.json)?
    } else {
        probe.run(Some(path), &mut out, ctrl_c()).await?
    };
    tracing::debug!(?outcome, "probe finished");
    Ok(())
}

/// Exit code for an error returned by [`run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ProbeError>() {
            return e.exit_code();
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return EXIT_USAGE;
        }
    }
    1
}

/// Whether the failure already reported itself on stdout.
pub fn is_missing_argument(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<ProbeError>(), Some(ProbeError::MissingArgument))
}
