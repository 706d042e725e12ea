use crate::probe::buffer::OverflowPolicy;
use crate::probe::delay::DEFAULT_DELAY;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_DELAY_MS: &str = "FILEPROBE_DELAY_MS";
pub const ENV_OVERFLOW: &str = "FILEPROBE_OVERFLOW";
pub const ENV_CONFIG_DIR: &str = "FILEPROBE_CONFIG_DIR";
pub const ENV_LOG: &str = "FILEPROBE_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value \"{value}\" for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("malformed config file {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
    #[error("failed to read config file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub delay_ms: Option<u64>,
    pub overflow_policy: Option<OverflowPolicy>,
    pub log: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub delay_ms: u64,
    pub overflow_policy: OverflowPolicy,
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
            overflow_policy: OverflowPolicy::default(),
            log: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Resolve settings with precedence: CLI > environment > config file > default.
    pub fn create(
        delay_ms: Option<u64>,
        overflow_policy: Option<OverflowPolicy>,
    ) -> Result<Self, ConfigError> {
        let (_, file_cfg) = load_file_config_with_path()?;
        let defaults = Config::default();

        let delay_ms = match delay_ms {
            Some(ms) => ms,
            None => env_value(ENV_DELAY_MS, |s| {
                s.trim().parse::<u64>().map_err(|e| e.to_string())
            })?
            .or(file_cfg.delay_ms)
            .unwrap_or(defaults.delay_ms),
        };

        let overflow_policy = match overflow_policy {
            Some(p) => p,
            None => env_value(ENV_OVERFLOW, |s| s.parse::<OverflowPolicy>())?
                .or(file_cfg.overflow_policy)
                .unwrap_or(defaults.overflow_policy),
        };

        // FILEPROBE_LOG is read directly by the subscriber; the file only sets the fallback.
        let log = file_cfg.log.unwrap_or(defaults.log);

        Ok(Config {
            delay_ms,
            overflow_policy,
            log,
        })
    }
}

fn env_value<T, F>(var: &'static str, parse: F) -> Result<Option<T>, ConfigError>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    match env::var(var) {
        Ok(value) => parse(&value)
            .map(Some)
            .map_err(|reason| ConfigError::InvalidEnv { var, value, reason }),
        Err(_) => Ok(None),
    }
}

pub fn config_file_path() -> PathBuf {
    // Tests and users can relocate the config dir via FILEPROBE_CONFIG_DIR
    let cfg_dir = if let Ok(p) = env::var(ENV_CONFIG_DIR) {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    cfg_dir.join("fileprobe").join("config.toml")
}

/// Load `config.toml`; a missing file yields defaults, a broken one is an error.
pub fn load_file_config_with_path() -> Result<(PathBuf, FileConfig), ConfigError> {
    let path = config_file_path();
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok((path, FileConfig::default())),
        Err(source) => return Err(ConfigError::Unreadable { path, source }),
    };
    let text = String::from_utf8(bytes).map_err(|e| ConfigError::Malformed {
        path: path.clone(),
        message: e.to_string(),
    })?;
    let cfg = toml::from_str::<FileConfig>(&text).map_err(|e| ConfigError::Malformed {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok((path, cfg))
}
