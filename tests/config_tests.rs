use fileprobe::config::config::{Config, ConfigError};
use fileprobe::probe::buffer::OverflowPolicy;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn isolate(dir: &Path) {
    env::set_var("FILEPROBE_CONFIG_DIR", dir.join("cfg"));
    env::remove_var("FILEPROBE_DELAY_MS");
    env::remove_var("FILEPROBE_OVERFLOW");
}

fn write_config_file(dir: &Path, content: &str) {
    let probe_dir = dir.join("cfg").join("fileprobe");
    fs::create_dir_all(&probe_dir).unwrap();
    fs::write(probe_dir.join("config.toml"), content).expect("write config file");
}

#[test]
#[serial]
fn defaults_without_file_or_env() {
    let td = tempdir().unwrap();
    isolate(td.path());
    let cfg = Config::create(None, None).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.delay_ms, 20_000);
    assert_eq!(cfg.overflow_policy, OverflowPolicy::Reject);
}

#[test]
#[serial]
fn file_over_default() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(
        td.path(),
        "delay_ms = 150\noverflow_policy = \"truncate\"\nlog = \"debug\"\n",
    );
    let cfg = Config::create(None, None).unwrap();
    assert_eq!(cfg.delay_ms, 150);
    assert_eq!(cfg.overflow_policy, OverflowPolicy::Truncate);
    assert_eq!(cfg.log, "debug");
}

#[test]
#[serial]
fn env_over_file() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(td.path(), "delay_ms = 150\noverflow_policy = \"truncate\"\n");
    env::set_var("FILEPROBE_DELAY_MS", "5");
    env::set_var("FILEPROBE_OVERFLOW", "reject");
    let cfg = Config::create(None, None).unwrap();
    assert_eq!(cfg.delay_ms, 5);
    assert_eq!(cfg.overflow_policy, OverflowPolicy::Reject);
    isolate(td.path());
}

#[test]
#[serial]
fn cli_over_env() {
    let td = tempdir().unwrap();
    isolate(td.path());
    env::set_var("FILEPROBE_DELAY_MS", "5");
    env::set_var("FILEPROBE_OVERFLOW", "reject");
    let cfg = Config::create(Some(0), Some(OverflowPolicy::Truncate)).unwrap();
    assert_eq!(cfg.delay_ms, 0);
    assert_eq!(cfg.overflow_policy, OverflowPolicy::Truncate);
    isolate(td.path());
}

#[test]
#[serial]
fn bad_env_value_is_reported() {
    let td = tempdir().unwrap();
    isolate(td.path());
    env::set_var("FILEPROBE_OVERFLOW", "clip");
    let err = Config::create(None, None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnv { var: "FILEPROBE_OVERFLOW", .. }));
    isolate(td.path());
}

#[test]
#[serial]
fn malformed_file_is_reported() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(td.path(), "delay_ms = \"not a number\"\n");
    let err = Config::create(None, None).unwrap_err();
    assert!(matches!(err, ConfigError::Malformed { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
#[serial]
fn unreadable_config_file_is_reported() {
    let td = tempdir().unwrap();
    isolate(td.path());
    // A directory where config.toml should be cannot be read as a file
    fs::create_dir_all(td.path().join("cfg").join("fileprobe").join("config.toml")).unwrap();
    let err = Config::create(None, None).unwrap_err();
    assert!(matches!(err, ConfigError::Unreadable { .. }), "{err:?}");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
#[serial]
fn absent_config_file_means_defaults() {
    let td = tempdir().unwrap();
    isolate(td.path());
    assert!(!td.path().join("cfg").exists());
    assert_eq!(Config::create(None, None).unwrap(), Config::default());
}
