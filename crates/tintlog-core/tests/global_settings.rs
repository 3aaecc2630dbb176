//! Global logger configuration from a broken config file plus environment
//!
//! Runs in its own process: it sets environment variables and initializes the
//! process-wide logger.

#![cfg(target_os = "linux")]

use std::fs;

use tintlog_core::config::{LEVEL_ENV_VAR, STYLE_ENV_VAR};
use tintlog_core::{global_logger, LoggerSettings, RenderStyle, Severity, StyleMode, Threshold};

#[test]
fn test_env_level_survives_broken_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_dir = dir.path().join("tintlog");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yaml"), "level: info\nstyle: neon\n").unwrap();

    // dirs::config_dir honours XDG_CONFIG_HOME on Linux
    std::env::set_var("XDG_CONFIG_HOME", dir.path());
    std::env::set_var(LEVEL_ENV_VAR, "debug");
    std::env::remove_var(STYLE_ENV_VAR);

    assert!(LoggerSettings::load().is_err());

    let (settings, errors) = LoggerSettings::load_layered();
    assert_eq!(errors.len(), 1);
    assert_eq!(settings.level.as_deref(), Some("debug"));
    assert_eq!(settings.style, StyleMode::Auto);

    let logger = global_logger();
    assert_eq!(logger.threshold(), Threshold::Level(Severity::Debug));
    assert_eq!(logger.style(), RenderStyle::InlineWrapped);
}
