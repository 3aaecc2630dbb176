//! Logger settings and environment overrides

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::StyleMode;

/// Environment variable overriding the threshold
pub const LEVEL_ENV_VAR: &str = "TINTLOG_LEVEL";

/// Environment variable overriding the style (auto, browser, terminal)
pub const STYLE_ENV_VAR: &str = "TINTLOG_STYLE";

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid style: {0} (expected auto, browser or terminal)")]
    InvalidStyle(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings used to build a logger
///
/// `level` is kept as written: a name outside the severity registry is not
/// rejected here, the resulting logger just never emits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Most verbose severity to emit, if any
    #[serde(default)]
    pub level: Option<String>,

    /// Output style
    #[serde(default)]
    pub style: StyleMode,
}

impl LoggerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_style(mut self, style: StyleMode) -> Self {
        self.style = style;
        self
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> ConfigResult<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LEVEL_ENV_VAR) {
            self.level = Some(level.trim().to_string());
        }

        if let Some(style) = lookup(STYLE_ENV_VAR) {
            self.style = style.parse().map_err(ConfigError::InvalidStyle)?;
        }

        Ok(())
    }

    /// Load settings: defaults, then the user config file, then environment
    ///
    /// Fails on the first broken source. See [`LoggerSettings::load_layered`]
    /// for a load that keeps the sources that did work.
    pub fn load() -> ConfigResult<Self> {
        let mut settings = Self::from_file(super::file::user_config_path())?;
        settings.apply_env()?;
        Ok(settings)
    }

    /// Load every source independently, collecting failures
    ///
    /// A broken config file leaves the defaults in place and environment
    /// overrides still apply on top.
    pub fn load_layered() -> (Self, Vec<ConfigError>) {
        Self::load_layered_with(super::file::user_config_path(), |key| std::env::var(key).ok())
    }

    /// Layered load from an explicit file and variable lookup
    pub fn load_layered_with<F>(path: impl AsRef<Path>, lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        let mut settings = Self::from_file(path).unwrap_or_else(|e| {
            errors.push(e);
            Self::default()
        });

        if let Err(e) = settings.apply_env_with(lookup) {
            errors.push(e);
        }

        (settings, errors)
    }
}
