//! YAML settings files

use std::fs;
use std::path::{Path, PathBuf};

use super::settings::{ConfigResult, LoggerSettings};

/// Path of the user-level config file (~/.config/tintlog/config.yaml)
pub fn user_config_path() -> PathBuf {
    // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join("tintlog").join("config.yaml")
}

impl LoggerSettings {
    /// Parse settings from YAML text; blank text yields defaults
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load settings from a YAML file; a missing file yields defaults
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Serialize settings to YAML text
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write settings to a YAML file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}
