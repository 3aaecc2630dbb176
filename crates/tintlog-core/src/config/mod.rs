//! Logger configuration
//!
//! Settings come from, in increasing priority:
//! - built-in defaults (no threshold, automatic style)
//! - the user config file (`~/.config/tintlog/config.yaml`)
//! - environment variables (`TINTLOG_LEVEL`, `TINTLOG_STYLE`)

mod settings;
mod file;

pub use settings::{LoggerSettings, ConfigError, ConfigResult, LEVEL_ENV_VAR, STYLE_ENV_VAR};
pub use file::user_config_path;
