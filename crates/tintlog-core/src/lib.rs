//! tintlog Core
//!
//! A small leveled console logger. Messages below the configured threshold are
//! dropped; the rest are stamped with a timestamp and severity and styled for
//! the host: ANSI colors on terminals, `%c` directives on browser consoles.
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//! use tintlog_core::{LevelFilteredFormatter, Severity, log_info};
//!
//! let logger = LevelFilteredFormatter::new();
//! logger.set_threshold(Severity::Info);
//!
//! logger.info(&[json!("listening on"), json!(8080)]);
//! log_info!(logger, "cache size", 1024);
//!
//! // Composite values skip the template and reach the console untouched
//! logger.debug(&[json!({"peer": "10.0.0.7"})]);
//! ```
//!
//! A process-wide logger configured from `~/.config/tintlog/config.yaml` and
//! the `TINTLOG_LEVEL` / `TINTLOG_STYLE` environment variables is available
//! through the `logging::global` functions and the `*_log!` macros.

pub mod types;
pub mod style;
pub mod environment;
pub mod sink;
pub mod logging;
pub mod config;

// Re-export commonly used types
pub use types::{Severity, SeverityError, SEVERITY_NAMES, is_severity, to_log_value};

pub use style::{ColorScheme, RenderStyle, StyleMode};

pub use environment::{EnvironmentDetector, RuntimeEnvironment, FixedEnvironment};

pub use sink::{ConsoleSink, SharedSink, SinkError, SinkResult, StdoutSink, MemorySink, default_sink};

pub use logging::{
    Logger, SharedLogger, Threshold,
    LevelFilteredFormatter, MESSAGE_TEMPLATE,
    global_logger, init_global,
};

pub use config::{LoggerSettings, ConfigError, ConfigResult};
