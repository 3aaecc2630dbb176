//! Process-wide logger
//!
//! Provides a global logger configured from [`LoggerSettings::load_layered`] on
//! first use, so any module can log without threading a logger through.

use std::sync::OnceLock;

use serde_json::Value;

use super::formatter::LevelFilteredFormatter;
use crate::config::LoggerSettings;
use crate::types::Severity;

/// Global logger instance
static GLOBAL: OnceLock<LevelFilteredFormatter> = OnceLock::new();

/// Get the global logger, building it from settings on first use
///
/// Each settings source is loaded on its own, so a broken config file does not
/// discard environment overrides. Load failures are reported through the new
/// logger at warn severity once its threshold is in place.
pub fn global_logger() -> &'static LevelFilteredFormatter {
    GLOBAL.get_or_init(|| {
        let (settings, errors) = LoggerSettings::load_layered();
        let logger = LevelFilteredFormatter::from_settings(&settings);
        for e in errors {
            logger.warn(&[Value::String(format!("tintlog: ignoring settings source ({})", e))]);
        }
        logger
    })
}

/// Install `logger` as the global logger
///
/// Fails, handing the logger back, if the global logger already exists.
pub fn init_global(logger: LevelFilteredFormatter) -> Result<(), LevelFilteredFormatter> {
    GLOBAL.set(logger)
}

/// Log values at the named severity
pub fn log(severity: &str, values: &[Value]) {
    global_logger().log(severity, values);
}

/// Log an error
pub fn error(values: &[Value]) {
    log(Severity::Error.name(), values);
}

/// Log a warning
pub fn warn(values: &[Value]) {
    log(Severity::Warn.name(), values);
}

/// Log an informational message
pub fn info(values: &[Value]) {
    log(Severity::Info.name(), values);
}

/// Log a debug message
pub fn debug(values: &[Value]) {
    log(Severity::Debug.name(), values);
}

/// Set the global threshold by severity name
pub fn set_level(level: &str) {
    global_logger().set_level(level);
}

/// Unset the global threshold
pub fn remove_level() {
    global_logger().remove_level();
}

/// Clear the console
pub fn clear() -> &'static LevelFilteredFormatter {
    global_logger().clear()
}

/// Convenience macros for logging through the global logger
#[macro_export]
macro_rules! error_log {
    ($($value:expr),+ $(,)?) => {
        $crate::logging::global::error(&[$($crate::types::to_log_value(&$value)),+])
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($value:expr),+ $(,)?) => {
        $crate::logging::global::warn(&[$($crate::types::to_log_value(&$value)),+])
    };
}

#[macro_export]
macro_rules! info_log {
    ($($value:expr),+ $(,)?) => {
        $crate::logging::global::info(&[$($crate::types::to_log_value(&$value)),+])
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($value:expr),+ $(,)?) => {
        $crate::logging::global::debug(&[$($crate::types::to_log_value(&$value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;
    use crate::logging::Threshold;
    use crate::sink::MemorySink;
    use serde_json::json;
    use std::sync::Arc;

    // The global logger is process-wide, so everything touching it lives in
    // this one test.
    #[test]
    fn test_global_logger() {
        let sink = Arc::new(MemorySink::new());
        let logger = LevelFilteredFormatter::with_parts(&FixedEnvironment::terminal(), sink.clone());
        assert!(init_global(logger).is_ok());
        assert!(init_global(LevelFilteredFormatter::new()).is_err());

        info(&[json!("before threshold")]);
        assert!(sink.is_empty());

        set_level("info");
        assert_eq!(global_logger().threshold(), Threshold::Level(Severity::Info));

        error(&[json!("e")]);
        warn(&[json!("w")]);
        info(&[json!("i")]);
        debug(&[json!("d")]);
        log("bogus", &[json!("b")]);
        assert_eq!(sink.len(), 3);

        crate::error_log!("disk", 95, "percent full");
        crate::debug_log!("dropped");
        crate::warn_log!(json!({"retry": 2}));
        crate::info_log!("ok");
        assert_eq!(sink.len(), 6);
        assert_eq!(sink.entries()[4], vec![json!({"retry": 2})]);

        clear().clear();
        assert_eq!(sink.clear_count(), 2);

        remove_level();
        error(&[json!("after remove")]);
        assert_eq!(sink.len(), 6);
    }
}
