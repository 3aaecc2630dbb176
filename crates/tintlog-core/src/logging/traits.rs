//! Logger trait definition

use std::sync::Arc;

use serde_json::Value;

use crate::types::Severity;

/// Leveled logging abstraction
///
/// Only [`Logger::log`] is required; the per-severity methods stamp their
/// severity and forward to it. Implementations must never panic or surface
/// errors to the caller.
pub trait Logger: Send + Sync {
    /// Log values at the named severity
    fn log(&self, severity: &str, values: &[Value]);

    /// Log an error
    fn error(&self, values: &[Value]) {
        self.log(Severity::Error.name(), values);
    }

    /// Log a warning
    fn warn(&self, values: &[Value]) {
        self.log(Severity::Warn.name(), values);
    }

    /// Log an informational message
    fn info(&self, values: &[Value]) {
        self.log(Severity::Info.name(), values);
    }

    /// Log a debug message
    fn debug(&self, values: &[Value]) {
        self.log(Severity::Debug.name(), values);
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Convenience macros for logging any serializable values
///
/// ```
/// use std::sync::Arc;
/// use tintlog_core::{log_warn, LevelFilteredFormatter, FixedEnvironment, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = LevelFilteredFormatter::with_parts(&FixedEnvironment::terminal(), sink.clone())
///     .with_level("warn");
///
/// log_warn!(logger, "retrying in", 5, "seconds");
/// assert_eq!(sink.len(), 1);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.error(&[$($crate::types::to_log_value(&$value)),+])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.warn(&[$($crate::types::to_log_value(&$value)),+])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.info(&[$($crate::types::to_log_value(&$value)),+])
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $logger.debug(&[$($crate::types::to_log_value(&$value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, Vec<Value>)>>,
    }

    impl Logger for Recorder {
        fn log(&self, severity: &str, values: &[Value]) {
            self.calls.lock().push((severity.to_string(), values.to_vec()));
        }
    }

    #[test]
    fn test_default_methods_stamp_severity() {
        let recorder = Recorder::default();
        recorder.error(&[json!("e")]);
        recorder.warn(&[json!("w")]);
        recorder.info(&[json!("i")]);
        recorder.debug(&[json!("d")]);

        let severities: Vec<_> = recorder.calls.lock().iter().map(|(s, _)| s.clone()).collect();
        assert_eq!(severities, vec!["error", "warn", "info", "debug"]);
    }

    #[test]
    fn test_macros_convert_values() {
        #[derive(serde::Serialize)]
        struct Job {
            id: u32,
        }

        let recorder = Recorder::default();
        log_info!(recorder, "job", 7, "done");
        log_debug!(recorder, Job { id: 7 },);

        let calls = recorder.calls.lock();
        assert_eq!(calls[0].1, vec![json!("job"), json!(7), json!("done")]);
        assert_eq!(calls[1].0, "debug");
        assert_eq!(calls[1].1, vec![json!({"id": 7})]);
    }
}
