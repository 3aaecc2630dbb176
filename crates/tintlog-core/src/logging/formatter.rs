//! Level-filtered console logger

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::RwLock;
use serde_json::Value;

use super::threshold::Threshold;
use super::traits::Logger;
use crate::config::LoggerSettings;
use crate::environment::{EnvironmentDetector, RuntimeEnvironment};
use crate::sink::{default_sink, SharedSink};
use crate::style::{ColorScheme, RenderStyle};
use crate::types::{has_composite, join_values, Severity};

/// Line template: `%t` timestamp, `%l` severity label, `%m` message
pub const MESSAGE_TEMPLATE: &str = "[%t] [%l] - [%m]";

/// Source of timestamps for formatted lines
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// A leveled logger that filters by threshold and styles for its host
///
/// The render style and color table are chosen once, at construction, from an
/// [`EnvironmentDetector`]. The threshold starts unset, so nothing is written
/// until a level is set.
///
/// Logging never fails: unknown severities, empty messages, an unset
/// threshold and sink errors all end in a silent no-op.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use tintlog_core::{LevelFilteredFormatter, FixedEnvironment, MemorySink, Severity};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = LevelFilteredFormatter::with_parts(&FixedEnvironment::terminal(), sink.clone());
///
/// logger.info(&[json!("dropped")]);
/// assert!(sink.is_empty());
///
/// logger.set_threshold(Severity::Info);
/// logger.info(&[json!("cache warmed in"), json!(42), json!("ms")]);
/// assert_eq!(sink.len(), 1);
/// ```
pub struct LevelFilteredFormatter {
    threshold: RwLock<Threshold>,
    style: RenderStyle,
    scheme: ColorScheme,
    sink: SharedSink,
    clock: Clock,
}

impl std::fmt::Debug for LevelFilteredFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelFilteredFormatter")
            .field("threshold", &*self.threshold.read())
            .field("style", &self.style)
            .field("scheme", &self.scheme)
            .finish()
    }
}

impl Default for LevelFilteredFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelFilteredFormatter {
    /// Create a logger for the current runtime, writing to the default sink
    pub fn new() -> Self {
        Self::with_parts(&RuntimeEnvironment, default_sink())
    }

    /// Create a logger from an explicit detector and sink
    pub fn with_parts(detector: &dyn EnvironmentDetector, sink: SharedSink) -> Self {
        let (style, scheme) = RenderStyle::select(detector.is_browser());
        Self {
            threshold: RwLock::new(Threshold::Unset),
            style,
            scheme,
            sink,
            clock: Arc::new(Utc::now),
        }
    }

    /// Create a logger from loaded settings, writing to the default sink
    pub fn from_settings(settings: &LoggerSettings) -> Self {
        let logger = Self::with_parts(&settings.style, default_sink());
        match settings.level.as_deref() {
            Some(level) => logger.with_level(level),
            None => logger,
        }
    }

    /// Set the initial threshold by name
    pub fn with_level(self, level: &str) -> Self {
        self.set_level(level);
        self
    }

    /// Set the initial threshold
    pub fn with_threshold(self, threshold: impl Into<Threshold>) -> Self {
        *self.threshold.write() = threshold.into();
        self
    }

    /// Replace the sink
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the timestamp source
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// Set the threshold by severity name
    ///
    /// An empty name unsets the threshold. Any other unknown name is stored
    /// as-is and makes every later filter check fail.
    pub fn set_level(&self, level: &str) {
        *self.threshold.write() = Threshold::from_name(level);
    }

    /// Set the threshold to a severity
    pub fn set_threshold(&self, severity: Severity) {
        *self.threshold.write() = Threshold::Level(severity);
    }

    /// Unset the threshold; nothing is written until it is set again
    pub fn remove_level(&self) {
        self.set_level("");
    }

    /// Alias of [`LevelFilteredFormatter::remove_level`]
    pub fn clear_threshold(&self) {
        self.remove_level();
    }

    /// Snapshot of the current threshold
    pub fn threshold(&self) -> Threshold {
        self.threshold.read().clone()
    }

    /// Render style chosen at construction
    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// Color table chosen at construction
    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Resolve the severity of a message that should be written
    fn admitted(&self, severity: &str, values: &[Value]) -> Option<Severity> {
        if values.is_empty() {
            return None;
        }
        let severity = Severity::from_name(severity)?;
        self.threshold.read().admits(severity).then_some(severity)
    }

    /// Whether a message at `severity` would be written
    pub fn can_send(&self, severity: &str, values: &[Value]) -> bool {
        self.admitted(severity, values).is_some()
    }

    /// Build the sink arguments for a message
    ///
    /// If any value is composite the values are returned untouched so the
    /// console can display them natively.
    pub fn format(&self, severity: Severity, values: &[Value]) -> Vec<Value> {
        if has_composite(values) {
            return values.to_vec();
        }

        let timestamp = (self.clock)().to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = MESSAGE_TEMPLATE
            .replacen("%t", &timestamp, 1)
            .replacen("%l", severity.label(), 1)
            .replacen("%m", &join_values(values), 1);

        self.style.render(&self.scheme, severity, &line)
    }

    /// Write a message at the named severity if the threshold admits it
    pub fn log<S: AsRef<str>>(&self, severity: S, values: &[Value]) {
        let Some(severity) = self.admitted(severity.as_ref(), values) else {
            return;
        };

        let output = self.format(severity, values);
        // Logging must never fail the caller
        let _ = self.sink.write(&output);
    }

    pub fn error(&self, values: &[Value]) {
        self.log(Severity::Error, values);
    }

    pub fn warn(&self, values: &[Value]) {
        self.log(Severity::Warn, values);
    }

    pub fn info(&self, values: &[Value]) {
        self.log(Severity::Info, values);
    }

    pub fn debug(&self, values: &[Value]) {
        self.log(Severity::Debug, values);
    }

    /// Clear the console regardless of threshold
    pub fn clear(&self) -> &Self {
        let _ = self.sink.clear();
        self
    }
}

impl Logger for LevelFilteredFormatter {
    fn log(&self, severity: &str, values: &[Value]) {
        LevelFilteredFormatter::log(self, severity, values);
    }
}
