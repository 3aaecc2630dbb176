//! Color tables for terminal and browser output

use crate::types::Severity;

/// Style tokens for each severity plus the start/end decorations
///
/// Terminal tokens are ANSI escape sequences. Browser tokens are CSS strings
/// consumed by a `%c` format directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub start: &'static str,
    pub end: &'static str,
    pub error: &'static str,
    pub warn: &'static str,
    pub info: &'static str,
    pub debug: &'static str,
}

impl ColorScheme {
    /// ANSI escape codes for terminal hosts
    pub const fn terminal() -> Self {
        Self {
            start: "\x1b[2m",  // Dim
            end: "\x1b[0m",    // Reset
            error: "\x1b[31m", // Red
            warn: "\x1b[35m",  // Magenta
            info: "\x1b[33m",  // Yellow
            debug: "\x1b[36m", // Cyan
        }
    }

    /// `%c` directive and CSS for browser consoles
    pub const fn browser() -> Self {
        Self {
            start: "%c",
            end: "",
            error: "color : #ff0000",
            warn: "color : #ffff00",
            info: "color : #ff00ff",
            debug: "color : #00ffff",
        }
    }

    /// Token for a severity
    pub fn token(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Error => self.error,
            Severity::Warn => self.warn,
            Severity::Info => self.info,
            Severity::Debug => self.debug,
        }
    }
}
