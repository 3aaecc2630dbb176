//! Core types for leveled logging
//!
//! This module contains the severity model and message value helpers.

mod severity;
mod message;

pub use severity::{Severity, SeverityError, SEVERITY_NAMES, is_severity};
pub use message::{to_log_value, is_composite, has_composite, join_values, number_text};
