//! Severity threshold state

use crate::types::Severity;

/// The most verbose severity currently allowed to emit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Threshold {
    /// No filtering active: nothing passes
    #[default]
    Unset,
    /// Severities up to and including this one pass
    Level(Severity),
    /// A name outside the severity registry was set: nothing passes
    Unrecognized(String),
}

impl Threshold {
    /// Build a threshold from a severity name
    ///
    /// The empty name means unset.
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() {
            return Threshold::Unset;
        }
        match Severity::from_name(name) {
            Some(severity) => Threshold::Level(severity),
            None => Threshold::Unrecognized(name.to_string()),
        }
    }

    /// Whether a message at `severity` passes this threshold
    pub fn admits(&self, severity: Severity) -> bool {
        match self {
            Threshold::Level(limit) => severity.rank() <= limit.rank(),
            Threshold::Unset | Threshold::Unrecognized(_) => false,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Threshold::Unset)
    }

    /// The active severity, if the threshold is a recognized level
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Threshold::Level(severity) => Some(*severity),
            _ => None,
        }
    }
}

impl From<Severity> for Threshold {
    fn from(severity: Severity) -> Self {
        Threshold::Level(severity)
    }
}

impl From<Option<Severity>> for Threshold {
    fn from(severity: Option<Severity>) -> Self {
        severity.map(Threshold::Level).unwrap_or_default()
    }
}
