//! Severity levels and the registry of valid severity names

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid severity names, least verbose first
pub const SEVERITY_NAMES: [&str; 4] = ["error", "warn", "info", "debug"];

/// Name -> severity lookup backing [`Severity::from_name`]
static REGISTRY: Lazy<HashMap<&'static str, Severity>> = Lazy::new(|| {
    Severity::ALL
        .iter()
        .map(|severity| (severity.name(), *severity))
        .collect()
});

/// A named verbosity level
///
/// Ordered from least to most verbose, so `Severity::Error < Severity::Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl Severity {
    /// Every severity in rank order
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    /// Position in the verbosity order (error = 0 ... debug = 3)
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Lower-case registry name
    pub fn name(self) -> &'static str {
        SEVERITY_NAMES[self as usize]
    }

    /// Upper-case label used in formatted lines
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Look up a severity by its exact (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Severity> {
        REGISTRY.get(name).copied()
    }
}

/// Check whether `name` is a registered severity
pub fn is_severity(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

impl AsRef<str> for Severity {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from parsing a severity name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeverityError {
    #[error("Severity name is empty")]
    Empty,

    #[error("Unknown severity: {0} (expected one of error, warn, info, debug)")]
    Unknown(String),
}

impl FromStr for Severity {
    type Err = SeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SeverityError::Empty);
        }
        Severity::from_name(s).ok_or_else(|| SeverityError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(Severity::Error < Severity::Warn);
        assert!(Severity::Warn < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
        assert_eq!(Severity::Error.rank(), 0);
        assert_eq!(Severity::Debug.rank(), 3);
    }

    #[test]
    fn test_names_and_labels() {
        for (severity, name) in Severity::ALL.iter().zip(SEVERITY_NAMES) {
            assert_eq!(severity.name(), name);
            assert_eq!(severity.label(), name.to_uppercase());
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Severity::from_name("warn"), Some(Severity::Warn));
        assert_eq!(Severity::from_name("WARN"), None);
        assert!(is_severity("debug"));
        assert!(!is_severity("trace"));
        assert!(!is_severity(""));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("".parse::<Severity>(), Err(SeverityError::Empty));
        assert!(matches!(
            "bogus".parse::<Severity>(),
            Err(SeverityError::Unknown(name)) if name == "bogus"
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Severity::Warn).unwrap();
        assert_eq!(json, "\"warn\"");

        let parsed: Severity = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(parsed, Severity::Debug);
    }
}
