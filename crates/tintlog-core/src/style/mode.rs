//! Configured style override

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::environment::{EnvironmentDetector, RuntimeEnvironment};

/// Which output style to use
///
/// `Auto` defers to runtime detection; the other two force a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    #[default]
    Auto,
    Browser,
    Terminal,
}

impl StyleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleMode::Auto => "auto",
            StyleMode::Browser => "browser",
            StyleMode::Terminal => "terminal",
        }
    }
}

impl EnvironmentDetector for StyleMode {
    fn is_browser(&self) -> bool {
        match self {
            StyleMode::Auto => RuntimeEnvironment.is_browser(),
            StyleMode::Browser => true,
            StyleMode::Terminal => false,
        }
    }
}

impl FromStr for StyleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(StyleMode::Auto),
            "browser" => Ok(StyleMode::Browser),
            "terminal" => Ok(StyleMode::Terminal),
            _ => Err(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_modes() {
        assert!(StyleMode::Browser.is_browser());
        assert!(!StyleMode::Terminal.is_browser());
    }

    #[test]
    fn test_auto_follows_runtime() {
        assert_eq!(StyleMode::Auto.is_browser(), RuntimeEnvironment.is_browser());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Terminal".parse::<StyleMode>(), Ok(StyleMode::Terminal));
        assert_eq!(" browser ".parse::<StyleMode>(), Ok(StyleMode::Browser));
        assert_eq!("neon".parse::<StyleMode>(), Err("neon".to_string()));
        assert_eq!(StyleMode::default().as_str(), "auto");
    }
}
