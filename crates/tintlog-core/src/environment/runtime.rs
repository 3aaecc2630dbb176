//! Built-in environment detectors

use super::traits::EnvironmentDetector;

/// Detects the host from the compilation target
///
/// `wasm32-unknown-unknown` has no process host and runs inside a browser
/// (or webview) console; every other target is treated as a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeEnvironment;

impl EnvironmentDetector for RuntimeEnvironment {
    fn is_browser(&self) -> bool {
        cfg!(all(target_arch = "wasm32", target_os = "unknown"))
    }
}

/// A detector with a fixed answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEnvironment(pub bool);

impl FixedEnvironment {
    pub fn browser() -> Self {
        Self(true)
    }

    pub fn terminal() -> Self {
        Self(false)
    }
}

impl EnvironmentDetector for FixedEnvironment {
    fn is_browser(&self) -> bool {
        self.0
    }
}
