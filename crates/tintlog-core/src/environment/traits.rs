//! Environment detector trait

/// Environment detection abstraction
///
/// Implementations:
/// - `RuntimeEnvironment`: decided by the compilation target
/// - `FixedEnvironment`: a constant answer, for tests and overrides
/// - `StyleMode`: a configured override that can defer to the runtime
pub trait EnvironmentDetector: Send + Sync {
    /// True when running in a browser-like host
    fn is_browser(&self) -> bool;
}

