//! Runtime environment detection
//!
//! Decides whether output should use browser-console styling or terminal
//! escape codes.

mod traits;
mod runtime;

pub use traits::EnvironmentDetector;
pub use runtime::{RuntimeEnvironment, FixedEnvironment};
