//! Leveled logging
//!
//! - `LevelFilteredFormatter`: threshold filtering, formatting and sink hand-off
//! - `Logger` trait: per-severity entry points over a single `log` chokepoint
//! - `global`: a process-wide logger and free functions

mod traits;
mod threshold;
mod formatter;
pub mod global;

pub use traits::{Logger, SharedLogger};
pub use threshold::Threshold;
pub use formatter::{LevelFilteredFormatter, Clock, MESSAGE_TEMPLATE};

// Re-export global logger functions for convenience
pub use global::{global_logger, init_global};
