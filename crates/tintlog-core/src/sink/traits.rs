//! Console sink trait

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while writing to a sink
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for formatted log output
///
/// A write receives the full argument list of one log call, mirroring a
/// variadic `console.log(...)`.
pub trait ConsoleSink: Send + Sync {
    /// Write one log call's arguments
    fn write(&self, args: &[Value]) -> SinkResult<()>;

    /// Clear the console display
    fn clear(&self) -> SinkResult<()>;
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn ConsoleSink>;
