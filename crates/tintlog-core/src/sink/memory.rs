//! In-memory sink

use parking_lot::Mutex;
use serde_json::Value;

use super::traits::{ConsoleSink, SinkResult};

/// In-memory sink for testing and capture
///
/// Records the arguments of every write and counts clear calls.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use tintlog_core::{LevelFilteredFormatter, FixedEnvironment, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = LevelFilteredFormatter::with_parts(&FixedEnvironment::terminal(), sink.clone())
///     .with_level("warn");
///
/// logger.error(&[json!("disk full")]);
/// logger.info(&[json!("suppressed")]);
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Vec<Value>>>,
    clears: Mutex<usize>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded writes
    pub fn entries(&self) -> Vec<Vec<Value>> {
        self.entries.lock().clone()
    }

    /// Arguments of the most recent write
    pub fn last(&self) -> Option<Vec<Value>> {
        self.entries.lock().last().cloned()
    }

    /// Number of recorded writes
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of clear calls received
    pub fn clear_count(&self) -> usize {
        *self.clears.lock()
    }

    /// Drain recorded writes
    pub fn take(&self) -> Vec<Vec<Value>> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl ConsoleSink for MemorySink {
    fn write(&self, args: &[Value]) -> SinkResult<()> {
        self.entries.lock().push(args.to_vec());
        Ok(())
    }

    fn clear(&self) -> SinkResult<()> {
        *self.clears.lock() += 1;
        Ok(())
    }
}
