//! Console sinks
//!
//! - `ConsoleSink` trait: variadic write plus clear
//! - `StdoutSink`: terminal output on native hosts
//! - `MemorySink`: records calls, for tests and in-process capture
//! - `WebConsoleSink`: browser `console` (wasm32 only)

mod traits;
mod stdout;
mod memory;
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
mod web;

use std::sync::Arc;

pub use traits::{ConsoleSink, SharedSink, SinkError, SinkResult};
pub use stdout::{StdoutSink, render_line};
pub use memory::MemorySink;
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub use web::WebConsoleSink;

/// The console sink for the current target
pub fn default_sink() -> SharedSink {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        Arc::new(WebConsoleSink::new())
    }

    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    {
        Arc::new(StdoutSink::new())
    }
}
