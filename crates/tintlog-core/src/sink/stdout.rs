//! Standard output sink

use std::io::{self, IsTerminal, Write};

use serde_json::Value;

use super::traits::{ConsoleSink, SinkResult};
use crate::types::number_text;

/// Cursor home followed by clear-to-end-of-screen
const CLEAR_SCREEN: &str = "\x1b[1;1H\x1b[0J";

/// Render console arguments as a single line of text
///
/// Follows JS console conventions: each `%c` in a leading string consumes one
/// following argument as its style and is removed from the output. Composite
/// values are pretty-printed as JSON.
pub fn render_line(args: &[Value]) -> String {
    let mut parts = Vec::with_capacity(args.len());
    let mut rest = args;

    if let Some((Value::String(first), tail)) = args.split_first() {
        let directives = first.matches("%c").count();
        parts.push(first.replace("%c", ""));
        rest = &tail[directives.min(tail.len())..];
    }

    parts.extend(rest.iter().map(|value| match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }));

    parts.join(" ")
}

/// A sink that writes to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdoutSink {
    fn write(&self, args: &[Value]) -> SinkResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", render_line(args))?;
        out.flush()?;
        Ok(())
    }

    fn clear(&self) -> SinkResult<()> {
        let stdout = io::stdout();
        // Redirected output has no screen to clear
        if !stdout.is_terminal() {
            return Ok(());
        }
        let mut out = stdout.lock();
        out.write_all(CLEAR_SCREEN.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
