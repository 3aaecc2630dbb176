//! Browser console sink (wasm32)

use js_sys::Array;
use serde_json::Value;
use wasm_bindgen::JsValue;

use super::traits::{ConsoleSink, SinkResult};

/// A sink that forwards to the browser's `console`
///
/// Composite values are handed over as live JS objects so the console's own
/// inspector can expand them.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebConsoleSink;

impl WebConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

fn to_js(value: &Value) -> JsValue {
    match value {
        Value::Null => JsValue::NULL,
        Value::Bool(b) => JsValue::from_bool(*b),
        Value::Number(n) => n.as_f64().map(JsValue::from_f64).unwrap_or(JsValue::NULL),
        Value::String(s) => JsValue::from_str(s),
        composite => {
            let text = composite.to_string();
            js_sys::JSON::parse(&text).unwrap_or_else(|_| JsValue::from_str(&text))
        }
    }
}

impl ConsoleSink for WebConsoleSink {
    fn write(&self, args: &[Value]) -> SinkResult<()> {
        let array: Array = args.iter().map(to_js).collect();
        web_sys::console::log(&array);
        Ok(())
    }

    fn clear(&self) -> SinkResult<()> {
        web_sys::console::clear();
        Ok(())
    }
}
