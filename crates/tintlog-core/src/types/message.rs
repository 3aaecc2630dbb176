//! Message values handed to the logger

use serde::Serialize;
use serde_json::{Number, Value};

/// Convert any serializable value into a message value
///
/// Never fails: values serde cannot represent (e.g. maps with non-string keys)
/// become a descriptive string instead.
pub fn to_log_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| Value::String(format!("<unserializable: {}>", e)))
}

/// Whether a value is composite (array or object) rather than primitive
pub fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Whether any value in the message is composite
pub fn has_composite(values: &[Value]) -> bool {
    values.iter().any(is_composite)
}

/// Render a number the way a JS console does
///
/// Whole-valued floats drop the fractional part (`2.0` -> `2`) and negative
/// zero prints as `0`.
pub fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(f) if number.is_f64() && f == 0.0 => "0".to_string(),
        // f64's Display never appends `.0`
        Some(f) if number.is_f64() => f.to_string(),
        _ => number.to_string(),
    }
}

/// Join primitive values into one space-separated string
///
/// Strings are inserted raw (unquoted) and null renders as an empty string.
pub fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Number(n) => number_text(n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_to_log_value() {
        assert_eq!(to_log_value("hello"), json!("hello"));
        assert_eq!(to_log_value(&42), json!(42));
        assert_eq!(to_log_value(&vec![1, 2]), json!([1, 2]));
    }

    #[test]
    fn test_to_log_value_unserializable() {
        let mut map = HashMap::new();
        map.insert((1, 2), "tuple key");

        let value = to_log_value(&map);
        assert!(value.as_str().unwrap().starts_with("<unserializable"));
    }

    #[test]
    fn test_composite_detection() {
        assert!(is_composite(&json!({"a": 1})));
        assert!(is_composite(&json!([1])));
        assert!(!is_composite(&json!("text")));
        assert!(!is_composite(&json!(null)));

        assert!(has_composite(&[json!("a"), json!({"b": 2})]));
        assert!(!has_composite(&[json!("a"), json!(3), json!(true)]));
    }

    #[test]
    fn test_number_text() {
        assert_eq!(number_text(&Number::from(42)), "42");
        assert_eq!(number_text(&Number::from(-7i64)), "-7");
        assert_eq!(number_text(&Number::from_f64(2.0).unwrap()), "2");
        assert_eq!(number_text(&Number::from_f64(1.5).unwrap()), "1.5");
        assert_eq!(number_text(&Number::from_f64(-0.0).unwrap()), "0");
        assert_eq!(number_text(&Number::from(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_join_values() {
        let values = [json!("disk"), json!(95), json!(true), json!(1.5)];
        assert_eq!(join_values(&values), "disk 95 true 1.5");

        assert_eq!(join_values(&[json!("a"), json!(null), json!("b")]), "a  b");
        assert_eq!(join_values(&[json!("took"), json!(2.0), json!("s")]), "took 2 s");
        assert_eq!(join_values(&[]), "");
    }
}
