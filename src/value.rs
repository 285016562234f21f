//! Loose JSON value helpers shared by the proxy and the client.

use serde_json::Value;

/// Truthiness in the browser sense: `null`, `false`, `0` and `""` are falsy,
/// every array and object is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value as display text: strings verbatim, anything else as JSON.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Field lookup that treats falsy values as absent.
pub fn truthy_field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.get(name).filter(|v| is_truthy(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn display_keeps_strings_bare() {
        assert_eq!(display(&json!("plain")), "plain");
        assert_eq!(display(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(display(&json!(42)), "42");
    }
}
