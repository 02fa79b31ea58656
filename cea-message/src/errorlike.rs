//! Deep serialization of nested error-like values inside tool-result
//! content, so a model that echoes back a tool result containing a raw
//! `Error` object gets a stable, serializable shape instead.

use serde_json::Map;
use serde_json::Value;

/// Recursively walk `value`: arrays map element-wise, objects map
/// field-wise, and any object that looks like an `Error` (has a `message`
/// field, plus a `name` or `stack` field) is rewritten to the canonical
/// `{ __error: true, name, message, stack }` shape. Everything else passes
/// through unchanged.
pub fn deep_serialize_errors(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(deep_serialize_errors).collect()),
        Value::Object(map) => {
            if is_error_like(&map) {
                canonicalize_error(map)
            } else {
                Value::Object(
                    map.into_iter()
                        .map(|(key, val)| (key, deep_serialize_errors(val)))
                        .collect(),
                )
            }
        }
        other => other,
    }
}

fn is_error_like(map: &Map<String, Value>) -> bool {
    map.get("message").is_some_and(Value::is_string) && (map.contains_key("name") || map.contains_key("stack"))
}

fn canonicalize_error(mut map: Map<String, Value>) -> Value {
    let message = map.remove("message").unwrap_or(Value::String(String::new()));
    let name = map.remove("name").unwrap_or_else(|| Value::String("Error".to_string()));
    let stack = map.remove("stack").unwrap_or(Value::Null);

    let mut out = Map::new();
    out.insert("__error".to_string(), Value::Bool(true));
    out.insert("name".to_string(), name);
    out.insert("message".to_string(), message);
    out.insert("stack".to_string(), stack);
    Value::Object(out)
}

#[cfg(test)]
#[path = "errorlike.test.rs"]
mod tests;
