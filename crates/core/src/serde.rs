//! Serde helpers for request payloads.
//!
//! Clients of the phonebook API are browsers posting loosely typed JSON, so
//! text fields accept a few non-string shapes instead of rejecting the whole
//! body.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional text field leniently.
///
/// - strings are kept as-is (an empty string stays `Some("")`)
/// - non-zero numbers become their decimal text
/// - `true` becomes `"true"`
/// - `null`, `false` and `0` count as absent
///
/// Objects and arrays are rejected.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => {
            if n.as_f64() == Some(0.0) {
                Ok(None)
            } else {
                Ok(Some(n.to_string()))
            }
        }
        Some(other) => Err(de::Error::custom(format!(
            "expected a string, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
