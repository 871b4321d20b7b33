//! Property values carried by raw records and graph nodes
//!
//! Properties pass through the pipeline as JSON values. The map keeps the
//! upstream key order so serialized nodes read the same way the store
//! returned them.

use indexmap::IndexMap;
use serde_json::Value;

/// Property map for storing record and node properties
pub type PropertyMap = IndexMap<String, Value>;

/// Check whether a property value counts as a present identifier
///
/// Missing, `null`, `false`, numeric zero and the empty string are treated
/// as absent. Arrays and objects are always present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Check whether a value is a numeric zero
pub fn is_zero(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.as_f64() == Some(0.0))
}

/// Render a property value the way it appears inside a composite id
///
/// Strings are used without quotes and numbers in their plain decimal form,
/// so a whole float renders like the integer it equals. Anything else is
/// compact JSON.
pub fn id_fragment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Read a numeric magnitude from a property value
pub fn as_magnitude(value: &Value) -> Option<f64> {
    value.as_f64().filter(|f| f.is_finite())
}
