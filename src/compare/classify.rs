//! Value classification and display formatting

use crate::compare::types::ValueType;
use serde_json::Value;

/// Classify a value; `None` stands for a value that is absent entirely
pub fn classify(value: Option<&Value>) -> ValueType {
    match value {
        None => ValueType::Undefined,
        Some(Value::Null) => ValueType::Null,
        Some(Value::Array(_)) => ValueType::Array,
        Some(Value::Bool(_)) => ValueType::Boolean,
        Some(Value::Number(_)) => ValueType::Number,
        Some(Value::String(_)) => ValueType::String,
        Some(Value::Object(_)) => ValueType::Object,
    }
}

/// Render a classified value as a short display string
///
/// Objects render as an empty string and arrays as their item count; every
/// other value renders as its plain text form (strings unquoted).
pub fn format_value(value: &Value, value_type: ValueType) -> String {
    match (value_type, value) {
        (ValueType::Object, _) => String::new(),
        (ValueType::Array, Value::Array(items)) => format!("[{} items]", items.len()),
        (ValueType::Undefined, _) => "undefined".to_string(),
        (_, Value::String(s)) => s.clone(),
        (_, other) => other.to_string(),
    }
}
