use serde_json::Value;

/// Text forwarded to a provider for a loosely typed request field.
///
/// Strings pass through unchanged, other scalars use their JSON text, and a missing or
/// `null` field becomes `""`. The provider decides whether the value is acceptable.
pub fn forwarded_text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}
