use serde::Deserialize;
use serde_json::Value;

/// A single value posted by a browser form, before validation.
///
/// Forms post JSON, so a field may arrive as any JSON value. A field counts
/// as filled in only if it is truthy: `null`, `false`, `0` and `""` are all
/// treated the same as an absent key.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FormField(Option<Value>);

impl FormField {
    /// The field rendered as text, or `None` if it was left empty.
    ///
    /// Strings are returned untouched; no trimming is applied.
    pub fn into_text(self) -> Option<String> {
        match self.0? {
            Value::Null | Value::Bool(false) => None,
            Value::Bool(true) => Some("true".into()),
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        }
    }
}

impl From<&str> for FormField {
    fn from(value: &str) -> Self {
        Self(Some(Value::String(value.to_owned())))
    }
}

impl From<Value> for FormField {
    fn from(value: Value) -> Self {
        Self(Some(value))
    }
}
