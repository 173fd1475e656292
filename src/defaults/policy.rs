//! When a scoped value gives way to its default.

use serde_json::Value;

/// Rule deciding whether a looked-up value falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Missing keys and falsy values (`null`, `false`, `0`, `""`) use the default.
    #[default]
    Falsy,
    /// Only missing keys use the default; stored falsy values are returned.
    Missing,
}

impl FallbackPolicy {
    /// Resolve a scoped lookup against its default.
    pub fn resolve(self, scoped: Option<&Value>, default: Option<&Value>) -> Option<Value> {
        let keep = match self {
            FallbackPolicy::Falsy => scoped.filter(|v| is_truthy(v)),
            FallbackPolicy::Missing => scoped,
        };
        keep.or(default).cloned()
    }
}

/// Truthiness of a JSON value: everything except `null`, `false`, zero and `""`.
/// Empty arrays and objects are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
