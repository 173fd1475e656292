//! Defaulted, optionally class-scoped view over a config section.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::defaults::policy::{is_truthy, FallbackPolicy};
use crate::error::ConfigResult;
use crate::section::ConfigSection;
use crate::JsonObject;

/// Reads fall back to `defaults`; reads and writes go to `data[class_name]`
/// when a class name is set.
#[derive(Debug, Clone)]
pub struct ConfigWithDefaults {
    section: Arc<ConfigSection>,
    defaults: JsonObject,
    class_name: Option<String>,
    fallback: FallbackPolicy,
}

impl ConfigWithDefaults {
    pub fn new(
        section: Arc<ConfigSection>,
        defaults: Option<JsonObject>,
        class_name: Option<String>,
    ) -> Self {
        Self {
            section,
            defaults: defaults.unwrap_or_default(),
            class_name,
            fallback: FallbackPolicy::default(),
        }
    }

    /// Use a different fallback rule for `get`.
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Scoped value for `key`, or its default. `None` if neither yields one.
    pub fn get(&self, key: &str) -> Option<Value> {
        let data = self.section.data();
        let scoped = scope(&data, self.class_name.as_deref()).and_then(|s| s.get(key));
        self.fallback.resolve(scoped, self.defaults.get(key))
    }

    /// Write one key through the section's `update`.
    ///
    /// With a class name the payload is `{class: {key: value}}`, which
    /// replaces the whole class object in the local mirror until the server
    /// answers.
    pub fn set(
        &self,
        key: &str,
        value: Value,
    ) -> impl Future<Output = ConfigResult<JsonObject>> + Send + '_ {
        self.section
            .update(payload(self.class_name.as_deref(), key, value))
    }

    pub fn section(&self) -> &Arc<ConfigSection> {
        &self.section
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn defaults(&self) -> &JsonObject {
        &self.defaults
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }
}

/// The object reads are scoped to. An absent, falsy or non-object class
/// entry has no keys.
fn scope<'a>(data: &'a JsonObject, class_name: Option<&str>) -> Option<&'a JsonObject> {
    match class_name {
        None => Some(data),
        Some(class) => data
            .get(class)
            .filter(|v| is_truthy(v))
            .and_then(Value::as_object),
    }
}

fn payload(class_name: Option<&str>, key: &str, value: Value) -> JsonObject {
    let mut inner = JsonObject::new();
    inner.insert(key.to_string(), value);

    match class_name {
        None => inner,
        Some(class) => {
            let mut outer = JsonObject::new();
            outer.insert(class.to_string(), Value::Object(inner));
            outer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_payload_shapes() {
        assert_eq!(
            Value::Object(payload(None, "foo", json!("bar"))),
            json!({"foo": "bar"})
        );
        assert_eq!(
            Value::Object(payload(Some("testclass"), "foo", json!("bar"))),
            json!({"testclass": {"foo": "bar"}})
        );
    }

    #[test]
    fn test_scope_without_class_is_data() {
        let data = object(json!({"foo": 1}));
        assert_eq!(scope(&data, None), Some(&data));
    }

    #[test]
    fn test_scope_with_class() {
        let data = object(json!({"testclass": {"foo": "bar"}, "empty": "", "scalar": 3}));
        assert_eq!(
            scope(&data, Some("testclass")).and_then(|s| s.get("foo")),
            Some(&json!("bar"))
        );
        assert!(scope(&data, Some("missing")).is_none());
        assert!(scope(&data, Some("empty")).is_none());
        assert!(scope(&data, Some("scalar")).is_none());
    }
}
