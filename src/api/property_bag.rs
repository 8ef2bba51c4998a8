use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Color;

/// Host formatting properties, keyed by object group then property name.
///
/// Mirrors the `{ "group": { "key": value } }` document hosts persist.
/// Lookups never fail: an absent key or a value of the wrong shape yields the
/// caller's default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    groups: IndexMap<String, IndexMap<String, Value>>,
}

impl PropertyBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_property(mut self, group: &str, key: &str, value: impl Into<Value>) -> Self {
        self.set_property(group, key, value);
        self
    }

    pub fn set_property(&mut self, group: &str, key: &str, value: impl Into<Value>) {
        self.groups
            .entry(group.to_owned())
            .or_default()
            .insert(key.to_owned(), value.into());
    }

    #[must_use]
    pub fn raw(&self, group: &str, key: &str) -> Option<&Value> {
        self.groups.get(group)?.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(IndexMap::is_empty)
    }

    /// Typed lookup; falls back to `default` when absent or not deserializable as `T`.
    #[must_use]
    pub fn get_property<T: DeserializeOwned>(&self, group: &str, key: &str, default: T) -> T {
        self.raw(group, key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or(default)
    }

    /// Color lookup accepting `{ "solid": { "color": ".." } }` or a bare CSS string.
    #[must_use]
    pub fn get_color_property(&self, group: &str, key: &str, default: Color) -> Color {
        let Some(value) = self.raw(group, key) else {
            return default;
        };
        let text = match value {
            Value::String(text) => Some(text.as_str()),
            Value::Object(_) => value
                .pointer("/solid/color")
                .and_then(Value::as_str),
            _ => None,
        };
        text.and_then(Color::from_css).unwrap_or(default)
    }

    pub(super) fn get_bool(&self, group: &str, key: &str, default: bool) -> bool {
        self.raw(group, key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    pub(super) fn get_number(&self, group: &str, key: &str, default: f64) -> f64 {
        self.raw(group, key)
            .and_then(Value::as_f64)
            .unwrap_or(default)
    }

    pub(super) fn get_str(&self, group: &str, key: &str) -> Option<&str> {
        self.raw(group, key).and_then(Value::as_str)
    }
}
