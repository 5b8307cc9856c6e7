//! Documented endpoint records as found in `api_data.json`.
//!
//! An [`Entry`] keeps the full JSON object it was parsed from. Only the
//! `version`, `filename` and `title` fields are interpreted here; everything
//! else is forwarded to the template exactly as it was read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key used for entries whose grouping field is missing.
pub const UNDEFINED_KEY: &str = "undefined";

/// One documented endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Map<String, Value>);

impl Entry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw access to any field of the record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `version` field, when it is a string.
    pub fn version(&self) -> Option<&str> {
        self.0.get("version").and_then(Value::as_str)
    }

    /// The `filename` field, when it is a string.
    pub fn filename(&self) -> Option<&str> {
        self.0.get("filename").and_then(Value::as_str)
    }

    /// The `title` field, when it is a string.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// Whether the entry belongs to a renderable section.
    pub fn has_title(&self) -> bool {
        self.0.get("title").is_some_and(is_truthy)
    }

    /// Grouping key for the `version` field.
    pub fn version_key(&self) -> String {
        group_key(self.0.get("version"))
    }

    /// Grouping key for the `filename` field.
    pub fn filename_key(&self) -> String {
        group_key(self.0.get("filename"))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Entry {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Turns a field value into the string it is grouped under.
///
/// Strings are used verbatim, other scalars by their JSON text, and a missing
/// field falls into the [`UNDEFINED_KEY`] bucket.
pub fn group_key(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED_KEY.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Loose truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
