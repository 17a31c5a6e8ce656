//! Entity records as returned by the remote API
//!
//! A record keeps the server's JSON object as-is, so fields the screens do not
//! know about survive a load → edit → submit cycle. Typed access goes through
//! the field configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::datetime;
use super::metadata::{FieldConfig, FieldKind};

/// One business object as a field → scalar mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord(Map<String, Value>);

/// Typed view of a record value, selected by the field's kind
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Empty,
    Text(String),
    Number(Number),
    Date(String),
    Boolean(bool),
}

/// Body of a list response: `{ "value": [...] }`, a missing `value` read as empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionResponse {
    #[serde(default)]
    pub value: Vec<EntityRecord>,
}

impl EntityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Identity value rendered as it appears in URLs
    pub fn id_string(&self, identity_key: &str) -> Option<String> {
        self.get(identity_key).and_then(scalar_to_string)
    }

    /// Typed value of a configured field
    pub fn value(&self, field: &FieldConfig) -> FieldValue {
        let Some(raw) = self.get(field.key) else {
            return FieldValue::Empty;
        };
        match (field.kind, raw) {
            (_, Value::Null) => FieldValue::Empty,
            (FieldKind::Boolean, Value::Bool(b)) => FieldValue::Boolean(*b),
            (FieldKind::Boolean, other) => FieldValue::Boolean(is_truthy(other)),
            (FieldKind::Number, Value::Number(n)) => FieldValue::Number(n.clone()),
            (FieldKind::Date, Value::String(s)) => FieldValue::Date(s.clone()),
            (FieldKind::Text | FieldKind::Email | FieldKind::Number | FieldKind::Date, other) => {
                scalar_to_string(other)
                    .map(FieldValue::Text)
                    .unwrap_or(FieldValue::Empty)
            }
        }
    }

    /// Text shown in a text control; empty for null or missing values
    pub fn text_value(&self, key: &str) -> String {
        self.get(key).and_then(scalar_to_string).unwrap_or_default()
    }

    /// Checkbox state; missing values read as unchecked
    pub fn checked(&self, key: &str) -> bool {
        self.get(key).map(is_truthy).unwrap_or(false)
    }

    /// Value for a `datetime-local` control
    pub fn picker_value(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => datetime::to_picker_value(s),
            _ => String::new(),
        }
    }

    /// Read-only rendering of a configured field
    pub fn display(&self, field: &FieldConfig) -> String {
        match self.value(field) {
            FieldValue::Empty => String::new(),
            FieldValue::Text(s) => s,
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(s) => datetime::format_display(&s),
            FieldValue::Boolean(b) => if b { "Yes" } else { "No" }.to_string(),
        }
    }
}

impl From<Map<String, Value>> for EntityRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Render a scalar JSON value the way it is used as a key or label.
///
/// Strings come back unquoted; objects and arrays have no scalar form.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}
