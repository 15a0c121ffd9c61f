//! Loosely-typed field values carried by raw event input.
//!
//! # Responsibility
//! - Represent values decoded from request bodies or JSON documents without
//!   falling back to an untyped container.
//! - Provide the permissive truthy coercion used for the `allDay` flag.
//!
//! # Invariants
//! - Serialization reproduces the same JSON shape that was decoded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw field mapping as handed in by the surrounding application layer.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// One value in a raw field mapping.
///
/// Variant order matters for untagged decoding: integers are tried before
/// floats so `3` stays `Int(3)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<FieldValue>),
    Map(FieldMap),
}

impl FieldValue {
    /// Returns the inner string for `String` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerces any value to a boolean.
    ///
    /// Null, `false`, zero, the empty string, exactly `"0"` and empty
    /// collections are false. Everything else is true, including `"false"`
    /// and `" 0 "`. Never fails.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::String(value) => !(value.is_empty() || value == "0"),
            Self::List(items) => !items.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
        }
    }

    /// Textual form for scalar values; `None` for null and collections.
    pub(crate) fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Bool(value) => Some(value.to_string()),
            Self::Int(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::String(value) => Some(value.clone()),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Self::Null,
            FieldValue::Bool(value) => Self::Bool(value),
            FieldValue::Int(value) => Self::from(value),
            // Non-finite floats have no JSON form and become null.
            FieldValue::Float(value) => Self::from(value),
            FieldValue::String(value) => Self::String(value),
            FieldValue::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            FieldValue::Map(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}
