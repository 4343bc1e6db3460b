//! Document model.
//!
//! A raw document is an unordered field-name → value mapping as returned by
//! the sampler. Before inference every document is sanitized: fields whose
//! names start with the reserved prefix (`_id`, `_etag`, `_ts`, ...) are
//! internal to the store and never profiled.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::SenseError;

/// Field names starting with this prefix are reserved by the store.
pub const RESERVED_PREFIX: char = '_';

/// A document exactly as fetched from the store.
pub type RawDocument = Map<String, Value>;

/// A document with all reserved-prefix fields removed.
///
/// The only ways to obtain one are [`SanitizedDocument::from_raw`] and
/// [`SanitizedDocument::from_value`], so downstream code can rely on the
/// stripping having happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SanitizedDocument(Map<String, Value>);

impl SanitizedDocument {
    /// Strip reserved fields from a raw document.
    pub fn from_raw(raw: RawDocument) -> Self {
        let fields = raw
            .into_iter()
            .filter(|(name, _)| !name.starts_with(RESERVED_PREFIX))
            .collect();
        Self(fields)
    }

    /// Sanitize an arbitrary JSON value.
    ///
    /// Fails unless the value is an object; a sample that yields scalars or
    /// arrays at the top level is malformed input, not an empty document.
    pub fn from_value(value: Value) -> Result<Self, SenseError> {
        match value {
            Value::Object(map) => Ok(Self::from_raw(map)),
            other => Err(SenseError::invalid_input(format!(
                "expected a document object, got {}",
                type_name(&other)
            ))),
        }
    }

    /// Iterate over the document's fields in map order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap back into the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawDocument {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_strips_reserved_fields() {
        let doc = SanitizedDocument::from_raw(raw(json!({
            "_id": "abc123",
            "_etag": "\"0000\"",
            "name": "Alice",
            "age": 30,
        })));

        assert_eq!(doc.len(), 2);
        assert!(doc.get("_id").is_none());
        assert!(doc.get("_etag").is_none());
        assert_eq!(doc.get("name"), Some(&json!("Alice")));
    }

    #[test]
    fn test_all_reserved_yields_empty() {
        let doc = SanitizedDocument::from_raw(raw(json!({
            "_id": 1,
            "_ts": 1700000000,
        })));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = SanitizedDocument::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(err.to_string().contains("an array"));

        assert!(SanitizedDocument::from_value(json!("text")).is_err());
        assert!(SanitizedDocument::from_value(json!(null)).is_err());
    }

    #[test]
    fn test_from_value_accepts_object() {
        let doc = SanitizedDocument::from_value(json!({"_id": 1, "kind": "user"}))
            .unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("kind"), Some(&json!("user")));
    }

    #[test]
    fn test_nested_reserved_names_survive() {
        // Only top-level names are reserved; nested objects are opaque.
        let doc = SanitizedDocument::from_raw(raw(json!({
            "meta": {"_internal": true},
        })));
        assert_eq!(doc.get("meta"), Some(&json!({"_internal": true})));
    }
}
