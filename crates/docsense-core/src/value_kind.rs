//! Coarse value classification.
//!
//! Maps every JSON value onto a small closed set of shape tags. The
//! classifier is pure and total: integers and floats collapse into `Number`,
//! and an absent value maps to `Undefined`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shape category of an observed field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    /// The field was absent from the document.
    Undefined,
}

impl ValueKind {
    /// Classify a value by its runtime shape.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Classify an optional value; `None` is `Undefined`.
    pub fn of_opt(value: Option<&Value>) -> Self {
        value.map_or(ValueKind::Undefined, Self::of)
    }

    /// Returns the lowercase tag used on the wire.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
