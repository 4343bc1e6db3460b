//! Inferred schema types.

use docsense_core::ValueKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregate profile of one top-level field across the sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldProfile {
    /// Number of sampled documents in which the field appeared.
    pub doc_count: u64,

    /// `round(doc_count / total_docs * 100)`, recomputed after the scan.
    pub doc_percent: u32,

    /// Distinct observed values in first-seen order, capped at the
    /// configured sample size. Once full, novel values are dropped.
    pub samples: Vec<Value>,

    /// Shape of the most recent occurrence. Deliberately last-write-wins
    /// rather than a union of observed shapes, for compatibility with the
    /// profiles this replaces.
    pub kind: ValueKind,
}

impl FieldProfile {
    pub(crate) fn new(value: &Value) -> Self {
        Self {
            doc_count: 1,
            doc_percent: 100,
            samples: vec![value.clone()],
            kind: ValueKind::of(value),
        }
    }

    pub(crate) fn observe(&mut self, value: &Value, sample_size: usize) {
        self.doc_count += 1;
        if self.samples.len() < sample_size && !self.samples.contains(value) {
            self.samples.push(value.clone());
        }
        self.kind = ValueKind::of(value);
    }
}

/// Flat schema profile of a collection sample.
///
/// Properties keep first-seen field order; the kind detector's tie-breaking
/// depends on a deterministic scan order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub total_docs: u64,
    pub properties: IndexMap<String, FieldProfile>,
}

impl CollectionSchema {
    pub fn is_empty(&self) -> bool {
        self.total_docs == 0 && self.properties.is_empty()
    }

    /// All top-level field names observed in the sample.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|s| s.as_str())
    }
}
