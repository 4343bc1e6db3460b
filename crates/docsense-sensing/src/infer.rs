//! Schema inference.
//!
//! A single pass over the sanitized sample folds every document into
//! per-field profiles. Profiling is flat: a field holding an object or array
//! is recorded as such, its internals are not expanded into sub-fields.

use docsense_core::SanitizedDocument;
use tracing::debug;

use crate::schema::{CollectionSchema, FieldProfile};

/// Build a [`CollectionSchema`] from an already-sanitized document sample.
///
/// `sample_size` caps the distinct values retained per field. An empty
/// sample produces an empty schema; that is a legitimate outcome, not an
/// error.
pub fn infer_schema(
    docs: &[SanitizedDocument],
    sample_size: usize,
) -> CollectionSchema {
    let mut schema = CollectionSchema {
        total_docs: docs.len() as u64,
        ..Default::default()
    };

    for doc in docs {
        for (name, value) in doc.fields() {
            schema
                .properties
                .entry(name.clone())
                .and_modify(|profile| profile.observe(value, sample_size))
                .or_insert_with(|| FieldProfile::new(value));
        }
    }

    // Percentages are only meaningful once the full sample has been scanned.
    for profile in schema.properties.values_mut() {
        profile.doc_percent = percent(profile.doc_count, schema.total_docs);
    }

    debug!(
        total_docs = schema.total_docs,
        fields = schema.properties.len(),
        "inferred collection schema"
    );
    schema
}

fn percent(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}
