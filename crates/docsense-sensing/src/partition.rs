//! Partitioning a sample by discriminator value.

use docsense_core::SanitizedDocument;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

/// Group documents by the verbatim value of the chosen discriminator.
///
/// One group per distinct value, keyed by the value's text form. Documents
/// lacking the field, or every document when no discriminator was chosen,
/// form a single group keyed by the physical collection's own name.
pub fn partition_by_kind(
    docs: Vec<SanitizedDocument>,
    chosen: Option<&str>,
    collection: &str,
) -> IndexMap<String, Vec<SanitizedDocument>> {
    let mut partitions: IndexMap<String, Vec<SanitizedDocument>> =
        IndexMap::new();

    for doc in docs {
        let key = match chosen.and_then(|field| doc.get(field)) {
            Some(value) => partition_key(value),
            None => collection.to_string(),
        };
        partitions.entry(key).or_default().push(doc);
    }

    debug!(
        collection = %collection,
        chosen = chosen.unwrap_or(""),
        partitions = partitions.len(),
        "partitioned sample"
    );
    partitions
}

/// String discriminators key partitions by their unquoted form so partition
/// names read as entity labels; other values use their JSON text.
fn partition_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
