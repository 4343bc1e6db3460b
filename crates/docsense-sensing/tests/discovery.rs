//! End-to-end discovery over an in-memory document source.

use async_trait::async_trait;
use docsense_config::{
    DiscoveryConfig, KindDetectionConfig, SamplingConfig, SamplingPolicy,
};
use docsense_core::{DocumentSource, RawDocument, SampleResult, ValueKind};
use docsense_sensing::{discover, profile};
use serde_json::{json, Value};

/// Serves a fixed set of documents, Cosmos-style: every document carries
/// store-internal `_id`/`_ts` fields alongside its payload.
struct MemoryStore {
    docs: Vec<RawDocument>,
}

impl MemoryStore {
    fn new(values: Vec<Value>) -> Self {
        let docs = values
            .into_iter()
            .map(|v| match v {
                Value::Object(map) => map,
                _ => panic!("fixture must be an object"),
            })
            .collect();
        Self { docs }
    }

    /// 60 users, 30 orders, 10 audit entries mixed into one collection.
    fn mixed_entities() -> Self {
        let mut values = Vec::new();
        for i in 0..100 {
            let kind = match i % 10 {
                0 => "audit",
                n if n < 4 => "order",
                _ => "user",
            };
            values.push(json!({
                "_id": format!("doc-{i}"),
                "_ts": 1700000000 + i,
                "type": kind,
                "id": format!("{kind}-{i}"),
                "payload": {"seq": i},
            }));
        }
        Self::new(values)
    }
}

#[async_trait]
impl DocumentSource for MemoryStore {
    async fn document_count(&self, _collection: &str) -> SampleResult<u64> {
        Ok(self.docs.len() as u64)
    }

    async fn fetch_page(
        &self,
        _collection: &str,
        skip: u64,
        limit: u64,
    ) -> SampleResult<Vec<RawDocument>> {
        let start = (skip as usize).min(self.docs.len());
        let end = (start + limit as usize).min(self.docs.len());
        Ok(self.docs[start..end].to_vec())
    }
}

fn config() -> DiscoveryConfig {
    DiscoveryConfig {
        sampling: SamplingConfig {
            policy: SamplingPolicy::Absolute { count: 100 },
            max_batch_size: 25,
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn discovers_kind_field_and_partitions() {
    let store = MemoryStore::mixed_entities();
    let kinds = discover(&store, "entities", &config()).await.unwrap();

    assert_eq!(kinds.detection.chosen_field.as_deref(), Some("type"));
    assert_eq!(kinds.partitions.len(), 3);
    assert_eq!(kinds.partitions["user"].len(), 60);
    assert_eq!(kinds.partitions["order"].len(), 30);
    assert_eq!(kinds.partitions["audit"].len(), 10);

    // All partitions together account for the full sample.
    let total: usize = kinds.partitions.values().map(Vec::len).sum();
    assert_eq!(total, kinds.schema.total_docs as usize);
}

#[tokio::test]
async fn reserved_fields_never_reach_the_schema() {
    let store = MemoryStore::mixed_entities();
    let kinds = discover(&store, "entities", &config()).await.unwrap();

    assert!(!kinds.schema.properties.contains_key("_id"));
    assert!(!kinds.schema.properties.contains_key("_ts"));
    assert_eq!(kinds.schema.properties.len(), 3);
}

#[tokio::test]
async fn embedded_objects_are_profiled_flat() {
    let store = MemoryStore::mixed_entities();
    let kinds = discover(&store, "entities", &config()).await.unwrap();

    let payload = &kinds.schema.properties["payload"];
    assert_eq!(payload.kind, ValueKind::Object);
    assert_eq!(payload.doc_percent, 100);
    // Object-valued, so never a discriminator candidate.
    assert!(kinds
        .detection
        .other_fields
        .contains(&"payload".to_string()));
}

#[tokio::test]
async fn excluded_discriminator_falls_back_to_collection_partition() {
    let store = MemoryStore::mixed_entities();
    let cfg = DiscoveryConfig {
        kind_detection: KindDetectionConfig {
            excluded_fields: vec!["type".into()],
            ..Default::default()
        },
        ..config()
    };
    let kinds = discover(&store, "entities", &cfg).await.unwrap();

    // `type` stays visible as a considered candidate.
    assert!(kinds
        .detection
        .candidate_fields
        .contains(&"type".to_string()));
    // `id` is eligible but loses on cardinality; with `type` excluded it
    // becomes the best remaining candidate.
    assert_eq!(kinds.detection.chosen_field.as_deref(), Some("id"));
}

#[tokio::test]
async fn profiling_uses_the_wider_sample_cap() {
    let store = MemoryStore::mixed_entities();
    let schema = profile(&store, "entities", &config()).await.unwrap();

    // `id` has 100 distinct values; the general profile keeps 30 of them,
    // the kind-detection profile only 20.
    assert_eq!(schema.properties["id"].samples.len(), 30);

    let kinds = discover(&store, "entities", &config()).await.unwrap();
    assert_eq!(kinds.schema.properties["id"].samples.len(), 20);
}

#[tokio::test]
async fn empty_collection_yields_empty_result() {
    let store = MemoryStore::new(Vec::new());
    let kinds = discover(&store, "entities", &config()).await.unwrap();

    assert_eq!(kinds.schema.total_docs, 0);
    assert!(kinds.schema.properties.is_empty());
    assert!(kinds.detection.chosen_field.is_none());
    assert!(kinds.detection.candidate_fields.is_empty());
    assert!(kinds.partitions.is_empty());
}

#[tokio::test]
async fn relative_sampling_bounds_the_scan() {
    let store = MemoryStore::mixed_entities();
    let cfg = DiscoveryConfig {
        sampling: SamplingConfig {
            policy: SamplingPolicy::Relative { percent: 20 },
            max_batch_size: 7,
        },
        ..Default::default()
    };
    let kinds = discover(&store, "entities", &cfg).await.unwrap();

    assert_eq!(kinds.schema.total_docs, 20);
    let total: usize = kinds.partitions.values().map(Vec::len).sum();
    assert_eq!(total, 20);
}
