//! Per-collection discovery pipeline.
//!
//! Sample → sanitize → infer → detect → partition, one collection per call.
//! The stages themselves are pure and synchronous; only sampling suspends.
//! Callers wanting fan-out run `discover` once per collection; no state is
//! shared between runs.

use anyhow::Result;
use docsense_config::DiscoveryConfig;
use docsense_core::{DocumentSource, SanitizedDocument};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::infer::infer_schema;
use crate::kind::{detect_document_kind, DetectorInput, DocumentKindResult};
use crate::partition::partition_by_kind;
use crate::schema::CollectionSchema;

/// Everything discovery learned about one collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionKinds {
    /// Physical collection name.
    pub collection: String,

    /// Per-field profile of the sample.
    pub schema: CollectionSchema,

    /// Discriminator detection outcome.
    pub detection: DocumentKindResult,

    /// Sampled documents grouped per discriminator value. When no
    /// discriminator was chosen there is a single group keyed by the
    /// collection name.
    pub partitions: IndexMap<String, Vec<SanitizedDocument>>,
}

/// Sample a collection and profile its fields, without kind detection.
///
/// Uses the general inference sample cap (wider than the kind-detection
/// cap, since profiles shown to users benefit from more example values).
pub async fn profile(
    source: &dyn DocumentSource,
    collection: &str,
    config: &DiscoveryConfig,
) -> Result<CollectionSchema> {
    let raw = docsense_sampler::sample(source, collection, &config.sampling)
        .await?;
    let docs: Vec<SanitizedDocument> =
        raw.into_iter().map(SanitizedDocument::from_raw).collect();
    Ok(infer_schema(&docs, config.inference.sample_size))
}

/// Sample a collection and work out its logical document kinds.
pub async fn discover(
    source: &dyn DocumentSource,
    collection: &str,
    config: &DiscoveryConfig,
) -> Result<CollectionKinds> {
    let raw = docsense_sampler::sample(source, collection, &config.sampling)
        .await?;

    let docs: Vec<SanitizedDocument> =
        raw.into_iter().map(SanitizedDocument::from_raw).collect();

    // Kind detection uses its own, tighter per-field sample cap.
    let schema = infer_schema(&docs, config.kind_detection.sample_size);

    let detection = detect_document_kind(
        collection,
        DetectorInput::Inferred(&schema),
        &config.kind_detection,
    )?;

    let partitions = partition_by_kind(
        docs,
        detection.chosen_field.as_deref(),
        collection,
    );

    info!(
        collection = %collection,
        sampled = schema.total_docs,
        fields = schema.properties.len(),
        kind = detection.chosen_field.as_deref().unwrap_or(""),
        kinds = partitions.len(),
        "collection discovery complete"
    );

    Ok(CollectionKinds {
        collection: collection.to_string(),
        schema,
        detection,
        partitions,
    })
}
