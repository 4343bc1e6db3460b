//! Document-kind detection.
//!
//! Picks the field most likely to discriminate entity subtypes within one
//! physical collection. The heuristic is low-cardinality-biased: a genuine
//! kind field (`type`, `kind`, `status`) holds a handful of distinct values
//! across the whole sample, while identifiers and free text hold many.
//!
//! Two input modes, kept as a tagged union so each stays independently
//! testable: the locally inferred [`CollectionSchema`], or an externally
//! supplied inference description carrying a delimited "flavor" string of
//! `key = value` assignments.

use docsense_config::KindDetectionConfig;
use docsense_core::{SenseError, SenseResult, ValueKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::schema::CollectionSchema;

/// Matches one `key = value` assignment, value optionally double-quoted.
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*(?P<key>[^=]+?)\s*=\s*(?:"(?P<quoted>[^"]*)"|(?P<bare>[^"\s][^"]*?))?\s*$"#)
        .expect("assignment pattern is valid")
});

/// Separator between assignments in a flavor string.
const FLAVOR_DELIMITER: char = ';';

/// Detector input: locally inferred schema or external metadata.
#[derive(Debug, Clone)]
pub enum DetectorInput<'a> {
    /// Schema produced by [`crate::infer_schema`].
    Inferred(&'a CollectionSchema),

    /// Inference description from an external metadata source.
    External(&'a ExternalInference),
}

/// Externally computed inference description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalInference {
    /// Delimited `key = value` assignments describing the collection flavor.
    pub flavor: String,

    /// Top-level property names reported by the external source.
    pub properties: Vec<String>,
}

/// Outcome of kind detection for one collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentKindResult {
    pub collection: String,

    /// Every field that met the eligibility test, in scan order. Includes
    /// excluded fields so callers can show what was considered.
    pub candidate_fields: Vec<String>,

    /// The winning discriminator, if any candidate survived exclusion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chosen_field: Option<String>,

    /// All remaining top-level fields.
    pub other_fields: Vec<String>,
}

/// Detect the most probable document-kind field.
///
/// Absence of any eligible candidate is a valid outcome (`chosen_field`
/// stays `None`), never an error. The only failure mode is a flavor string
/// with zero parseable assignments in external mode.
pub fn detect_document_kind(
    collection: &str,
    input: DetectorInput<'_>,
    config: &KindDetectionConfig,
) -> SenseResult<DocumentKindResult> {
    let result = match input {
        DetectorInput::Inferred(schema) => {
            detect_from_schema(collection, schema, config)
        }
        DetectorInput::External(external) => {
            detect_from_external(collection, external)?
        }
    };

    info!(
        collection = %collection,
        chosen = result.chosen_field.as_deref().unwrap_or(""),
        candidates = result.candidate_fields.len(),
        "document kind detection finished"
    );
    Ok(result)
}

fn detect_from_schema(
    collection: &str,
    schema: &CollectionSchema,
    config: &KindDetectionConfig,
) -> DocumentKindResult {
    let mut result = DocumentKindResult {
        collection: collection.to_string(),
        ..Default::default()
    };

    // Running best. Starting at probability 0 / usize::MAX samples means the
    // first non-excluded candidate always establishes the initial best.
    let mut best_probability: u32 = 0;
    let mut best_samples = usize::MAX;

    for (name, profile) in &schema.properties {
        let eligible = profile.doc_percent >= config.probability_threshold
            && !profile.samples.is_empty()
            && ValueKind::of(&profile.samples[0]) != ValueKind::Object;

        if !eligible {
            result.other_fields.push(name.clone());
            continue;
        }
        result.candidate_fields.push(name.clone());

        if config.is_excluded(name) {
            debug!(collection = %collection, field = %name, "eligible but excluded");
            continue;
        }

        if profile.doc_percent >= best_probability
            && profile.samples.len() < best_samples
        {
            best_probability = profile.doc_percent;
            best_samples = profile.samples.len();
            result.chosen_field = Some(name.clone());
        }
    }

    result
}

fn detect_from_external(
    collection: &str,
    external: &ExternalInference,
) -> SenseResult<DocumentKindResult> {
    let assignments: Vec<&str> = external
        .flavor
        .split(FLAVOR_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty() && ASSIGNMENT.is_match(s))
        .collect();

    if assignments.is_empty() {
        return Err(SenseError::flavor(format!(
            "no `key = value` assignment in {:?}",
            external.flavor
        )));
    }

    // A single assignment names the discriminator outright. Multiple
    // assignments describe a composite flavor no single field captures, so
    // candidates stay populated but nothing is chosen.
    let chosen_field = if assignments.len() == 1 {
        ASSIGNMENT
            .captures(assignments[0])
            .and_then(|c| c.name("key"))
            .map(|k| k.as_str().to_string())
    } else {
        debug!(
            collection = %collection,
            assignments = assignments.len(),
            "composite flavor, no single discriminator"
        );
        None
    };

    Ok(DocumentKindResult {
        collection: collection.to_string(),
        candidate_fields: external.properties.clone(),
        chosen_field,
        other_fields: Vec::new(),
    })
}
