//! Docsense configuration.
//!
//! Plain serde structs with field-level defaults, so partial configuration
//! files deserialize into sensible settings. Three concerns: how many
//! documents to fetch ([`SamplingConfig`]), how schema profiles are built
//! ([`InferenceConfig`]), and how the discriminator is chosen
//! ([`KindDetectionConfig`]).

use serde::{Deserialize, Serialize};

/// How many documents to pull from a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Sampling policy: an absolute count or a percentage of the collection.
    #[serde(default)]
    pub policy: SamplingPolicy,

    /// Maximum documents fetched per request page.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            policy: SamplingPolicy::default(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

/// Sampling policy for a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SamplingPolicy {
    /// Fetch up to `count` documents.
    Absolute { count: u64 },

    /// Fetch `percent` (0-100) of the collection's documents.
    Relative { percent: u8 },
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        SamplingPolicy::Absolute {
            count: default_sample_count(),
        }
    }
}

impl SamplingPolicy {
    /// The number of documents this policy asks for, given the collection's
    /// total document count.
    pub fn target_count(&self, total_docs: u64) -> u64 {
        match self {
            SamplingPolicy::Absolute { count } => (*count).min(total_docs),
            SamplingPolicy::Relative { percent } => {
                let pct = u64::from((*percent).min(100));
                // Round to nearest rather than truncate, so 1% of 50 is 1.
                (total_docs * pct + 50) / 100
            }
        }
    }
}

/// Settings for schema profile construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Maximum distinct values retained per field profile.
    #[serde(default = "default_profile_sample_size")]
    pub sample_size: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_size: default_profile_sample_size(),
        }
    }
}

/// Settings for discriminator-field detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindDetectionConfig {
    /// Distinct-value cap used when profiling for kind detection.
    /// Smaller than the general profile cap: a genuine discriminator has few
    /// distinct values, so a tight cap is enough to rank candidates.
    #[serde(default = "default_kind_sample_size")]
    pub sample_size: usize,

    /// Minimum `doc_percent` (0-100) for a field to be a candidate.
    #[serde(default = "default_probability_threshold")]
    pub probability_threshold: u32,

    /// Fields never chosen as the discriminator, even when eligible.
    #[serde(default)]
    pub excluded_fields: Vec<String>,
}

impl Default for KindDetectionConfig {
    fn default() -> Self {
        Self {
            sample_size: default_kind_sample_size(),
            probability_threshold: default_probability_threshold(),
            excluded_fields: Vec::new(),
        }
    }
}

impl KindDetectionConfig {
    /// Check whether a field may be chosen as the discriminator.
    pub fn is_excluded(&self, field: &str) -> bool {
        self.excluded_fields.iter().any(|f| f == field)
    }
}

/// Aggregate configuration for a discovery run over one collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub sampling: SamplingConfig,
    pub inference: InferenceConfig,
    pub kind_detection: KindDetectionConfig,
}

// Default value functions

fn default_max_batch_size() -> u64 {
    50
}

fn default_sample_count() -> u64 {
    1000
}

fn default_profile_sample_size() -> usize {
    30
}

fn default_kind_sample_size() -> usize {
    20
}

fn default_probability_threshold() -> u32 {
    90
}
