//! Schema Sensing for Document Collections
//!
//! Takes a bounded sample of documents from one physical collection and
//! produces two things: a flat per-field profile of the sample
//! ([`CollectionSchema`]) and a best guess at the "document kind" field that
//! partitions the collection into logical entity types
//! ([`DocumentKindResult`]).
//!
//! # Example
//!
//! ```ignore
//! use docsense_config::DiscoveryConfig;
//! use docsense_sensing::discover;
//!
//! let kinds = discover(&source, "things", &DiscoveryConfig::default()).await?;
//! if let Some(field) = &kinds.detection.chosen_field {
//!     for (value, docs) in &kinds.partitions {
//!         println!("{field} = {value}: {} documents", docs.len());
//!     }
//! }
//! ```

mod discovery;
mod infer;
mod kind;
mod partition;
mod schema;

pub use discovery::{discover, profile, CollectionKinds};
pub use infer::infer_schema;
pub use kind::{
    detect_document_kind, DetectorInput, DocumentKindResult, ExternalInference,
};
pub use partition::partition_by_kind;
pub use schema::{CollectionSchema, FieldProfile};
