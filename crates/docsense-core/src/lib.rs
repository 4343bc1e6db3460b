//! Docsense Core Types
//!
//! This crate defines the document model and traits shared across docsense.
//! Documents are plain JSON objects (`serde_json::Map`); everything the
//! inference pipeline consumes goes through [`SanitizedDocument`], which
//! guarantees reserved (`_`-prefixed) fields have been stripped.

pub mod document;
pub mod errors;
pub mod source;
pub mod value_kind;

pub use document::{RawDocument, SanitizedDocument, RESERVED_PREFIX};
pub use errors::{SampleError, SampleResult, SenseError, SenseResult};
pub use source::DocumentSource;
pub use value_kind::ValueKind;
