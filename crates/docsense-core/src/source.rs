//! The sampler's view of a document store.
//!
//! Connectivity, auth, and cursor mechanics all live behind this trait; the
//! sampler only ever asks for a count and then pages of documents.

use async_trait::async_trait;

use crate::document::RawDocument;
use crate::errors::SampleResult;

/// A store holding named collections of documents.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Total (possibly estimated) number of documents in the collection.
    async fn document_count(&self, collection: &str) -> SampleResult<u64>;

    /// Fetch up to `limit` documents starting at offset `skip`.
    ///
    /// A short or empty page means the collection is exhausted.
    async fn fetch_page(
        &self,
        collection: &str,
        skip: u64,
        limit: u64,
    ) -> SampleResult<Vec<RawDocument>>;
}
