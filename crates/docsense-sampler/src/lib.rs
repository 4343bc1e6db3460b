//! Bounded document sampling.
//!
//! Pulls a capped number of raw documents out of a [`DocumentSource`], page
//! by page. The cap comes from the sampling policy (absolute count or
//! percentage of the collection); each page is clamped at the configured
//! batch size. The sampler never inspects document contents.

use docsense_config::SamplingConfig;
use docsense_core::{DocumentSource, RawDocument, SampleResult};
use tracing::{debug, info};

/// Sample documents from `collection` according to `config`.
///
/// Stops early when the source returns a short page (collection exhausted
/// or shrunk since the count was taken).
pub async fn sample(
    source: &dyn DocumentSource,
    collection: &str,
    config: &SamplingConfig,
) -> SampleResult<Vec<RawDocument>> {
    let total = source.document_count(collection).await?;
    let target = config.policy.target_count(total);

    if target == 0 {
        info!(collection = %collection, total, "nothing to sample");
        return Ok(Vec::new());
    }

    let mut docs = Vec::with_capacity(target.min(10_000) as usize);
    let mut skip = 0u64;

    while (docs.len() as u64) < target {
        let remaining = target - docs.len() as u64;
        let limit = remaining.min(config.max_batch_size);

        let page = source.fetch_page(collection, skip, limit).await?;
        let fetched = page.len() as u64;
        debug!(collection = %collection, skip, limit, fetched, "fetched page");

        docs.extend(page);
        skip += fetched;

        if fetched < limit {
            break;
        }
    }

    info!(
        collection = %collection,
        total,
        target,
        sampled = docs.len(),
        "sampled collection"
    );
    Ok(docs)
}
