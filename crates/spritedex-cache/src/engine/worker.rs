//! Single-asset fetch pipeline.
//!
//! The worker operates on a value-type [`FetchJob`] and cloned [`FetchDeps`],
//! with no access to the batch loop's counters or channel.

use std::sync::Arc;

use bytes::Bytes;
use url::Url;

use spritedex_core::{AssetFetcherPort, CacheKey, SpriteResult};

use crate::disk::DiskStore;
use crate::inflight::InFlightLocks;
use crate::memory::MemoryCache;

/// Dependencies for the fetch worker.
#[derive(Clone)]
pub struct FetchDeps {
    /// Network boundary.
    pub fetcher: Arc<dyn AssetFetcherPort>,
    /// Disk tier.
    pub disk: DiskStore,
    /// Memory tier.
    pub memory: MemoryCache,
    /// Per-key locks shared with the read path.
    pub locks: InFlightLocks,
}

/// One asset to fetch.
pub struct FetchJob {
    /// Where the asset is stored.
    pub key: CacheKey,
    /// Resolved fetch URL, or the resolution failure.
    pub url: SpriteResult<Url>,
}

/// Fetch one asset and store it on disk.
///
/// Waits for the key's in-flight lock first. A memory entry already present
/// for the key is replaced with the fresh bytes; absent entries stay absent.
pub async fn run_job(job: FetchJob, deps: &FetchDeps) -> SpriteResult<Bytes> {
    let url = job.url?;
    let _guard = deps.locks.acquire(&job.key).await;

    let bytes = fetch_and_store(deps, &job.key, &url).await?;
    deps.memory.refresh(&job.key, bytes.clone());
    Ok(bytes)
}

/// Fetch `url` and write the body to disk under `key`.
///
/// The caller must hold the key's in-flight lock. The memory tier is left
/// untouched.
pub async fn fetch_and_store(deps: &FetchDeps, key: &CacheKey, url: &Url) -> SpriteResult<Bytes> {
    let bytes = deps.fetcher.fetch(url).await?;
    deps.disk.write(key, &bytes).await?;

    tracing::trace!(
        target: "spritedex.fetch",
        key = %key,
        size = bytes.len(),
        "Stored sprite"
    );
    Ok(bytes)
}
