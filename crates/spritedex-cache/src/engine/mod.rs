//! Sprite engine: the composition of both cache tiers, the fetcher, the
//! batch orchestrator and cleanup.
//!
//! # Paths into the cache
//!
//! - [`SpriteEngine::download_batch`] fetches a whole collection under the
//!   concurrency ceiling and reports progress as a stream.
//! - [`SpriteEngine::fetch_one`] fetches a single asset and returns its bytes.
//! - [`SpriteEngine::lookup`] serves from memory or disk without waiting on
//!   the network, scheduling a background fetch on a miss.
//!
//! All three share one per-key lock registry, so a key is never fetched by two
//! tasks at once.

mod batch;
mod worker;

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use spritedex_core::{
    AssetDescriptor, AssetFetcherPort, CacheKey, Collection, CollectionCatalogPort, EngineConfig,
    SpriteError, SpriteLookup, SpriteResult, UrlTemplate,
};

use crate::cleanup::CleanupCoordinator;
use crate::disk::DiskStore;
use crate::inflight::InFlightLocks;
use crate::memory::MemoryCache;

use batch::BatchRun;
pub use batch::ProgressStream;
use worker::{FetchDeps, FetchJob, fetch_and_store};

/// Fetch-and-cache engine over one sprites root.
///
/// Cloning is cheap; clones share both cache tiers and the lock registry.
#[derive(Clone)]
pub struct SpriteEngine {
    config: EngineConfig,
    deps: FetchDeps,
    cleanup: CleanupCoordinator,
}

impl std::fmt::Debug for SpriteEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteEngine")
            .field("config", &self.config)
            .field("cached", &self.deps.memory.len())
            .finish_non_exhaustive()
    }
}

impl SpriteEngine {
    /// Create an engine from configuration and a fetcher.
    pub fn new(config: EngineConfig, fetcher: Arc<dyn AssetFetcherPort>) -> Self {
        let disk = DiskStore::new(config.sprites_root.clone(), config.file_extension.clone());
        let memory = MemoryCache::new();
        let cleanup = CleanupCoordinator::new(disk.clone(), memory.clone());
        Self {
            config,
            deps: FetchDeps {
                fetcher,
                disk,
                memory,
                locks: InFlightLocks::new(),
            },
            cleanup,
        }
    }

    /// The engine configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The disk tier.
    pub const fn disk(&self) -> &DiskStore {
        &self.deps.disk
    }

    /// The memory tier.
    pub const fn memory(&self) -> &MemoryCache {
        &self.deps.memory
    }

    /// The per-key lock registry.
    pub const fn locks(&self) -> &InFlightLocks {
        &self.deps.locks
    }

    /// Download every asset of a collection.
    ///
    /// Creates the collection directory up front; failing to do so is the only
    /// error this returns. Per-asset failures (unresolvable URL, HTTP error,
    /// write error) are counted in the stream's `failed` counter and logged.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn download_batch(
        &self,
        slug: &str,
        template: &UrlTemplate,
        assets: Vec<AssetDescriptor>,
    ) -> SpriteResult<ProgressStream> {
        self.deps.disk.ensure_collection_dir(slug).await?;

        let jobs = assets
            .iter()
            .map(|asset| FetchJob {
                key: CacheKey::new(slug, &asset.asset_id),
                url: template.resolve(asset),
            })
            .collect();

        let (tx, rx) = mpsc::channel(self.config.progress_buffer);
        let cancel = CancellationToken::new();

        let run = BatchRun {
            collection: slug.to_string(),
            jobs,
            deps: self.deps.clone(),
            max_concurrent: self.config.max_concurrent,
            tx,
            cancel: cancel.clone(),
        };
        tokio::spawn(run.run());

        Ok(ProgressStream::new(rx, cancel))
    }

    /// [`download_batch`](Self::download_batch) for a [`Collection`].
    pub async fn download_collection(
        &self,
        collection: &Collection,
        assets: Vec<AssetDescriptor>,
    ) -> SpriteResult<ProgressStream> {
        self.download_batch(&collection.slug, &collection.url_template, assets)
            .await
    }

    /// Fetch one asset, store it, and return its bytes.
    ///
    /// If another task is already fetching the same key, waits for it and
    /// serves what it wrote instead of fetching again. Errors are returned
    /// as-is.
    pub async fn fetch_one(
        &self,
        slug: &str,
        template: &UrlTemplate,
        asset: &AssetDescriptor,
    ) -> SpriteResult<Bytes> {
        let key = CacheKey::new(slug, &asset.asset_id);
        let url = template.resolve(asset)?;

        let _guard = match self.deps.locks.try_acquire(&key) {
            Some(guard) => guard,
            None => {
                let guard = self.deps.locks.acquire(&key).await;
                if let Some(bytes) = self.deps.disk.read(&key).await? {
                    tracing::debug!(
                        target: "spritedex.fetch",
                        key = %key,
                        "Served sprite written by concurrent fetch"
                    );
                    self.deps.memory.put(key, bytes.clone());
                    return Ok(bytes);
                }
                guard
            }
        };

        let bytes = fetch_and_store(&self.deps, &key, &url).await?;
        self.deps.memory.put(key, bytes.clone());
        Ok(bytes)
    }

    /// Serve an asset without waiting on the network.
    ///
    /// Memory hits are returned directly; disk hits are promoted into memory.
    /// On a miss a background fetch is scheduled unless one is already running
    /// for the key, and `Pending` is returned. Background failures are logged.
    pub async fn lookup(&self, collection: &Collection, asset: &AssetDescriptor) -> SpriteLookup {
        let key = CacheKey::new(&collection.slug, &asset.asset_id);

        if let Some(bytes) = self.deps.memory.get(&key) {
            return SpriteLookup::Loaded(bytes);
        }

        match self.deps.disk.read(&key).await {
            Ok(Some(bytes)) => {
                self.deps.memory.put(key, bytes.clone());
                return SpriteLookup::Loaded(bytes);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    target: "spritedex.cache",
                    key = %key,
                    error = %e,
                    "Failed to read cached sprite"
                );
                return SpriteLookup::Unavailable;
            }
        }

        let url = match collection.url_template.resolve(asset) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(
                    target: "spritedex.cache",
                    key = %key,
                    error = %e,
                    "Sprite URL does not resolve"
                );
                return SpriteLookup::Unavailable;
            }
        };

        let Some(guard) = self.deps.locks.try_acquire(&key) else {
            return SpriteLookup::Pending;
        };

        let deps = self.deps.clone();
        tokio::spawn(async move {
            let _guard = guard;
            match fetch_and_store(&deps, &key, &url).await {
                Ok(bytes) => deps.memory.put(key, bytes),
                Err(e) => {
                    tracing::warn!(
                        target: "spritedex.fetch",
                        key = %key,
                        error = %e,
                        "Background sprite fetch failed"
                    );
                }
            }
        });

        SpriteLookup::Pending
    }

    /// Remove one collection from disk and memory. Idempotent.
    pub async fn delete_collection(&self, slug: &str) -> SpriteResult<()> {
        self.cleanup.delete_collection(slug).await
    }

    /// Delete every collection directory not named in `live`.
    ///
    /// Returns the removed slugs.
    pub async fn reconcile(&self, live: &HashSet<String>) -> SpriteResult<Vec<String>> {
        self.cleanup.reconcile(live).await
    }

    /// Reconcile against the live collections reported by `catalog`.
    pub async fn cleanup(&self, catalog: &dyn CollectionCatalogPort) -> SpriteResult<Vec<String>> {
        let live = catalog
            .live_collection_slugs()
            .await
            .map_err(|e| match e {
                SpriteError::Reconciliation { .. } => e,
                other => {
                    SpriteError::reconciliation(format!("reading live collections: {other}"))
                }
            })?;
        self.reconcile(&live).await
    }

    /// Collection directories currently on disk.
    pub async fn collections(&self) -> SpriteResult<BTreeSet<String>> {
        self.deps.disk.list_collection_directories().await
    }
}
