//! Storage reclamation for collections that are no longer tracked.

use std::collections::HashSet;

use spritedex_core::{SpriteError, SpriteResult};

use crate::disk::DiskStore;
use crate::memory::MemoryCache;

/// Removes collection directories and their memory-cache entries.
#[derive(Debug, Clone)]
pub struct CleanupCoordinator {
    disk: DiskStore,
    memory: MemoryCache,
}

impl CleanupCoordinator {
    /// Create a coordinator over the given tiers.
    pub const fn new(disk: DiskStore, memory: MemoryCache) -> Self {
        Self { disk, memory }
    }

    /// Remove one collection from disk and memory.
    ///
    /// Idempotent: a collection with no directory is not an error.
    pub async fn delete_collection(&self, slug: &str) -> SpriteResult<()> {
        self.disk.delete_collection(slug).await?;
        let evicted = self.memory.evict_collection(slug);
        tracing::debug!(
            target: "spritedex.cleanup",
            collection = %slug,
            evicted,
            "Deleted collection"
        );
        Ok(())
    }

    /// Delete every collection directory whose slug is not in `live`.
    ///
    /// Stops at the first deletion failure; a partially reconciled store is
    /// safe to reconcile again. Returns the removed slugs in sorted order.
    pub async fn reconcile(&self, live: &HashSet<String>) -> SpriteResult<Vec<String>> {
        let on_disk = self
            .disk
            .list_collection_directories()
            .await
            .map_err(|e| SpriteError::reconciliation(format!("listing collections: {e}")))?;

        let orphans: Vec<String> = on_disk
            .into_iter()
            .filter(|slug| !live.contains(slug))
            .collect();

        for slug in &orphans {
            self.disk.delete_collection(slug).await.map_err(|e| {
                SpriteError::reconciliation(format!("removing collection {slug}: {e}"))
            })?;
            let evicted = self.memory.evict_collection(slug);
            tracing::info!(
                target: "spritedex.cleanup",
                collection = %slug,
                evicted,
                "Removed orphaned collection"
            );
        }

        Ok(orphans)
    }
}
