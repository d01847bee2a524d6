//! Metadata store boundary.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::SpriteError;

/// Read-only view of the metadata store used for cleanup.
///
/// The metadata store is the sole authority on which collections exist; the
/// engine never invents or removes metadata rows.
#[async_trait]
pub trait CollectionCatalogPort: Send + Sync {
    /// Slugs of every collection that is still tracked.
    async fn live_collection_slugs(&self) -> Result<HashSet<String>, SpriteError>;
}
