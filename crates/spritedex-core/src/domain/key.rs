//! Composite cache key shared by the memory and disk tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `(collection slug, asset id)`.
///
/// Renders as `"<collection>-<asset>"`. Disk paths are derived from the two
/// components separately: `<sprites root>/<collection>/<asset>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CacheKey {
    /// Collection slug.
    pub collection: String,
    /// Asset id within the collection.
    pub asset: String,
}

impl CacheKey {
    /// Create a new cache key.
    pub fn new(collection: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            asset: asset.into(),
        }
    }

    /// Whether this key belongs to the given collection.
    pub fn in_collection(&self, slug: &str) -> bool {
        self.collection == slug
    }

    /// File name for this key's asset with the given extension.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.asset)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.collection, self.asset)
    }
}
