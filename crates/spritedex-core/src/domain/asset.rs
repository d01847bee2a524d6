//! Asset descriptors.

use serde::{Deserialize, Serialize};

/// One fetchable remote asset.
///
/// `asset_id` is stable and unique within a collection; it names the file on
/// disk and the memory-cache entry. `sprite_token` is substituted into the
/// collection's URL template at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Stable identifier, unique within a collection.
    pub asset_id: String,
    /// Token substituted for the template placeholder.
    pub sprite_token: String,
}

impl AssetDescriptor {
    /// Create a descriptor from an explicit id and sprite token.
    pub fn new(asset_id: impl Into<String>, sprite_token: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            sprite_token: sprite_token.into(),
        }
    }

    /// Create a descriptor whose id is derived from a display name.
    ///
    /// See [`asset_id_from_name`] for the normalization rules.
    pub fn from_display_name(name: &str, sprite_token: impl Into<String>) -> Self {
        Self::new(asset_id_from_name(name), sprite_token)
    }
}

/// Normalize a display name into a filesystem-safe asset id.
///
/// Lowercases, drops apostrophes, spells out gender symbols and joins
/// abbreviations (`"Mr. Mime"` becomes `"mr-mime"`).
pub fn asset_id_from_name(name: &str) -> String {
    name.to_lowercase()
        .replace('\'', "")
        .replace('♂', "-m")
        .replace('♀', "-f")
        .replace(". ", "-")
        .trim()
        .to_string()
}
