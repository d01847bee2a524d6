//! Manifest source: the JSON document listing collections and their assets.
//!
//! Only the CLI reads manifests. Each game becomes a [`Collection`] and each
//! entry an [`AssetDescriptor`].

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use spritedex_core::{AssetDescriptor, Collection, CollectionCatalogPort, SpriteError, asset_id_from_name};

use crate::error::CliError;

/// Base of every sprite URL template derived from a manifest.
pub const SPRITE_HOST: &str = "https://img.pokemondb.net/sprites";

/// Parsed manifest. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Data version of the manifest.
    pub version: String,
    /// Collections, in manifest order.
    pub games: Vec<ManifestGame>,
}

/// One collection entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestGame {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub generation: u32,
    /// Path segment of the sprite host that holds this game's sprites.
    pub sprite_generation: String,
    #[serde(default)]
    pub pokemon: Vec<ManifestEntry>,
}

/// One asset entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub name: String,
    #[serde(default)]
    pub dex_number: u32,
    pub sprite_slug: String,
    #[serde(default)]
    pub notes: String,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CliError> {
        serde_json::from_str(text).map_err(|e| CliError::Manifest(e.to_string()))
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::Manifest(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Look up a game by slug.
    pub fn game(&self, slug: &str) -> Option<&ManifestGame> {
        self.games.iter().find(|g| g.slug == slug)
    }

    /// Look up a game by slug, failing with an argument error.
    pub fn require_game(&self, slug: &str) -> Result<&ManifestGame, CliError> {
        self.game(slug).ok_or_else(|| {
            let known: Vec<&str> = self.games.iter().map(|g| g.slug.as_str()).collect();
            CliError::Arguments(format!(
                "unknown collection '{slug}' (manifest has: {})",
                known.join(", ")
            ))
        })
    }

    /// Every slug in the manifest.
    pub fn slugs(&self) -> HashSet<String> {
        self.games.iter().map(|g| g.slug.clone()).collect()
    }
}

impl ManifestGame {
    /// The collection this game maps to.
    pub fn collection(&self) -> Collection {
        Collection::new(
            self.slug.clone(),
            self.name.clone(),
            format!("{SPRITE_HOST}/{}/normal/{{sprite}}.png", self.sprite_generation),
        )
    }

    /// Asset descriptors for every entry, in manifest order.
    ///
    /// Entries whose derived id repeats an earlier one are skipped.
    pub fn assets(&self) -> Vec<AssetDescriptor> {
        let mut seen = HashSet::new();
        self.pokemon
            .iter()
            .map(ManifestEntry::asset)
            .filter(|asset| seen.insert(asset.asset_id.clone()))
            .collect()
    }

    /// Find an entry by display name or derived asset id.
    pub fn entry(&self, name: &str) -> Option<&ManifestEntry> {
        let wanted = asset_id_from_name(name);
        self.pokemon
            .iter()
            .find(|p| asset_id_from_name(&p.name) == wanted)
    }
}

impl ManifestEntry {
    /// The asset descriptor for this entry.
    pub fn asset(&self) -> AssetDescriptor {
        AssetDescriptor::from_display_name(&self.name, self.sprite_slug.clone())
    }
}

/// Catalog backed by a manifest: every collection it lists is live.
#[derive(Debug, Clone)]
pub struct ManifestCatalog {
    slugs: HashSet<String>,
}

impl ManifestCatalog {
    /// Catalog of the manifest's slugs plus any extra slugs to keep.
    pub fn new(manifest: &Manifest, keep: impl IntoIterator<Item = String>) -> Self {
        let mut slugs = manifest.slugs();
        slugs.extend(keep);
        Self { slugs }
    }
}

#[async_trait]
impl CollectionCatalogPort for ManifestCatalog {
    async fn live_collection_slugs(&self) -> Result<HashSet<String>, SpriteError> {
        Ok(self.slugs.clone())
    }
}
