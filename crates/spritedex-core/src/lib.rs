#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_FILE_EXTENSION, DEFAULT_MAX_CONCURRENT, DEFAULT_PROGRESS_BUFFER, EngineConfig};
pub use domain::{
    AssetDescriptor, CacheKey, Collection, ProgressSnapshot, SPRITE_PLACEHOLDER, SpriteLookup,
    UrlTemplate, asset_id_from_name,
};
pub use error::{SpriteError, SpriteResult};
pub use paths::{PathError, data_root, resolve_data_root, sprites_dir};
pub use ports::{AssetFetcherPort, CollectionCatalogPort};

// Silence unused dev-dependency warnings
#[cfg(test)]
use serde_json as _;
