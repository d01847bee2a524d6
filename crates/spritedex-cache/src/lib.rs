#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

// Re-export core types for convenience
pub use spritedex_core::{
    AssetDescriptor, AssetFetcherPort, CacheKey, Collection, CollectionCatalogPort, EngineConfig,
    ProgressSnapshot, SpriteError, SpriteLookup, SpriteResult, UrlTemplate,
};

mod cleanup;
mod disk;
mod engine;
mod inflight;
mod memory;

pub use cleanup::CleanupCoordinator;
pub use disk::DiskStore;
pub use engine::{ProgressStream, SpriteEngine};
pub use inflight::{InFlightGuard, InFlightLocks};
pub use memory::MemoryCache;

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
