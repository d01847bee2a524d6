//! Port definitions (trait abstractions).
//!
//! Ports describe the engine's boundary with infrastructure: the network
//! (`AssetFetcherPort`) and the metadata store (`CollectionCatalogPort`).
//! Implementations live in adapter crates or in the composition root.

mod catalog;
mod fetcher;

pub use catalog::CollectionCatalogPort;
pub use fetcher::AssetFetcherPort;
