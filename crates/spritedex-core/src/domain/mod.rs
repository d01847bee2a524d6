//! Domain types for the sprite cache.
//!
//! Pure data types with no I/O. Everything here is constructed transiently per
//! call; the metadata store owns the durable record of collections and assets.
//!
//! # Structure
//!
//! - `asset` - `AssetDescriptor` and asset id normalization
//! - `collection` - `Collection`
//! - `template` - `UrlTemplate` resolution
//! - `key` - `CacheKey` shared by memory and disk tiers
//! - `progress` - `ProgressSnapshot`
//! - `lookup` - `SpriteLookup` read-path result

pub mod asset;
pub mod collection;
pub mod key;
pub mod lookup;
pub mod progress;
pub mod template;

pub use asset::{AssetDescriptor, asset_id_from_name};
pub use collection::Collection;
pub use key::CacheKey;
pub use lookup::SpriteLookup;
pub use progress::ProgressSnapshot;
pub use template::{SPRITE_PLACEHOLDER, UrlTemplate};
