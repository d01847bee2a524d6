//! Shared fixtures for spritedex-cache integration tests.

pub mod fetcher;

use std::sync::Arc;

use spritedex_cache::{EngineConfig, SpriteEngine, UrlTemplate};
use tempfile::TempDir;

use fetcher::FakeFetcher;

/// Template every test collection resolves against.
pub const TEST_TEMPLATE: &str = "https://sprites.test/normal/{sprite}.png";

/// A test template.
pub fn template() -> UrlTemplate {
    UrlTemplate::new(TEST_TEMPLATE)
}

/// Engine over a fresh temp dir with the given ceiling.
pub fn engine_with(fetcher: Arc<FakeFetcher>, max_concurrent: usize) -> (SpriteEngine, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig::new(dir.path().join("sprites")).with_max_concurrent(max_concurrent);
    (SpriteEngine::new(config, fetcher), dir)
}
