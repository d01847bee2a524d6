//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Data root resolution (via spritedex-core)
//! - HTTP fetcher (via spritedex-fetch)
//! - Sprite engine (via spritedex-cache)
//! - Manifest loading
//!
//! Command handlers receive the composed `CliContext`.

use std::path::PathBuf;
use std::sync::Arc;

use spritedex_cache::SpriteEngine;
use spritedex_core::paths::DataRootResolution;
use spritedex_core::{EngineConfig, data_root, resolve_data_root};
use spritedex_fetch::{FetcherConfig, HttpFetcher};

use crate::error::CliError;
use crate::manifest::Manifest;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit data directory, if given.
    pub data_dir: Option<String>,
    /// Concurrency ceiling override.
    pub concurrency: Option<usize>,
    /// Manifest file, if given.
    pub manifest: Option<PathBuf>,
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// The sprite engine.
    pub engine: SpriteEngine,
    /// Where the data root came from.
    pub data_root: DataRootResolution,
    /// The loaded manifest, if one was configured.
    pub manifest: Option<Manifest>,
}

impl CliContext {
    /// Access the engine.
    pub const fn engine(&self) -> &SpriteEngine {
        &self.engine
    }

    /// The manifest, or an error telling the user how to provide one.
    pub fn manifest(&self) -> Result<&Manifest, CliError> {
        self.manifest.as_ref().ok_or_else(|| {
            CliError::Manifest(
                "no manifest configured (use --manifest or SPRITEDEX_MANIFEST)".to_string(),
            )
        })
    }
}

/// Bootstrap the CLI application.
///
/// Resolves and creates the data root, loads the manifest when configured,
/// and builds the engine around an HTTP fetcher.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let resolution = resolve_data_root(config.data_dir.as_deref())?;
    data_root(config.data_dir.as_deref())?;

    let manifest = config.manifest.as_deref().map(Manifest::load).transpose()?;

    let mut engine_config = EngineConfig::new(resolution.sprites_dir());
    if let Some(concurrency) = config.concurrency {
        if concurrency == 0 {
            return Err(CliError::Arguments(
                "concurrency must be at least 1".to_string(),
            ));
        }
        engine_config = engine_config.with_max_concurrent(concurrency);
    }

    let fetcher = HttpFetcher::new(FetcherConfig::new())
        .map_err(|e| CliError::Engine(format!("HTTP client: {e}")))?;

    tracing::debug!(
        target: "spritedex.cache",
        sprites_root = %engine_config.sprites_root.display(),
        max_concurrent = engine_config.max_concurrent,
        "Engine configured"
    );

    Ok(CliContext {
        engine: SpriteEngine::new(engine_config, Arc::new(fetcher)),
        data_root: resolution,
        manifest,
    })
}
