//! Get command handler.
//!
//! Serves one sprite from the cache, downloading it when missing.

use std::path::Path;

use anyhow::Result;

use spritedex_core::CacheKey;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the get command.
///
/// Prints the cached file path, or writes the bytes to `output` when given.
pub async fn execute(
    ctx: &CliContext,
    collection: &str,
    name: &str,
    output: Option<&Path>,
    refresh: bool,
) -> Result<()> {
    let game = ctx.manifest()?.require_game(collection)?;
    let entry = game.entry(name).ok_or_else(|| {
        CliError::Arguments(format!("'{name}' is not part of collection '{collection}'"))
    })?;

    let collection = game.collection();
    let asset = entry.asset();
    let key = CacheKey::new(&collection.slug, &asset.asset_id);
    let engine = ctx.engine();

    let cached = if refresh {
        None
    } else {
        engine.disk().read(&key).await.map_err(CliError::from)?
    };
    let bytes = match cached {
        Some(bytes) => bytes,
        None => engine
            .fetch_one(&collection.slug, &collection.url_template, &asset)
            .await
            .map_err(CliError::from)?,
    };

    match output {
        Some(path) => {
            tokio::fs::write(path, &bytes).await.map_err(CliError::from)?;
            println!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => println!("{}", engine.disk().asset_path(&key).display()),
    }
    Ok(())
}
