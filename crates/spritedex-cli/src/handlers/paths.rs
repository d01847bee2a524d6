//! Paths command handler.
//!
//! Displays resolved paths for diagnostics. Resolves without creating
//! anything and without loading the manifest.

use anyhow::Result;

use spritedex_core::paths::DataRootSource;
use spritedex_core::resolve_data_root;

use crate::bootstrap::CliConfig;
use crate::error::CliError;

/// Execute the paths command.
pub fn execute(config: &CliConfig) -> Result<()> {
    let resolution = resolve_data_root(config.data_dir.as_deref()).map_err(CliError::from)?;
    let source = match resolution.source {
        DataRootSource::Explicit => "--data-dir",
        DataRootSource::EnvVar => "SPRITEDEX_DATA_DIR",
        DataRootSource::Default => "default",
    };

    println!("data_root = {} ({source})", resolution.path.display());
    println!("sprites_dir = {}", resolution.sprites_dir().display());
    match &config.manifest {
        Some(path) => println!("manifest = {}", path.display()),
        None => println!("manifest = (none)"),
    }
    Ok(())
}
