//! Cleanup command handler.
//!
//! Reclaims storage for collections the manifest no longer lists.

use std::collections::HashSet;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::manifest::ManifestCatalog;

/// Execute the cleanup command.
///
/// The live set is the manifest's collections plus `keep`. With
/// `ignore_manifest`, only `keep` is live. Without a manifest, `keep` must be
/// given so that cleanup never silently wipes every collection.
pub async fn execute(ctx: &CliContext, keep: Vec<String>, ignore_manifest: bool) -> Result<()> {
    let engine = ctx.engine();

    let removed = match (&ctx.manifest, ignore_manifest) {
        (Some(manifest), false) => {
            let catalog = ManifestCatalog::new(manifest, keep);
            engine.cleanup(&catalog).await
        }
        _ if !keep.is_empty() => {
            let live: HashSet<String> = keep.into_iter().collect();
            engine.reconcile(&live).await
        }
        _ => {
            return Err(CliError::Arguments(
                "cleanup needs a manifest or at least one --keep slug".to_string(),
            )
            .into());
        }
    }
    .map_err(CliError::from)?;

    if removed.is_empty() {
        println!("Nothing to clean up.");
    } else {
        for slug in &removed {
            println!("Removed {slug}");
        }
        println!("Removed {} collection(s).", removed.len());
    }
    Ok(())
}
