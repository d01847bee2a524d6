//! List command handler.

use std::path::Path;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::truncate_string;

/// Execute the list command.
///
/// Shows every collection directory on disk with its sprite count, and
/// whether the manifest still tracks it when a manifest is loaded.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let engine = ctx.engine();
    let collections = engine.collections().await.map_err(CliError::from)?;

    if collections.is_empty() {
        println!("No cached collections.");
        println!("Use 'spritedex fetch <collection>' to download one.");
        return Ok(());
    }

    println!("{:<28} {:>8}  Status", "Collection", "Sprites");
    for slug in &collections {
        let count = count_sprites(&engine.disk().collection_dir(slug), &engine.config().file_extension);
        let status = match &ctx.manifest {
            Some(manifest) if manifest.game(slug).is_some() => "tracked",
            Some(_) => "orphaned",
            None => "-",
        };
        println!("{:<28} {:>8}  {status}", truncate_string(slug, 28), count);
    }
    Ok(())
}

/// Count stored sprites in a collection directory, ignoring temporary files.
fn count_sprites(dir: &Path, extension: &str) -> usize {
    let suffix = format!(".{extension}");
    std::fs::read_dir(dir).map_or(0, |entries| {
        entries
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| !name.starts_with('.') && name.ends_with(&suffix))
            })
            .count()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_count_sprites_skips_partial_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.png"), b"x").unwrap();
        std::fs::write(dir.path().join("b.png"), b"x").unwrap();
        std::fs::write(dir.path().join(".c.png.abc123.part"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        assert_eq!(count_sprites(dir.path(), "png"), 2);
    }

    #[test]
    fn test_count_sprites_missing_dir() {
        assert_eq!(count_sprites(Path::new("/nonexistent/spritedex"), "png"), 0);
    }
}
