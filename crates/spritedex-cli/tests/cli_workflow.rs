//! Handler-level workflows that need no network access.

use std::path::Path;

use spritedex_cli::handlers;
use spritedex_cli::{CliConfig, CliContext, CliError, bootstrap};
use tempfile::TempDir;

const MANIFEST: &str = r#"{
    "version": "1",
    "games": [
        {
            "slug": "firered",
            "name": "FireRed",
            "generation": 3,
            "spriteGeneration": "firered-leafgreen",
            "pokemon": [
                {"name": "Larvitar", "dexNumber": 246, "spriteSlug": "larvitar", "notes": ""}
            ]
        }
    ]
}"#;

fn context(dir: &TempDir, with_manifest: bool) -> CliContext {
    let manifest = with_manifest.then(|| {
        let path = dir.path().join("games.json");
        std::fs::write(&path, MANIFEST).unwrap();
        path
    });
    bootstrap(CliConfig {
        data_dir: Some(dir.path().join("data").display().to_string()),
        concurrency: Some(4),
        manifest,
    })
    .unwrap()
}

fn seed(sprites: &Path, slug: &str, asset: &str, body: &[u8]) {
    let dir = sprites.join(slug);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{asset}.png")), body).unwrap();
}

#[tokio::test]
async fn cleanup_removes_collections_missing_from_manifest() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, true);
    let sprites = ctx.engine().config().sprites_root.clone();
    seed(&sprites, "firered", "larvitar", b"a");
    seed(&sprites, "stale", "larvitar", b"b");
    seed(&sprites, "custom", "larvitar", b"c");

    handlers::cleanup::execute(&ctx, vec!["custom".to_string()], false)
        .await
        .unwrap();

    assert!(sprites.join("firered").is_dir());
    assert!(sprites.join("custom").is_dir());
    assert!(!sprites.join("stale").exists());
}

#[tokio::test]
async fn cleanup_without_manifest_or_keep_is_refused() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, false);
    let sprites = ctx.engine().config().sprites_root.clone();
    seed(&sprites, "firered", "larvitar", b"a");

    let err = handlers::cleanup::execute(&ctx, Vec::new(), false)
        .await
        .unwrap_err();

    assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 2);
    assert!(sprites.join("firered").is_dir());
}

#[tokio::test]
async fn get_serves_cached_sprite_without_network() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, true);
    let sprites = ctx.engine().config().sprites_root.clone();
    seed(&sprites, "firered", "larvitar", b"cached-bytes");
    let out = dir.path().join("larvitar.png");

    handlers::get::execute(&ctx, "firered", "Larvitar", Some(out.as_path()), false)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&out).unwrap(), b"cached-bytes");
}

#[tokio::test]
async fn get_unknown_sprite_is_argument_error() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, true);

    let err = handlers::get::execute(&ctx, "firered", "Mew", None, false)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CliError>(),
        Some(CliError::Arguments(_))
    ));
}

#[tokio::test]
async fn fetch_without_manifest_is_manifest_error() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, false);

    let err = handlers::fetch::execute(&ctx, &["firered".to_string()], false)
        .await
        .unwrap_err();
    assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 65);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir, false);
    let sprites = ctx.engine().config().sprites_root.clone();
    seed(&sprites, "firered", "larvitar", b"a");

    handlers::delete::execute(&ctx, "firered").await.unwrap();
    handlers::delete::execute(&ctx, "firered").await.unwrap();

    assert!(!sprites.join("firered").exists());
    handlers::list::execute(&ctx).await.unwrap();
}
