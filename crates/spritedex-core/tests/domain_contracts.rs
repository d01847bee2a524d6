//! Cross-module contracts of the domain types.

use spritedex_core::{
    AssetDescriptor, CacheKey, Collection, ProgressSnapshot, SpriteError, UrlTemplate,
    asset_id_from_name,
};

#[test]
fn display_names_resolve_to_fetch_urls() {
    let collection = Collection::new(
        "firered-leafgreen",
        "FireRed / LeafGreen",
        "https://img.pokemondb.net/sprites/firered-leafgreen/normal/{sprite}.png",
    );
    let asset = AssetDescriptor::from_display_name("Nidoran♀", "nidoran-f");

    assert_eq!(asset.asset_id, "nidoran-f");
    let url = collection.url_template.resolve(&asset).unwrap();
    assert_eq!(
        url.as_str(),
        "https://img.pokemondb.net/sprites/firered-leafgreen/normal/nidoran-f.png"
    );

    let key = CacheKey::new(&collection.slug, &asset.asset_id);
    assert_eq!(key.to_string(), "firered-leafgreen-nidoran-f");
    assert_eq!(key.file_name("png"), "nidoran-f.png");
}

#[test]
fn malformed_descriptors_fail_with_invalid_url() {
    let template = UrlTemplate::new("https://sprites.test/{sprite}.png");
    for token in ["", "two words", "a/b", "a\\b", "q?x", "frag#x"] {
        let err = template
            .resolve(&AssetDescriptor::new("id", token))
            .unwrap_err();
        assert!(
            matches!(err, SpriteError::InvalidUrl { .. }),
            "token {token:?} gave {err:?}"
        );
    }

    let no_placeholder = UrlTemplate::new("https://sprites.test/static.png");
    assert!(no_placeholder.resolve(&AssetDescriptor::new("id", "ok")).is_err());

    let not_http = UrlTemplate::new("ftp://sprites.test/{sprite}.png");
    assert!(not_http.resolve(&AssetDescriptor::new("id", "ok")).is_err());
}

#[test]
fn special_names_normalize_stably() {
    assert_eq!(asset_id_from_name("Mr. Mime"), "mr-mime");
    assert_eq!(asset_id_from_name("Farfetch'd"), "farfetchd");
    assert_eq!(asset_id_from_name("Nidoran♂"), "nidoran-m");
}

#[test]
fn mixed_batch_final_snapshot_metrics() {
    let last = ProgressSnapshot::new(3, 2, 1);
    assert!(last.is_complete());
    assert!((last.progress() - 1.0).abs() < f64::EPSILON);
    assert!((last.success_rate() - 0.666_666_7).abs() < 1e-6);
}
