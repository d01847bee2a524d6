//! Per-collection sprite URL templates.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use super::asset::AssetDescriptor;
use crate::error::SpriteError;

/// Placeholder substituted with an asset's sprite token.
pub const SPRITE_PLACEHOLDER: &str = "{sprite}";

/// A format string with a single [`SPRITE_PLACEHOLDER`].
///
/// # Example
///
/// ```
/// use spritedex_core::{AssetDescriptor, UrlTemplate};
///
/// let template = UrlTemplate::new("https://img.example.net/sprites/{sprite}.png");
/// let url = template.resolve(&AssetDescriptor::new("bulbasaur", "bulbasaur")).unwrap();
/// assert_eq!(url.as_str(), "https://img.example.net/sprites/bulbasaur.png");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Wrap a raw template string. Validation happens at resolve time.
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The raw template string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the fetch URL for one asset.
    ///
    /// Fails with [`SpriteError::InvalidUrl`] when the template has no
    /// placeholder, the token cannot be embedded in a path segment, or the
    /// result is not an absolute http(s) URL.
    pub fn resolve(&self, asset: &AssetDescriptor) -> Result<Url, SpriteError> {
        if !self.0.contains(SPRITE_PLACEHOLDER) {
            return Err(SpriteError::invalid_url(
                &asset.asset_id,
                format!("template has no {SPRITE_PLACEHOLDER} placeholder"),
            ));
        }

        let token = asset.sprite_token.as_str();
        if token.is_empty() {
            return Err(SpriteError::invalid_url(&asset.asset_id, "empty sprite token"));
        }
        if let Some(bad) = token
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '?' | '#'))
        {
            return Err(SpriteError::invalid_url(
                &asset.asset_id,
                format!("sprite token contains {bad:?}"),
            ));
        }

        let raw = self.0.replace(SPRITE_PLACEHOLDER, token);
        let url = Url::parse(&raw)
            .map_err(|e| SpriteError::invalid_url(&asset.asset_id, format!("{raw}: {e}")))?;

        match url.scheme() {
            "http" | "https" if url.host().is_some() => Ok(url),
            scheme => Err(SpriteError::invalid_url(
                &asset.asset_id,
                format!("unsupported URL scheme '{scheme}'"),
            )),
        }
    }
}

impl fmt::Debug for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UrlTemplate").field(&self.0).finish()
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UrlTemplate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UrlTemplate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
