//! Collections group assets under one URL template and disk directory.

use serde::{Deserialize, Serialize};

use super::template::UrlTemplate;

/// A named group of assets.
///
/// The `slug` is unique and doubles as the collection's directory name under
/// the sprites root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Stable, unique identifier used as the disk directory name.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
    /// Template every asset URL in this collection is resolved from.
    pub url_template: UrlTemplate,
}

impl Collection {
    /// Create a new collection.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        url_template: impl Into<UrlTemplate>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            url_template: url_template.into(),
        }
    }
}
