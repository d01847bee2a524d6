//! Engine configuration.

use std::path::PathBuf;

/// Default ceiling on concurrently in-flight fetches.
pub const DEFAULT_MAX_CONCURRENT: usize = 30;

/// Default capacity of a batch's progress channel.
pub const DEFAULT_PROGRESS_BUFFER: usize = 64;

/// Default extension for stored assets.
pub const DEFAULT_FILE_EXTENSION: &str = "png";

/// Configuration for a sprite engine.
///
/// # Example
///
/// ```
/// use spritedex_core::EngineConfig;
///
/// let config = EngineConfig::new("/tmp/spritedex/sprites")
///     .with_max_concurrent(8)
///     .with_file_extension("gif");
/// assert_eq!(config.max_concurrent, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// The `<base>/sprites` directory the engine owns exclusively.
    pub sprites_root: PathBuf,
    /// Maximum concurrent fetches per batch (at least 1).
    pub max_concurrent: usize,
    /// Capacity of the progress channel (at least 1).
    pub progress_buffer: usize,
    /// File extension for stored assets, without the dot.
    pub file_extension: String,
}

impl EngineConfig {
    /// Create a configuration rooted at `sprites_root` with default limits.
    pub fn new(sprites_root: impl Into<PathBuf>) -> Self {
        Self {
            sprites_root: sprites_root.into(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            progress_buffer: DEFAULT_PROGRESS_BUFFER,
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }

    /// Set the concurrency ceiling. Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Set the progress channel capacity. Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_progress_buffer(mut self, progress_buffer: usize) -> Self {
        self.progress_buffer = progress_buffer.max(1);
        self
    }

    /// Set the stored file extension. A leading dot is stripped.
    #[must_use]
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.file_extension = extension.trim_start_matches('.').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new("/tmp/sprites");
        assert_eq!(config.max_concurrent, 30);
        assert_eq!(config.progress_buffer, 64);
        assert_eq!(config.file_extension, "png");
        assert_eq!(config.sprites_root, PathBuf::from("/tmp/sprites"));
    }

    #[test]
    fn test_builder_clamps_zero() {
        let config = EngineConfig::new("/tmp/sprites")
            .with_max_concurrent(0)
            .with_progress_buffer(0);
        assert_eq!(config.max_concurrent, 1);
        assert_eq!(config.progress_buffer, 1);
    }

    #[test]
    fn test_extension_strips_dot() {
        let config = EngineConfig::new("/tmp/sprites").with_file_extension(".webp");
        assert_eq!(config.file_extension, "webp");
    }
}
