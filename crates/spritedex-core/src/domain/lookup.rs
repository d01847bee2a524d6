//! Read-path result.

use bytes::Bytes;

/// Outcome of a cache read.
///
/// Callers render their own placeholder for `Pending` and `Unavailable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteLookup {
    /// The asset bytes, served from memory or disk.
    Loaded(Bytes),
    /// Not cached yet; a background fetch is scheduled or already running.
    Pending,
    /// Not cached and cannot be fetched (the asset URL does not resolve).
    Unavailable,
}

impl SpriteLookup {
    /// The loaded bytes, if any.
    pub const fn bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Loaded(bytes) => Some(bytes),
            Self::Pending | Self::Unavailable => None,
        }
    }

    /// Whether the asset was served.
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}
