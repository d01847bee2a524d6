//! Failures while locating or preparing the spritedex data root.

use std::path::PathBuf;
use thiserror::Error;

/// Why the data root (and the `sprites/` tree under it) could not be used.
#[derive(Debug, Error)]
pub enum PathError {
    /// `~` was used but the home directory is unknown.
    #[error("Cannot expand '~': home directory is unknown")]
    NoHomeDir,

    /// No override was given and the platform has no local data directory.
    #[error("No data directory: pass --data-dir or set SPRITEDEX_DATA_DIR")]
    NoDataDir,

    /// The data root exists but is a file, so sprites cannot live under it.
    #[error("Data root {0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// The data root could not be created.
    #[error("Failed to create data root {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// A blank data root was supplied.
    #[error("Data root path cannot be empty")]
    EmptyPath,

    /// A relative data root could not be made absolute.
    #[error("Cannot resolve relative data root: {0}")]
    CurrentDirError(String),
}
