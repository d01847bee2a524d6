//! CLI-specific error types and mappings.
//!
//! This module provides the CLI error type and mappings from `SpriteError`
//! and `PathError` to exit codes and user-facing messages.

use spritedex_core::{PathError, SpriteError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine error (fetch, storage, cleanup).
    #[error("{0}")]
    Engine(String),

    /// Argument or lookup error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The manifest is missing, unreadable or malformed.
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Engine(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Manifest(_) => 65, // EX_DATAERR
            Self::Io(_) => 74,       // EX_IOERR
        }
    }
}

impl From<SpriteError> for CliError {
    fn from(err: SpriteError) -> Self {
        match err {
            SpriteError::Storage { .. } => Self::Io(err.to_string()),
            SpriteError::InvalidUrl { .. } => Self::Arguments(err.user_message()),
            other => Self::Engine(other.to_string()),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::EmptyPath => Self::Arguments(err.to_string()),
            other => Self::Io(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
