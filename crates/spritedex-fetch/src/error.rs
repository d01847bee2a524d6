//! Internal error types for HTTP fetches.
//!
//! These errors are mapped to `SpriteError` at the port boundary.

use spritedex_core::SpriteError;
use thiserror::Error;

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised by the HTTP fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than 200.
    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    Client {
        /// Description of the failure
        message: String,
    },
}

impl FetchError {
    /// Map to the core taxonomy for the given request URL.
    pub fn into_sprite_error(self, url: &str) -> SpriteError {
        match self {
            Self::UnexpectedStatus { status, url } => SpriteError::bad_status(url, status),
            Self::Transport(err) => SpriteError::transport(url, err.to_string()),
            Self::Client { message } => SpriteError::transport(url, message),
        }
    }
}
