//! Sprite cache error types.
//!
//! These errors are designed to be serializable and not depend on external
//! error types like `std::io::Error`. For I/O errors, we capture the kind
//! and message as strings.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for sprite fetch, storage and cleanup operations.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpriteError {
    /// The asset cannot be resolved to a fetchable URL.
    #[error("Invalid sprite URL for {asset}: {reason}")]
    InvalidUrl {
        /// Asset id whose URL failed to resolve.
        asset: String,
        /// Why resolution failed.
        reason: String,
    },

    /// Non-200 response, or a transport fault when `status_code` is `None`.
    #[error("Failed to download {url}: {message}")]
    DownloadFailed {
        /// The URL that was requested.
        url: String,
        /// HTTP status code, absent for transport faults.
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
        /// Detailed error message.
        message: String,
    },

    /// Disk write, read, delete or list error.
    #[error("Storage error during {operation} ({path}): {message}")]
    Storage {
        /// The operation that failed (e.g. "write", "create_dir").
        operation: String,
        /// Path involved in the failure.
        path: String,
        /// Detailed error message.
        message: String,
    },

    /// Directory enumeration or deletion error during cleanup.
    #[error("Reconciliation failed: {message}")]
    Reconciliation {
        /// Detailed error message.
        message: String,
    },

    /// The operation was cancelled before it finished.
    #[error("Operation cancelled")]
    Cancelled,
}

impl SpriteError {
    /// Create an invalid URL error.
    pub fn invalid_url(asset: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            asset: asset.into(),
            reason: reason.into(),
        }
    }

    /// Create a download error.
    pub fn download_failed(
        url: impl Into<String>,
        status_code: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::DownloadFailed {
            url: url.into(),
            status_code,
            message: message.into(),
        }
    }

    /// Create a download error for an unexpected HTTP status.
    pub fn bad_status(url: impl Into<String>, status_code: u16) -> Self {
        Self::download_failed(
            url,
            Some(status_code),
            format!("unexpected HTTP status {status_code}"),
        )
    }

    /// Create a download error for a transport fault.
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::download_failed(url, None, message)
    }

    /// Create a storage error from an operation, path and message.
    pub fn storage(
        operation: impl Into<String>,
        path: impl AsRef<Path>,
        message: impl Into<String>,
    ) -> Self {
        Self::Storage {
            operation: operation.into(),
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    /// Create a storage error from a `std::io::Error`.
    ///
    /// Captures the error kind name alongside the message.
    pub fn from_io_error(operation: &str, path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::storage(operation, path, format!("{kind:?}: {err}"))
    }

    /// Create a reconciliation error.
    pub fn reconciliation(message: impl Into<String>) -> Self {
        Self::Reconciliation {
            message: message.into(),
        }
    }

    /// Check if a later retry could plausibly succeed.
    ///
    /// Transport faults and 5xx responses qualify. The engine itself never
    /// retries; this is for callers with their own policy.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::DownloadFailed {
                status_code: None, ..
            } => true,
            Self::DownloadFailed {
                status_code: Some(code),
                ..
            } => *code >= 500,
            _ => false,
        }
    }

    /// Whether this is a transport fault rather than a status failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::DownloadFailed {
                status_code: None,
                ..
            }
        )
    }

    /// Convert to a user-friendly message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl { asset, .. } => format!("Invalid sprite URL for {asset}"),
            Self::DownloadFailed {
                url,
                status_code: Some(code),
                ..
            } => format!("Failed to download {url} (HTTP {code})"),
            Self::DownloadFailed { url, .. } => format!("Failed to download {url}"),
            Self::Storage { operation, .. } => format!("Sprite storage {operation} failed"),
            Self::Reconciliation { message } => format!("Sprite cleanup failed: {message}"),
            Self::Cancelled => "Operation was cancelled.".to_string(),
        }
    }
}

/// Convenience result type for sprite operations.
pub type SpriteResult<T> = Result<T, SpriteError>;
