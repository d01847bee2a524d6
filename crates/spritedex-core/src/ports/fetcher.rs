//! Remote fetcher port.

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::error::SpriteError;

/// Performs one network retrieval for one asset.
///
/// Implementations must fail with [`SpriteError::DownloadFailed`] for any
/// status other than exactly 200 (with the status code) and for transport
/// faults (without one). No retries are attempted at this layer.
///
/// # Usage
///
/// ```ignore
/// let fetcher: Arc<dyn AssetFetcherPort> = /* ... */;
/// let bytes = fetcher.fetch(&url).await?;
/// ```
#[async_trait]
pub trait AssetFetcherPort: Send + Sync {
    /// Fetch the raw body at `url`.
    async fn fetch(&self, url: &Url) -> Result<Bytes, SpriteError>;
}
