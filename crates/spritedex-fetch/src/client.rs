//! `reqwest`-backed implementation of the remote fetcher port.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use url::Url;

use spritedex_core::{AssetFetcherPort, SpriteError};

use crate::config::FetcherConfig;
use crate::error::{FetchError, FetchResult};

/// Longest response body excerpt written to debug logs for failed fetches.
const BODY_LOG_LIMIT: usize = 256;

/// HTTP fetcher performing a single GET per asset.
///
/// Only status `200` is accepted. Cloning is cheap; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher from configuration.
    pub fn new(config: FetcherConfig) -> FetchResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| FetchError::Client {
            message: e.to_string(),
        })?;

        Ok(Self { client })
    }

    /// Create a fetcher around an existing client.
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch `url`, keeping the internal error type.
    pub async fn get_bytes(&self, url: &Url) -> FetchResult<Bytes> {
        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(
                target: "spritedex.fetch",
                url = %url,
                status = status.as_u16(),
                body = %truncate(&body, BODY_LOG_LIMIT),
                "HTTP error downloading sprite"
            );
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl AssetFetcherPort for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Bytes, SpriteError> {
        self.get_bytes(url)
            .await
            .map_err(|e| e.into_sprite_error(url.as_str()))
    }
}

/// Cut `text` to at most `limit` bytes on a char boundary.
fn truncate(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
