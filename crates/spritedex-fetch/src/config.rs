//! Public configuration for the HTTP fetcher.

use std::time::Duration;

/// Configuration for [`HttpFetcher`](crate::HttpFetcher).
///
/// The engine imposes no per-fetch timeout of its own; `timeout` is passed
/// to the transport and is unset by default.
///
/// # Example
///
/// ```
/// use spritedex_fetch::FetcherConfig;
/// use std::time::Duration;
///
/// let config = FetcherConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Whole-request timeout, if any
    pub(crate) timeout: Option<Duration>,
    /// Connection establishment timeout
    pub(crate) connect_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("spritedex-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl FetcherConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a whole-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FetcherConfig::new();
        assert!(config.user_agent.contains("spritedex-fetch"));
        assert!(config.timeout.is_none());
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_pattern() {
        let config = FetcherConfig::new()
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(2));

        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }
}
