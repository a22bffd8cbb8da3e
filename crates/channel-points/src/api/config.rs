use std::time::Duration;

use super::HELIX_BASE;

/// Connection settings for [`HttpTransport`](super::HttpTransport).
///
/// ```
/// use std::time::Duration;
/// use channel_points::api::HelixConfig;
///
/// let config = HelixConfig::new("my-client-id").with_timeout(Duration::from_secs(10));
/// assert_eq!(config.base_url, "https://api.twitch.tv/helix");
/// ```
#[derive(Debug, Clone)]
pub struct HelixConfig {
    /// Helix root, without a trailing slash.
    pub base_url: String,
    /// Application client id sent as `Client-Id`.
    pub client_id: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            base_url: HELIX_BASE.to_string(),
            client_id: String::new(),
            timeout: Duration::from_secs(30),
            user_agent: format!("channel-points/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HelixConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// Point the transport at another Helix root (e.g. a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = HelixConfig::new("id").with_base_url("http://127.0.0.1:8080/helix/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/helix");
        assert_eq!(config.client_id, "id");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
