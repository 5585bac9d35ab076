use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Default API root, including the `/api` base path
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

const DEFAULT_USER_AGENT: &str = concat!("estate-portal/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`crate::api::ApiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root every endpoint is appended to
    pub base_url: String,
    pub user_agent: String,
    /// Requests carry no timeout unless one is set here
    pub timeout: Option<Duration>,
    /// Where the admin session is persisted by the demo binary
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            session_file: PathBuf::from("admin_session.json"),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("ESTATE_PORTAL_API_URL") {
            config = config.with_base_url(url);
        }

        if let Ok(secs) = std::env::var("ESTATE_PORTAL_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("ESTATE_PORTAL_TIMEOUT_SECS is not a number: {secs:?}"))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Ok(path) = std::env::var("ESTATE_PORTAL_SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Set the API root; a trailing slash is dropped so endpoints join cleanly
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::default().with_base_url("https://example.com/api/");
        assert_eq!(config.base_url, "https://example.com/api");
    }
}
