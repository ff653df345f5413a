// HTTP client configuration

use std::time::Duration;

/// Production REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api2.scaledrone.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Pool idle timeout
    pub pool_idle_timeout: Option<Duration>,
    /// Base URL for API requests, without a trailing slash
    pub base_url: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            pool_idle_timeout: Some(Duration::from_secs(90)),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("scaledrone-rust/{}", crate::version()),
        }
    }
}

impl HttpConfig {
    /// Create a new configuration builder
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

/// HTTP configuration builder
#[derive(Default)]
pub struct HttpConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    // Some(None) disables the idle timeout; None keeps the default
    pool_idle_timeout: Option<Option<Duration>>,
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl HttpConfigBuilder {
    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set pool idle timeout, `None` keeps idle connections open indefinitely
    pub fn pool_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Set base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> HttpConfig {
        let default = HttpConfig::default();
        HttpConfig {
            timeout: self.timeout.unwrap_or(default.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(default.connect_timeout),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(default.pool_idle_timeout),
            base_url: self
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(default.base_url),
            user_agent: self.user_agent.unwrap_or(default.user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production() {
        let config = HttpConfig::default();
        assert_eq!(config.base_url, "https://api2.scaledrone.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("scaledrone-rust/"));
    }

    #[test]
    fn builder_strips_trailing_slash() {
        let config = HttpConfig::builder()
            .base_url("http://127.0.0.1:8080/")
            .timeout(Duration::from_secs(2))
            .build();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn pool_idle_timeout_can_be_disabled() {
        let disabled = HttpConfig::builder().pool_idle_timeout(None).build();
        assert_eq!(disabled.pool_idle_timeout, None);

        let custom = HttpConfig::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build();
        assert_eq!(custom.pool_idle_timeout, Some(Duration::from_secs(30)));

        let untouched = HttpConfig::builder().build();
        assert_eq!(untouched.pool_idle_timeout, Some(Duration::from_secs(90)));
    }
}
