//! Channel settings.

use std::time::Duration;

use crate::config::Config;

/// Settings for the shared channel to the API.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// `host:port` or `https://host:port`.
    pub endpoint: String,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// TCP keepalive interval.
    pub tcp_keepalive: Duration,

    /// HTTP/2 keepalive interval.
    pub http2_keepalive_interval: Duration,

    /// Keepalive timeout.
    pub keepalive_timeout: Duration,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            endpoint: crate::config::DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            tcp_keepalive: Duration::from_secs(60),
            http2_keepalive_interval: Duration::from_secs(30),
            keepalive_timeout: Duration::from_secs(20),
        }
    }
}

impl ChannelConfig {
    /// Create a configuration with the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Channel settings for a client config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.end_point.clone())
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the HTTP/2 keepalive interval.
    #[must_use]
    pub const fn with_http2_keepalive_interval(mut self, interval: Duration) -> Self {
        self.http2_keepalive_interval = interval;
        self
    }
}
