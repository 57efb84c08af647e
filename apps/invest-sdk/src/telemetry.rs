//! Console tracing setup for binaries built on the SDK.
//!
//! The library itself only emits `tracing` events inside the client span;
//! installing a subscriber is left to the application.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `info`)
//! - `LOG_ANSI`: set to `false` to disable colored output (default: true)
//!
//! # Usage
//!
//! ```rust,ignore
//! use invest_sdk::telemetry;
//!
//! #[tokio::main]
//! async fn main() {
//!     telemetry::init();
//!     // ... application code
//! }
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,h2=warn,hyper=warn,tower=warn";

/// Console logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Filter directives.
    pub filter: String,
    /// Colored output.
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            ansi: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let ansi = std::env::var("LOG_ANSI")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        Self { filter, ansi }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the console subscriber configured from the environment.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    init_with_config(&TelemetryConfig::from_env())
}

/// Install the console subscriber with explicit configuration.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with_config(config: &TelemetryConfig) -> bool {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(config.ansi)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TelemetryConfig::default();
        assert!(config.ansi);
        assert_eq!(config.filter, DEFAULT_FILTER);
    }

    #[test]
    fn invalid_filter_falls_back() {
        let config = TelemetryConfig {
            filter: "invest_sdk=loudest".to_string(),
            ansi: false,
        };
        assert_eq!(
            config.env_filter().to_string(),
            EnvFilter::new(DEFAULT_FILTER).to_string()
        );
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        let config = TelemetryConfig {
            ansi: false,
            ..TelemetryConfig::default()
        };
        init_with_config(&config);
        assert!(!init_with_config(&config));
    }
}
