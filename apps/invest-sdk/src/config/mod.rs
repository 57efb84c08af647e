//! Client configuration.
//!
//! Loads the SDK's YAML config file (PascalCase keys, the same file the other
//! language SDKs read), interpolates environment variables and applies the
//! connection defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use invest_sdk::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("sandbox.yaml"))?;
//! ```
//!
//! ```yaml
//! EndPoint: sandbox-invest-public-api.tinkoff.ru:443
//! Token: ${INVEST_TOKEN}
//! AppName: my-robot
//! AccountId: ""
//! MaxRetries: 3
//! DisableResourceExhaustedRetry: false
//! DisableAllRetry: false
//! ```

mod shared;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use shared::SharedConfig;

/// App name sent in `x-app-name` when none is configured.
pub const DEFAULT_APP_NAME: &str = "invest-api-go-sdk";

/// Sandbox endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "sandbox-invest-public-api.tinkoff.ru:443";

/// Production endpoint.
pub const PROD_ENDPOINT: &str = "invest-public-api.tinkoff.ru:443";

/// Retry budget used when retries are enabled but no count is configured.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// No bearer token configured.
    #[error("Token is required")]
    MissingToken,

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Connection and retry settings for one client.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Config {
    /// `host:port` of the API (TLS is always used).
    pub end_point: String,
    /// Bearer token.
    pub token: String,
    /// Value of the `x-app-name` header.
    pub app_name: String,
    /// Account used when a request leaves the account empty.
    pub account_id: String,
    /// Retry budget per failure class.
    pub max_retries: u32,
    /// Do not retry `RESOURCE_EXHAUSTED` (rate limit) failures.
    pub disable_resource_exhausted_retry: bool,
    /// Do not retry anything; forces `max_retries` to zero.
    pub disable_all_retry: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("end_point", &self.end_point)
            .field("token", &"<redacted>")
            .field("app_name", &self.app_name)
            .field("account_id", &self.account_id)
            .field("max_retries", &self.max_retries)
            .field(
                "disable_resource_exhausted_retry",
                &self.disable_resource_exhausted_retry,
            )
            .field("disable_all_retry", &self.disable_all_retry)
            .finish()
    }
}

impl Config {
    /// Create a sandbox configuration with the given token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
        .with_defaults()
    }

    /// Set the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.end_point = endpoint.into();
        self
    }

    /// Set the app name.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// Set the default account.
    #[must_use]
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    /// Set the retry budget.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Fill empty fields with defaults.
    ///
    /// - empty `AppName` becomes [`DEFAULT_APP_NAME`]
    /// - empty `EndPoint` becomes [`DEFAULT_ENDPOINT`]
    /// - `DisableAllRetry` forces `MaxRetries` to 0; otherwise 0 becomes
    ///   [`DEFAULT_MAX_RETRIES`]
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        if self.app_name.is_empty() {
            self.app_name = DEFAULT_APP_NAME.to_string();
        }
        if self.end_point.is_empty() {
            self.end_point = DEFAULT_ENDPOINT.to_string();
        }
        if self.disable_all_retry {
            self.max_retries = 0;
        } else if self.max_retries == 0 {
            self.max_retries = DEFAULT_MAX_RETRIES;
        }
        self
    }

    /// Check the fields a connection cannot do without.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingToken`] for an empty token and
    /// [`ConfigError::ValidationError`] for a plaintext or malformed endpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        if self.end_point.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "EndPoint '{}' must not use plaintext http",
                self.end_point
            )));
        }

        if self.end_point.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "EndPoint '{}' contains whitespace",
                self.end_point
            )));
        }

        Ok(())
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// Defaults are applied; validation is left to client construction.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    Ok(config.with_defaults())
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_fields_get_defaults() {
        let config = Config::default().with_defaults();
        assert_eq!(config.app_name, "invest-api-go-sdk");
        assert_eq!(config.end_point, "sandbox-invest-public-api.tinkoff.ru:443");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn explicit_values_survive_defaults() {
        let config = Config::new("t-token")
            .with_endpoint(PROD_ENDPOINT)
            .with_app_name("robot")
            .with_max_retries(7)
            .with_defaults();
        assert_eq!(config.end_point, PROD_ENDPOINT);
        assert_eq!(config.app_name, "robot");
        assert_eq!(config.max_retries, 7);
    }

    #[test]
    fn disable_all_retry_forces_zero() {
        let config = Config {
            max_retries: 5,
            disable_all_retry: true,
            ..Default::default()
        }
        .with_defaults();
        assert_eq!(config.max_retries, 0);
    }

    proptest! {
        #[test]
        fn disable_all_retry_always_zero(max in any::<u32>(), re in any::<bool>()) {
            let config = Config {
                max_retries: max,
                disable_resource_exhausted_retry: re,
                disable_all_retry: true,
                ..Default::default()
            }
            .with_defaults();
            prop_assert_eq!(config.max_retries, 0);
        }

        #[test]
        fn defaults_are_idempotent(max in 0u32..10, all in any::<bool>(), name in "[a-z]{0,8}") {
            let once = Config {
                app_name: name,
                max_retries: max,
                disable_all_retry: all,
                ..Default::default()
            }
            .with_defaults();
            let twice = once.clone().with_defaults();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn validate_rejects_empty_token() {
        let config = Config::default().with_defaults();
        assert!(matches!(config.validate(), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn validate_rejects_plaintext_endpoint() {
        let config = Config::new("t-token").with_endpoint("http://localhost:8080");
        let Err(err) = config.validate() else {
            panic!("expected plaintext endpoint to be rejected");
        };
        assert!(err.to_string().contains("plaintext"));
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", Config::new("t-secret"));
        assert!(!rendered.contains("t-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn load_pascal_case_yaml() {
        let yaml = r#"
EndPoint: invest-public-api.tinkoff.ru:443
Token: t-abc
AppName: robot
AccountId: "2000000001"
MaxRetries: 5
DisableResourceExhaustedRetry: true
"#;
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.end_point, PROD_ENDPOINT);
        assert_eq!(config.token, "t-abc");
        assert_eq!(config.app_name, "robot");
        assert_eq!(config.account_id, "2000000001");
        assert_eq!(config.max_retries, 5);
        assert!(config.disable_resource_exhausted_retry);
        assert!(!config.disable_all_retry);
    }

    #[test]
    fn load_minimal_yaml_applies_defaults() {
        let config = load_config_from_string("Token: t-abc\n").unwrap();
        assert_eq!(config.end_point, DEFAULT_ENDPOINT);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Token: t-file\nDisableAllRetry: true").unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.token, "t-file");
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Some("/nonexistent/invest.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/invest.yaml"));
    }

    #[test]
    fn env_var_with_default_when_missing() {
        let input = "Token: ${INVEST_SDK_TEST_NONEXISTENT_VAR:-t-default}";
        assert_eq!(interpolate_env_vars(input), "Token: t-default");
    }

    #[test]
    fn env_var_without_default_becomes_empty() {
        let input = "Token: ${INVEST_SDK_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "Token: ");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax
    fn env_var_uses_existing_value() {
        let input = "EndPoint: ${PATH:-default}";
        let result = interpolate_env_vars(input);
        assert_ne!(result, "EndPoint: default");
        assert!(result.starts_with("EndPoint: "));
    }
}
