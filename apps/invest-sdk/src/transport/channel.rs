//! Channel factory: TLS endpoint plus the auth interceptor.

use std::sync::Once;

use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use super::auth::AuthInterceptor;
use super::config::ChannelConfig;
use crate::error::ClientError;

/// The channel every service client is built on.
pub type AuthChannel = InterceptedService<Channel, AuthInterceptor>;

/// Prefix `https://` to a bare `host:port`.
///
/// # Errors
///
/// Returns [`ClientError::InvalidArgument`] for an empty or plaintext
/// (`http://`) endpoint.
pub fn normalize_endpoint(endpoint: &str) -> Result<String, ClientError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(ClientError::invalid_argument("endpoint is empty"));
    }
    if endpoint.starts_with("http://") {
        return Err(ClientError::invalid_argument(format!(
            "endpoint '{endpoint}' must use TLS"
        )));
    }
    if endpoint.starts_with("https://") {
        Ok(endpoint.to_string())
    } else {
        Ok(format!("https://{endpoint}"))
    }
}

/// Create a TLS endpoint from the config.
///
/// # Errors
///
/// Returns error if the endpoint is invalid or TLS cannot be configured.
pub fn create_endpoint(config: &ChannelConfig) -> Result<Endpoint, ClientError> {
    install_crypto_provider();

    let uri = normalize_endpoint(&config.endpoint)?;
    let endpoint = Channel::from_shared(uri)
        .map_err(|e| ClientError::invalid_argument(format!("invalid endpoint: {e}")))?
        .tls_config(ClientTlsConfig::new().with_native_roots())?
        .connect_timeout(config.connect_timeout)
        .tcp_keepalive(Some(config.tcp_keepalive))
        .http2_keep_alive_interval(config.http2_keepalive_interval)
        .keep_alive_timeout(config.keepalive_timeout)
        .keep_alive_while_idle(true)
        .tcp_nodelay(true);

    Ok(endpoint)
}

/// Make `ring` the process-wide rustls provider unless one is already set.
fn install_crypto_provider() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Connect and complete the TLS handshake before returning.
///
/// # Errors
///
/// Returns error if the endpoint is invalid or the connection fails.
pub async fn connect(
    config: &ChannelConfig,
    auth: AuthInterceptor,
) -> Result<AuthChannel, ClientError> {
    let channel = create_endpoint(config)?.connect().await?;
    tracing::info!(endpoint = %config.endpoint, "Connected to invest API");
    Ok(InterceptedService::new(channel, auth))
}

/// Create the channel without I/O; it connects on the first call.
///
/// # Errors
///
/// Returns error if the endpoint is invalid.
pub fn connect_lazy(
    config: &ChannelConfig,
    auth: AuthInterceptor,
) -> Result<AuthChannel, ClientError> {
    let channel = create_endpoint(config)?.connect_lazy();
    tracing::debug!(endpoint = %config.endpoint, "Created lazy connection to invest API");
    Ok(InterceptedService::new(channel, auth))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("invest-public-api.tinkoff.ru:443", "https://invest-public-api.tinkoff.ru:443" ; "bare host")]
    #[test_case("https://localhost:8443", "https://localhost:8443" ; "explicit https")]
    #[test_case("  localhost:8443 ", "https://localhost:8443" ; "trimmed")]
    fn normalizes_endpoints(input: &str, expected: &str) {
        assert_eq!(normalize_endpoint(input).unwrap(), expected);
    }

    #[test]
    fn refuses_plaintext_and_empty() {
        assert!(normalize_endpoint("http://localhost:8080").is_err());
        assert!(normalize_endpoint("").is_err());
    }

    #[test]
    fn plaintext_endpoint_never_reaches_tls() {
        let err = create_endpoint(&ChannelConfig::new("http://localhost:8080")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument { .. }));
    }
}
