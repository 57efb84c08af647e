//! Client handle: one connection fanned out into per-service clients.
//!
//! # Example
//!
//! ```rust,ignore
//! use invest_sdk::{Client, config::load_config};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = load_config(Some("config.yaml"))?;
//! let client = Client::connect(config, CancellationToken::new()).await?;
//!
//! let accounts = client.users().get_accounts().await?;
//! let positions = client.operations().get_positions("").await?;
//!
//! client.stop();
//! ```

mod context;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

pub use context::{CallContext, ResponseStream};

use crate::config::{Config, SharedConfig};
use crate::error::Result;
use crate::services::{
    InstrumentsService, MarketDataService, MarketDataStreamService, OperationsService,
    OperationsStreamService, OrdersService, OrdersStreamService, SandboxService,
    StopOrdersService, UsersService,
};
use crate::transport::{self, AuthChannel, AuthInterceptor, ChannelConfig};

/// Handle to the invest API.
///
/// Owns the shared channel, the root cancellation scope and the logging span.
/// Clones share all of them.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    context: CallContext,
}

impl Client {
    /// Connect to the API.
    ///
    /// Defaults are applied to `config` and it is validated before any I/O.
    /// Cancelling `cancel` aborts every call made through this client.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the connection fails.
    pub async fn connect(config: Config, cancel: CancellationToken) -> Result<Self> {
        let (config, auth) = prepare(config)?;
        let channel = transport::connect(&ChannelConfig::from_config(&config), auth).await?;
        Ok(Self::with_channel(config, channel, &cancel))
    }

    /// Create a client whose channel connects on the first call.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn connect_lazy(config: Config, cancel: CancellationToken) -> Result<Self> {
        let (config, auth) = prepare(config)?;
        let channel = transport::connect_lazy(&ChannelConfig::from_config(&config), auth)?;
        Ok(Self::with_channel(config, channel, &cancel))
    }

    /// Build a client on an existing channel.
    ///
    /// Defaults are applied to `config`; it is not validated, since the
    /// channel already carries its credentials.
    #[must_use]
    pub fn with_channel(config: Config, channel: AuthChannel, cancel: &CancellationToken) -> Self {
        let config = config.with_defaults();
        let span = tracing::info_span!(
            "invest_client",
            app_name = %config.app_name,
            endpoint = %config.end_point,
        );
        let context = CallContext::new(
            channel,
            SharedConfig::new(config),
            cancel.child_token(),
            span,
        );

        Self {
            inner: Arc::new(ClientInner { context }),
        }
    }

    /// Stop the client.
    ///
    /// Aborts in-flight calls and makes later calls fail with
    /// [`ClientError::Shutdown`](crate::error::ClientError::Shutdown). The
    /// connection closes once the last service client built from this handle
    /// is dropped. Stopping again does nothing.
    pub fn stop(&self) {
        let context = &self.inner.context;
        if context.stop() {
            tracing::info!(parent: context.span(), "stop client");
        }
    }

    /// Whether [`Client::stop`] has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.inner.context.is_stopped()
    }

    /// Current settings, including the latest account id.
    #[must_use]
    pub fn config(&self) -> Config {
        self.inner.context.config().snapshot()
    }

    /// Set the default account used when a request leaves it empty.
    pub fn set_account_id(&self, account_id: impl Into<String>) {
        let account_id = account_id.into();
        tracing::info!(parent: self.inner.context.span(), %account_id, "default account set");
        self.inner.context.config().set_account_id(account_id);
    }

    /// The context shared by this client's services.
    #[must_use]
    pub fn context(&self) -> &CallContext {
        &self.inner.context
    }

    // ============================================
    // Service Clients
    // ============================================

    /// Order placement and management.
    #[must_use]
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.context().clone())
    }

    /// Stream of executed trades.
    #[must_use]
    pub fn orders_stream(&self) -> OrdersStreamService {
        OrdersStreamService::new(self.context().clone())
    }

    /// Candles, prices, order books.
    #[must_use]
    pub fn market_data(&self) -> MarketDataService {
        MarketDataService::new(self.context().clone())
    }

    /// Market data subscriptions.
    #[must_use]
    pub fn market_data_stream(&self) -> MarketDataStreamService {
        MarketDataStreamService::new(self.context().clone())
    }

    /// Instrument lookup and trading schedules.
    #[must_use]
    pub fn instruments(&self) -> InstrumentsService {
        InstrumentsService::new(self.context().clone())
    }

    /// Portfolio, positions and operations.
    #[must_use]
    pub fn operations(&self) -> OperationsService {
        OperationsService::new(self.context().clone())
    }

    /// Portfolio and position updates.
    #[must_use]
    pub fn operations_stream(&self) -> OperationsStreamService {
        OperationsStreamService::new(self.context().clone())
    }

    /// Accounts, tariffs and user info.
    #[must_use]
    pub fn users(&self) -> UsersService {
        UsersService::new(self.context().clone())
    }

    /// Stop orders.
    #[must_use]
    pub fn stop_orders(&self) -> StopOrdersService {
        StopOrdersService::new(self.context().clone())
    }

    /// Sandbox accounts and orders.
    #[must_use]
    pub fn sandbox(&self) -> SandboxService {
        SandboxService::new(self.context().clone())
    }
}

fn prepare(config: Config) -> Result<(Config, AuthInterceptor)> {
    let config = config.with_defaults();
    config.validate()?;
    let auth = AuthInterceptor::new(&config.token, &config.app_name)?;
    Ok((config, auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    /// Client on a plaintext channel that is never dialled.
    fn lazy_client(cancel: &CancellationToken) -> Client {
        let channel = tonic::transport::Endpoint::from_static("http://127.0.0.1:9").connect_lazy();
        let auth = AuthInterceptor::new("t-token", "test").unwrap();
        Client::with_channel(
            Config::new("t-token"),
            tonic::service::interceptor::InterceptedService::new(channel, auth),
            cancel,
        )
    }

    #[tokio::test]
    async fn empty_token_fails_before_io() {
        let err = Client::connect(Config::default(), CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[tokio::test]
    async fn defaults_are_applied_on_construction() {
        let client = lazy_client(&CancellationToken::new());
        let config = client.config();
        assert_eq!(config.app_name, crate::config::DEFAULT_APP_NAME);
        assert_eq!(config.max_retries, 3);
        assert_eq!(client.context().unary_retry().rules().len(), 2);
        assert_eq!(client.context().stream_retry().rules().len(), 1);
    }

    #[tokio::test]
    async fn stop_is_idempotent_and_blocks_calls() {
        let client = lazy_client(&CancellationToken::new());
        let users = client.users();

        client.stop();
        client.stop();
        assert!(client.is_stopped());

        let err = users.get_accounts().await.unwrap_err();
        assert!(matches!(err, ClientError::Shutdown));
    }

    #[tokio::test]
    async fn root_cancellation_aborts_calls() {
        let root = CancellationToken::new();
        let client = lazy_client(&root);

        root.cancel();
        let err = client.users().get_info().await.unwrap_err();
        assert!(matches!(err, ClientError::Cancelled));
        assert!(!client.is_stopped());
    }

    #[tokio::test]
    async fn every_service_shares_the_client_context() {
        let client = lazy_client(&CancellationToken::new());
        client.set_account_id("2000000002");

        let contexts = [
            client.orders().context().clone(),
            client.orders_stream().context().clone(),
            client.market_data().context().clone(),
            client.market_data_stream().context().clone(),
            client.instruments().context().clone(),
            client.operations().context().clone(),
            client.operations_stream().context().clone(),
            client.users().context().clone(),
            client.stop_orders().context().clone(),
            client.sandbox().context().clone(),
        ];

        client.stop();
        for ctx in &contexts {
            assert_eq!(ctx.account_id(""), "2000000002");
            assert!(ctx.is_stopped());
            assert!(ctx.cancellation_token().is_cancelled());
        }
    }

    #[tokio::test]
    async fn account_id_is_shared_with_services() {
        let client = lazy_client(&CancellationToken::new());
        let sandbox = client.sandbox();

        client.set_account_id("2000000001");
        assert_eq!(sandbox.context().account_id(""), "2000000001");
        assert_eq!(client.config().account_id, "2000000001");
    }
}
