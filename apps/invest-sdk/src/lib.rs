#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Invest SDK - gRPC client for the Tinkoff Invest API
//!
//! One authenticated TLS channel is shared by typed per-service clients.
//! Every call goes through the same chain: bearer token and app name
//! headers, cancellation, and a retry policy driven by the status code.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: wire value helpers
//!   - `domain`: money and quotation conversion, timestamps, order ids
//!
//! - **Application**: call dispatch and service clients
//!   - `retry`: failure classes, backoff and per-class budgets
//!   - `client`: the [`Client`] handle and the per-call [`CallContext`]
//!   - `services`: orders, market data, instruments, operations, users,
//!     stop orders, sandbox and their stream variants
//!   - `ports`: traits over the service clients for callers and tests
//!
//! - **Infrastructure**: configuration and transport
//!   - `config`: YAML configuration with environment interpolation
//!   - `transport`: TLS endpoint, keepalive and the auth interceptor
//!   - `proto`: message types and gRPC stubs of the contract
//!   - `telemetry`: console tracing for binaries
//!
//! # Call Flow
//!
//! ```text
//! service client ──► CallContext ──► RetryPolicy ──► stub ──► AuthInterceptor ──► Channel
//!                        │                                                           │
//!                  cancellation                                                TLS :443
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Client handle and call context.
pub mod client;

/// Configuration loading and validation.
pub mod config;

/// Wire value helpers.
pub mod domain;

/// Client error type.
pub mod error;

/// Port traits over the service clients.
pub mod ports;

/// Contract message types and gRPC stubs.
pub mod proto;

/// Retry policy.
pub mod retry;

/// Per-domain service clients.
pub mod services;

/// Console tracing.
pub mod telemetry;

/// Channel construction and authentication.
pub mod transport;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{CallContext, Client, ResponseStream};
pub use config::{Config, ConfigError, SharedConfig, load_config, load_config_from_string};
pub use domain::{create_uid, ensure_order_id, from_timestamp, to_timestamp};
pub use error::{ClientError, Result, message_from_status};
pub use retry::{Backoff, FailureClass, RetryPolicy, RetryRule};
pub use services::{
    InstrumentsService, MarketDataService, MarketDataStreamService, OperationsService,
    OperationsStreamService, OrdersService, OrdersStreamService, PostOrderRequestShort,
    PostStopOrderRequestShort, SandboxPayInRequestShort, SandboxService, StopOrdersService,
    UsersService, close_position, ensure_sandbox_account, find_uid_by_ticker, first_open_account,
    last_price, security_balance,
};
pub use transport::{AuthInterceptor, ChannelConfig};
