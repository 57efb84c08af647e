//! Connection to the invest API.
//!
//! One TLS channel per client, shared by every service client. Calls on the
//! channel pass through [`AuthInterceptor`], which attaches the bearer token
//! and app name.

mod auth;
mod channel;
mod config;

pub use auth::{APP_NAME_HEADER, AUTHORIZATION_HEADER, AuthInterceptor};
pub use channel::{AuthChannel, connect, connect_lazy, create_endpoint, normalize_endpoint};
pub use config::ChannelConfig;
