//! Error types for the SDK.

use thiserror::Error;

use crate::config::ConfigError;

/// Trailer carrying the human readable error text.
pub const MESSAGE_HEADER: &str = "message";

/// Trailer carrying the server-side request id.
pub const TRACKING_ID_HEADER: &str = "x-tracking-id";

/// Errors that can occur when talking to the invest API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid or incomplete configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Failed to establish the channel.
    #[error("connection failed: {0}")]
    Connect(#[from] tonic::transport::Error),

    /// gRPC status returned by the server (after retries).
    #[error("grpc error: {0}")]
    Status(#[from] tonic::Status),

    /// The client's cancellation token fired.
    #[error("call cancelled")]
    Cancelled,

    /// The client was stopped before or during the call.
    #[error("client is stopped")]
    Shutdown,

    /// A request could not be built from the given arguments.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },
}

/// Result alias used by every SDK operation.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// gRPC status of the failure, if it came from the server.
    #[must_use]
    pub const fn status(&self) -> Option<&tonic::Status> {
        match self {
            Self::Status(status) => Some(status),
            _ => None,
        }
    }

    /// gRPC code of the failure.
    ///
    /// Local failures map to the nearest code: cancellation and shutdown to
    /// `Cancelled`, transport to `Unavailable`, bad arguments and config to
    /// `InvalidArgument`.
    #[must_use]
    pub fn code(&self) -> tonic::Code {
        match self {
            Self::Status(status) => status.code(),
            Self::Cancelled | Self::Shutdown => tonic::Code::Cancelled,
            Self::Connect(_) => tonic::Code::Unavailable,
            Self::Config(_) | Self::InvalidArgument { .. } => tonic::Code::InvalidArgument,
        }
    }

    /// Server-side tracking id, for support requests.
    #[must_use]
    pub fn tracking_id(&self) -> Option<String> {
        self.status()
            .and_then(|status| metadata_str(status, TRACKING_ID_HEADER))
    }
}

/// Human readable text of a status.
///
/// The API puts the detail in the `message` trailer and a numeric code in the
/// status message; the trailer is preferred when present.
#[must_use]
pub fn message_from_status(status: &tonic::Status) -> String {
    metadata_str(status, MESSAGE_HEADER).unwrap_or_else(|| status.message().to_string())
}

fn metadata_str(status: &tonic::Status, key: &str) -> Option<String> {
    status
        .metadata()
        .get(key)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
