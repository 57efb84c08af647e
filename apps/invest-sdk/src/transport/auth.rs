//! Per-call credentials.

use tonic::metadata::{AsciiMetadataValue, MetadataMap};
use tonic::service::Interceptor;
use tonic::{Request, Status};

use crate::error::ClientError;

/// Header carrying the bearer token.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Header identifying the calling application.
pub const APP_NAME_HEADER: &str = "x-app-name";

/// Adds `authorization: Bearer <token>` and `x-app-name` to every request.
///
/// Values are validated once at construction, so the interceptor itself
/// never fails.
#[derive(Clone)]
pub struct AuthInterceptor {
    authorization: AsciiMetadataValue,
    app_name: AsciiMetadataValue,
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInterceptor")
            .field("authorization", &"Bearer <redacted>")
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl AuthInterceptor {
    /// Build the interceptor from a token and app name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] if either value is not a
    /// valid header value.
    pub fn new(token: &str, app_name: &str) -> Result<Self, ClientError> {
        let mut authorization: AsciiMetadataValue = format!("Bearer {token}")
            .parse()
            .map_err(|_| ClientError::invalid_argument("token is not a valid header value"))?;
        authorization.set_sensitive(true);

        let app_name = app_name.parse().map_err(|_| {
            ClientError::invalid_argument(format!("app name '{app_name}' is not a valid header value"))
        })?;

        Ok(Self {
            authorization,
            app_name,
        })
    }

    /// Write the credentials into `metadata`, replacing existing values.
    pub fn apply(&self, metadata: &mut MetadataMap) {
        metadata.insert(AUTHORIZATION_HEADER, self.authorization.clone());
        metadata.insert(APP_NAME_HEADER, self.app_name.clone());
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        self.apply(request.metadata_mut());
        Ok(request)
    }
}
