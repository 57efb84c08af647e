//! Shared state passed to every service client.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tonic::codec::Streaming;
use tonic::{Response, Status};
use tracing::Instrument;

use crate::config::SharedConfig;
use crate::error::{ClientError, Result};
use crate::retry::RetryPolicy;
use crate::transport::AuthChannel;

/// Items of a server stream; ends when the client is stopped or cancelled.
pub type ResponseStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

/// Channel, retry policies and cancellation shared by one client's services.
///
/// Cheap to clone; every service client holds one.
#[derive(Debug, Clone)]
pub struct CallContext {
    channel: AuthChannel,
    config: SharedConfig,
    unary_retry: Arc<RetryPolicy>,
    stream_retry: Arc<RetryPolicy>,
    cancel: CancellationToken,
    stopped: Arc<AtomicBool>,
    span: tracing::Span,
}

impl CallContext {
    pub(crate) fn new(
        channel: AuthChannel,
        config: SharedConfig,
        cancel: CancellationToken,
        span: tracing::Span,
    ) -> Self {
        let unary_retry = Arc::new(RetryPolicy::from_config(config.config()));
        let stream_retry = Arc::new(RetryPolicy::stream_from_config(config.config()));
        Self {
            channel,
            config,
            unary_retry,
            stream_retry,
            cancel,
            stopped: Arc::new(AtomicBool::new(false)),
            span,
        }
    }

    /// A handle to the shared channel.
    #[must_use]
    pub fn channel(&self) -> AuthChannel {
        self.channel.clone()
    }

    /// The client's configuration.
    #[must_use]
    pub const fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// `explicit` unless empty, else the configured account id.
    #[must_use]
    pub fn account_id(&self, explicit: &str) -> String {
        self.config.resolve_account_id(explicit)
    }

    /// Retry policy for unary calls.
    #[must_use]
    pub fn unary_retry(&self) -> &RetryPolicy {
        &self.unary_retry
    }

    /// Retry policy for opening server streams.
    #[must_use]
    pub fn stream_retry(&self) -> &RetryPolicy {
        &self.stream_retry
    }

    /// The token aborting this client's calls.
    #[must_use]
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Whether the client has been stopped.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Mark the client stopped and abort in-flight calls.
    ///
    /// Returns `false` if it was already stopped.
    pub(crate) fn stop(&self) -> bool {
        if self.stopped.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.cancel.cancel();
        true
    }

    pub(crate) const fn span(&self) -> &tracing::Span {
        &self.span
    }

    /// Dispatch a unary call through the unary retry policy.
    ///
    /// `call` runs once per attempt.
    ///
    /// # Errors
    ///
    /// Returns the last status after retries, [`ClientError::Cancelled`] if
    /// the root token fires, or [`ClientError::Shutdown`] after
    /// [`Client::stop`](super::Client::stop).
    pub async fn unary<T, F, Fut>(&self, method: &'static str, call: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<Response<T>, Status>>,
    {
        self.dispatch(&self.unary_retry, method, call).await
    }

    /// Open a server stream, retrying the open through the stream policy.
    ///
    /// Messages are not replayed after the stream is open.
    ///
    /// # Errors
    ///
    /// Same as [`CallContext::unary`].
    pub async fn open_stream<T, F, Fut>(
        &self,
        method: &'static str,
        call: F,
    ) -> Result<ResponseStream<T>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<Response<Streaming<T>>, Status>>,
        T: Send + 'static,
    {
        let streaming = self.dispatch(&self.stream_retry, method, call).await?;
        Ok(self.guard_stream(streaming))
    }

    /// Open a bidirectional stream once; its request side cannot be replayed.
    ///
    /// # Errors
    ///
    /// Same as [`CallContext::unary`], without retries.
    pub async fn open_bidi<T, Fut>(&self, method: &'static str, call: Fut) -> Result<ResponseStream<T>>
    where
        Fut: Future<Output = std::result::Result<Response<Streaming<T>>, Status>>,
        T: Send + 'static,
    {
        let mut call = Some(call);
        let streaming = self
            .dispatch(&RetryPolicy::none(), method, move || {
                let call = call.take();
                async move {
                    match call {
                        Some(call) => call.await,
                        None => Err(Status::failed_precondition("stream already opened")),
                    }
                }
            })
            .await?;
        Ok(self.guard_stream(streaming))
    }

    fn guard_stream<T: Send + 'static>(&self, streaming: Streaming<T>) -> ResponseStream<T> {
        Box::pin(
            streaming
                .map(|item| item.map_err(ClientError::from))
                .take_until(self.cancel.clone().cancelled_owned()),
        )
    }

    async fn dispatch<T, F, Fut>(
        &self,
        policy: &RetryPolicy,
        method: &'static str,
        call: F,
    ) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<Response<T>, Status>>,
    {
        self.ensure_running()?;
        tracing::debug!(parent: &self.span, method, "dispatching call");

        let call = policy.run(method, call).instrument(self.span.clone());
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(self.interrupted()),
            result = call => result.map(Response::into_inner).map_err(ClientError::from),
        }
    }

    fn ensure_running(&self) -> Result<()> {
        if self.is_stopped() || self.cancel.is_cancelled() {
            return Err(self.interrupted());
        }
        Ok(())
    }

    fn interrupted(&self) -> ClientError {
        if self.is_stopped() {
            ClientError::Shutdown
        } else {
            ClientError::Cancelled
        }
    }
}
