//! Call Policy Integration Tests
//!
//! Tests retry timing, request headers and stream subscription requests
//! through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use tokio_test::{assert_pending, assert_ready};
use tokio_util::sync::CancellationToken;
use tonic::metadata::MetadataValue;
use tonic::service::Interceptor;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Endpoint;
use tonic::{Code, Request, Status};

use invest_sdk::services::market_data::{last_price_request, my_subscriptions_request};
use invest_sdk::transport::{APP_NAME_HEADER, AUTHORIZATION_HEADER};
use invest_sdk::retry::RATE_LIMIT_RESET_HEADER;
use invest_sdk::{AuthInterceptor, Client, ClientError, Config, RetryPolicy};

fn rate_limited(reset_seconds: &str) -> Status {
    let mut status = Status::resource_exhausted("request limit exceeded");
    status
        .metadata_mut()
        .insert(RATE_LIMIT_RESET_HEADER, MetadataValue::try_from(reset_seconds).unwrap());
    status
}

/// Fails with `failure` for the first `failures` attempts, then succeeds.
fn flaky(
    calls: &Arc<AtomicU32>,
    failures: u32,
    failure: Status,
) -> impl FnMut() -> std::future::Ready<Result<u32, Status>> {
    let calls = Arc::clone(calls);
    move || {
        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n <= failures {
            std::future::ready(Err(failure.clone()))
        } else {
            std::future::ready(Ok(n))
        }
    }
}

#[tokio::test(start_paused = true)]
async fn transient_backoff_grows_linearly() {
    let policy = RetryPolicy::from_config(&Config::new("t-token").with_defaults());
    let calls = Arc::new(AtomicU32::new(0));

    let mut call = tokio_test::task::spawn(policy.run(
        "GetAccounts",
        flaky(&calls, 2, Status::unavailable("connection reset")),
    ));

    assert_pending!(call.poll());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    tokio::time::advance(Duration::from_millis(500)).await;
    assert_pending!(call.poll());
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    tokio::time::advance(Duration::from_millis(999)).await;
    assert_pending!(call.poll());

    tokio::time::advance(Duration::from_millis(1)).await;
    let result = assert_ready!(call.poll());
    assert_eq!(result.unwrap(), 3);
}

#[tokio::test(start_paused = true)]
async fn rate_limit_waits_for_reset_trailer() {
    let policy = RetryPolicy::from_config(&Config::new("t-token").with_defaults());
    let calls = Arc::new(AtomicU32::new(0));

    let mut call =
        tokio_test::task::spawn(policy.run("GetCandles", flaky(&calls, 1, rate_limited("3"))));

    assert_pending!(call.poll());
    tokio::time::advance(Duration::from_millis(2_999)).await;
    assert_pending!(call.poll());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    tokio::time::advance(Duration::from_millis(1)).await;
    assert_eq!(assert_ready!(call.poll()).unwrap(), 2);
}

#[tokio::test(start_paused = true)]
async fn rate_limit_retry_can_be_disabled() {
    let mut config = Config::new("t-token");
    config.disable_resource_exhausted_retry = true;
    let policy = RetryPolicy::from_config(&config.with_defaults());
    let calls = Arc::new(AtomicU32::new(0));

    let err = policy
        .run("GetCandles", flaky(&calls, 1, rate_limited("1")))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Code::ResourceExhausted);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn non_retryable_codes_fail_immediately() {
    let policy = RetryPolicy::from_config(&Config::new("t-token").with_defaults());
    let calls = Arc::new(AtomicU32::new(0));

    let err = policy
        .run(
            "PostOrder",
            flaky(&calls, 1, Status::invalid_argument("30079")),
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), Code::InvalidArgument);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn interceptor_sets_bearer_token_and_app_name() {
    let mut auth = AuthInterceptor::new("t-secret", "my-robot").unwrap();
    let request = auth.call(Request::new(())).unwrap();

    let metadata = request.metadata();
    assert_eq!(
        metadata.get(AUTHORIZATION_HEADER).unwrap().to_str().unwrap(),
        "Bearer t-secret"
    );
    assert_eq!(
        metadata.get(APP_NAME_HEADER).unwrap().to_str().unwrap(),
        "my-robot"
    );
    assert!(!format!("{auth:?}").contains("t-secret"));
}

#[tokio::test]
async fn bidi_stream_after_stop_is_refused() {
    let channel = Endpoint::from_static("http://127.0.0.1:9").connect_lazy();
    let auth = AuthInterceptor::new("t-token", "call-policy-test").unwrap();
    let client = Client::with_channel(
        Config::new("t-token"),
        InterceptedService::new(channel, auth),
        &CancellationToken::new(),
    );
    client.stop();

    let requests = tokio_stream::iter(vec![
        last_price_request(
            invest_sdk::proto::SubscriptionAction::Subscribe,
            &["uid-1".to_string()],
        ),
        my_subscriptions_request(),
    ]);

    let result = client.market_data_stream().market_data_stream(requests).await;
    assert!(matches!(result, Err(ClientError::Shutdown)));
}
