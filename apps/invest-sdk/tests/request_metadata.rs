//! Request Metadata Integration Tests
//!
//! Runs service calls from one client against an in-process gRPC server and
//! checks the headers each call arrives with.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::convert::Infallible;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::Status;
use tonic::codegen::{Body, BoxFuture, Context, Poll, Service, StdError, http};
use tonic::metadata::MetadataMap;
use tonic::server::{Grpc, NamedService, UnaryService};
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Endpoint, Server};

use invest_sdk::proto::PACKAGE;
use invest_sdk::transport::{APP_NAME_HEADER, AUTHORIZATION_HEADER};
use invest_sdk::{AuthInterceptor, Client, Config, PostOrderRequestShort};

/// Zero fields on the wire; decodes as the default of any response type.
#[derive(Clone, PartialEq, prost::Message)]
struct Empty {}

type Seen = Arc<Mutex<Vec<(String, MetadataMap)>>>;

trait ServiceName {
    const NAME: &'static str;
}

struct Users;

impl ServiceName for Users {
    const NAME: &'static str = "tinkoff.public.invest.api.contract.v1.UsersService";
}

struct Orders;

impl ServiceName for Orders {
    const NAME: &'static str = "tinkoff.public.invest.api.contract.v1.OrdersService";
}

/// Answers every method of service `S` with an empty message and records
/// the request path and metadata.
struct Recorder<S> {
    seen: Seen,
    service: PhantomData<fn() -> S>,
}

impl<S> Recorder<S> {
    fn new(seen: &Seen) -> Self {
        Self {
            seen: Arc::clone(seen),
            service: PhantomData,
        }
    }
}

impl<S> Clone for Recorder<S> {
    fn clone(&self) -> Self {
        Self::new(&self.seen)
    }
}

impl<S: ServiceName> NamedService for Recorder<S> {
    const NAME: &'static str = S::NAME;
}

struct Record {
    path: String,
    seen: Seen,
}

impl UnaryService<Empty> for Record {
    type Response = Empty;
    type Future = BoxFuture<tonic::Response<Empty>, Status>;

    fn call(&mut self, request: tonic::Request<Empty>) -> Self::Future {
        self.seen
            .lock()
            .push((std::mem::take(&mut self.path), request.metadata().clone()));
        Box::pin(async { Ok(tonic::Response::new(Empty {})) })
    }
}

impl<S, B> Service<http::Request<B>> for Recorder<S>
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::Body>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<B>) -> Self::Future {
        let record = Record {
            path: request.uri().path().to_string(),
            seen: Arc::clone(&self.seen),
        };
        Box::pin(async move {
            let mut grpc = Grpc::new(tonic_prost::ProstCodec::<Empty, Empty>::default());
            Ok(grpc.unary(record, request).await)
        })
    }
}

/// Start the recording server on a random port and return a client for it.
async fn setup_test_server(
    token: &str,
    app_name: &str,
) -> (Client, Seen, tokio::task::JoinHandle<()>) {
    let seen = Seen::default();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let users = Recorder::<Users>::new(&seen);
    let orders = Recorder::<Orders>::new(&seen);
    let server_handle = tokio::spawn(async move {
        Server::builder()
            .add_service(users)
            .add_service(orders)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    // Give server time to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    let channel = Endpoint::from_shared(format!("http://{addr}"))
        .unwrap()
        .connect()
        .await
        .unwrap();
    let auth = AuthInterceptor::new(token, app_name).unwrap();
    let client = Client::with_channel(
        Config::new(token),
        InterceptedService::new(channel, auth),
        &CancellationToken::new(),
    );

    (client, seen, server_handle)
}

fn header<'a>(metadata: &'a MetadataMap, key: &str) -> &'a str {
    metadata
        .get(key)
        .unwrap_or_else(|| panic!("missing {key}"))
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn calls_through_different_services_carry_the_same_credentials() {
    let (client, seen, handle) = setup_test_server("t-e2e", "e2e-robot").await;

    client.users().get_accounts().await.unwrap();
    client
        .orders()
        .buy(PostOrderRequestShort::market("uid-1", 1).with_account_id("2000000001"))
        .await
        .unwrap();

    let seen = seen.lock();
    let paths: Vec<&str> = seen.iter().map(|(path, _)| path.as_str()).collect();
    assert_eq!(
        paths,
        [
            format!("/{PACKAGE}.UsersService/GetAccounts"),
            format!("/{PACKAGE}.OrdersService/PostOrder"),
        ]
    );

    for (path, metadata) in seen.iter() {
        assert_eq!(header(metadata, AUTHORIZATION_HEADER), "Bearer t-e2e", "{path}");
        assert_eq!(header(metadata, APP_NAME_HEADER), "e2e-robot", "{path}");
    }

    handle.abort();
}

#[tokio::test]
async fn service_handles_created_before_and_after_calls_share_credentials() {
    let (client, seen, handle) = setup_test_server("t-shared", "shared-robot").await;
    let early = client.users();

    early.get_accounts().await.unwrap();
    client.users().get_accounts().await.unwrap();

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    let (_, first) = &seen[0];
    let (_, second) = &seen[1];
    assert_eq!(
        header(first, AUTHORIZATION_HEADER),
        header(second, AUTHORIZATION_HEADER)
    );
    assert_eq!(header(first, APP_NAME_HEADER), header(second, APP_NAME_HEADER));
    assert_eq!(header(second, APP_NAME_HEADER), "shared-robot");

    handle.abort();
}
