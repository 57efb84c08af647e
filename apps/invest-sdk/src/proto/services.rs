// Client stubs for the services of package `tinkoff.public.invest.api.contract.v1`.
//
// Each stub follows the shape tonic's codegen emits: a thin wrapper around
// `tonic::client::Grpc<T>` with one async method per RPC.

/// Declares a tonic client module for one remote service.
///
/// Method kinds:
/// - `unary`: single request, single response
/// - `server_streaming`: single request, response stream
/// - `streaming`: request stream, response stream
macro_rules! grpc_client {
    (
        $(#[$meta:meta])*
        $module:ident :: $client:ident = $service:literal {
            $( $kind:ident fn $method:ident ( $req:ident ) -> $resp:ident = $rpc:literal ; )*
        }
    ) => {
        $(#[$meta])*
        pub mod $module {
            use tonic::codegen::*;

            #[derive(Debug, Clone)]
            pub struct $client<T> {
                inner: tonic::client::Grpc<T>,
            }

            impl<T> $client<T>
            where
                T: tonic::client::GrpcService<tonic::body::Body>,
                T::Error: Into<StdError>,
                T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
                <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
            {
                pub fn new(inner: T) -> Self {
                    let inner = tonic::client::Grpc::new(inner);
                    Self { inner }
                }

                /// Limits the maximum size of a decoded message.
                #[must_use]
                pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
                    self.inner = self.inner.max_decoding_message_size(limit);
                    self
                }

                $( grpc_client!(@method $kind, $service, $method, $req, $resp, $rpc); )*
            }
        }
    };

    (@method unary, $service:literal, $method:ident, $req:ident, $resp:ident, $rpc:literal) => {
        pub async fn $method(
            &mut self,
            request: impl tonic::IntoRequest<crate::proto::$req>,
        ) -> std::result::Result<tonic::Response<crate::proto::$resp>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(concat!("/", $service, "/", $rpc));
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new($service, $rpc));
            self.inner.unary(req, path, codec).await
        }
    };

    (@method server_streaming, $service:literal, $method:ident, $req:ident, $resp:ident, $rpc:literal) => {
        pub async fn $method(
            &mut self,
            request: impl tonic::IntoRequest<crate::proto::$req>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<crate::proto::$resp>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(concat!("/", $service, "/", $rpc));
            let mut req = request.into_request();
            req.extensions_mut().insert(GrpcMethod::new($service, $rpc));
            self.inner.server_streaming(req, path, codec).await
        }
    };

    (@method streaming, $service:literal, $method:ident, $req:ident, $resp:ident, $rpc:literal) => {
        pub async fn $method(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = crate::proto::$req>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<crate::proto::$resp>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {}", e.into())))?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(concat!("/", $service, "/", $rpc));
            let mut req = request.into_streaming_request();
            req.extensions_mut().insert(GrpcMethod::new($service, $rpc));
            self.inner.streaming(req, path, codec).await
        }
    };
}

grpc_client! {
    /// Order placement and management.
    orders_service_client::OrdersServiceClient = "tinkoff.public.invest.api.contract.v1.OrdersService" {
        unary fn post_order(PostOrderRequest) -> PostOrderResponse = "PostOrder";
        unary fn cancel_order(CancelOrderRequest) -> CancelOrderResponse = "CancelOrder";
        unary fn get_order_state(GetOrderStateRequest) -> OrderState = "GetOrderState";
        unary fn get_orders(GetOrdersRequest) -> GetOrdersResponse = "GetOrders";
        unary fn replace_order(ReplaceOrderRequest) -> PostOrderResponse = "ReplaceOrder";
    }
}

grpc_client! {
    /// Stream of executed trades for the caller's orders.
    orders_stream_service_client::OrdersStreamServiceClient = "tinkoff.public.invest.api.contract.v1.OrdersStreamService" {
        server_streaming fn trades_stream(TradesStreamRequest) -> TradesStreamResponse = "TradesStream";
    }
}

grpc_client! {
    /// Historical and snapshot market data.
    market_data_service_client::MarketDataServiceClient = "tinkoff.public.invest.api.contract.v1.MarketDataService" {
        unary fn get_candles(GetCandlesRequest) -> GetCandlesResponse = "GetCandles";
        unary fn get_last_prices(GetLastPricesRequest) -> GetLastPricesResponse = "GetLastPrices";
        unary fn get_order_book(GetOrderBookRequest) -> GetOrderBookResponse = "GetOrderBook";
        unary fn get_trading_status(GetTradingStatusRequest) -> GetTradingStatusResponse = "GetTradingStatus";
        unary fn get_last_trades(GetLastTradesRequest) -> GetLastTradesResponse = "GetLastTrades";
    }
}

grpc_client! {
    /// Real-time market data subscriptions.
    market_data_stream_service_client::MarketDataStreamServiceClient = "tinkoff.public.invest.api.contract.v1.MarketDataStreamService" {
        streaming fn market_data_stream(MarketDataRequest) -> MarketDataResponse = "MarketDataStream";
        server_streaming fn market_data_server_side_stream(MarketDataServerSideStreamRequest) -> MarketDataResponse = "MarketDataServerSideStream";
    }
}

grpc_client! {
    /// Instrument reference data.
    instruments_service_client::InstrumentsServiceClient = "tinkoff.public.invest.api.contract.v1.InstrumentsService" {
        unary fn get_instrument_by(InstrumentRequest) -> InstrumentResponse = "GetInstrumentBy";
        unary fn find_instrument(FindInstrumentRequest) -> FindInstrumentResponse = "FindInstrument";
        unary fn trading_schedules(TradingSchedulesRequest) -> TradingSchedulesResponse = "TradingSchedules";
    }
}

grpc_client! {
    /// Portfolio, positions and operation history.
    operations_service_client::OperationsServiceClient = "tinkoff.public.invest.api.contract.v1.OperationsService" {
        unary fn get_portfolio(PortfolioRequest) -> PortfolioResponse = "GetPortfolio";
        unary fn get_positions(PositionsRequest) -> PositionsResponse = "GetPositions";
        unary fn get_operations(OperationsRequest) -> OperationsResponse = "GetOperations";
        unary fn get_withdraw_limits(WithdrawLimitsRequest) -> WithdrawLimitsResponse = "GetWithdrawLimits";
    }
}

grpc_client! {
    /// Portfolio and position update streams.
    operations_stream_service_client::OperationsStreamServiceClient = "tinkoff.public.invest.api.contract.v1.OperationsStreamService" {
        server_streaming fn portfolio_stream(PortfolioStreamRequest) -> PortfolioStreamResponse = "PortfolioStream";
        server_streaming fn positions_stream(PositionsStreamRequest) -> PositionsStreamResponse = "PositionsStream";
    }
}

grpc_client! {
    /// Accounts, margin and tariff information.
    users_service_client::UsersServiceClient = "tinkoff.public.invest.api.contract.v1.UsersService" {
        unary fn get_accounts(GetAccountsRequest) -> GetAccountsResponse = "GetAccounts";
        unary fn get_margin_attributes(GetMarginAttributesRequest) -> GetMarginAttributesResponse = "GetMarginAttributes";
        unary fn get_user_tariff(GetUserTariffRequest) -> GetUserTariffResponse = "GetUserTariff";
        unary fn get_info(GetInfoRequest) -> GetInfoResponse = "GetInfo";
    }
}

grpc_client! {
    /// Stop orders (take-profit, stop-loss, stop-limit).
    stop_orders_service_client::StopOrdersServiceClient = "tinkoff.public.invest.api.contract.v1.StopOrdersService" {
        unary fn post_stop_order(PostStopOrderRequest) -> PostStopOrderResponse = "PostStopOrder";
        unary fn get_stop_orders(GetStopOrdersRequest) -> GetStopOrdersResponse = "GetStopOrders";
        unary fn cancel_stop_order(CancelStopOrderRequest) -> CancelStopOrderResponse = "CancelStopOrder";
    }
}

grpc_client! {
    /// Sandbox accounts and sandbox trading.
    sandbox_service_client::SandboxServiceClient = "tinkoff.public.invest.api.contract.v1.SandboxService" {
        unary fn open_sandbox_account(OpenSandboxAccountRequest) -> OpenSandboxAccountResponse = "OpenSandboxAccount";
        unary fn get_sandbox_accounts(GetAccountsRequest) -> GetAccountsResponse = "GetSandboxAccounts";
        unary fn close_sandbox_account(CloseSandboxAccountRequest) -> CloseSandboxAccountResponse = "CloseSandboxAccount";
        unary fn post_sandbox_order(PostOrderRequest) -> PostOrderResponse = "PostSandboxOrder";
        unary fn get_sandbox_orders(GetOrdersRequest) -> GetOrdersResponse = "GetSandboxOrders";
        unary fn cancel_sandbox_order(CancelOrderRequest) -> CancelOrderResponse = "CancelSandboxOrder";
        unary fn get_sandbox_positions(PositionsRequest) -> PositionsResponse = "GetSandboxPositions";
        unary fn get_sandbox_portfolio(PortfolioRequest) -> PortfolioResponse = "GetSandboxPortfolio";
        unary fn sandbox_pay_in(SandboxPayInRequest) -> SandboxPayInResponse = "SandboxPayIn";
    }
}
