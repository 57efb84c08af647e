// Message definitions for package `tinkoff.public.invest.api.contract.v1`.
//
// Field tags mirror the upstream .proto files. Only the fields consumed by the
// service clients are declared; prost skips unknown fields while decoding.

// =============================================================================
// Common
// =============================================================================

/// Monetary amount with currency: `units + nano / 1e9`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MoneyValue {
    #[prost(string, tag = "1")]
    pub currency: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub units: i64,
    #[prost(int32, tag = "3")]
    pub nano: i32,
}

/// Fixed-point decimal: `units + nano / 1e9`.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Quotation {
    #[prost(int64, tag = "1")]
    pub units: i64,
    #[prost(int32, tag = "2")]
    pub nano: i32,
}

/// Keep-alive frame sent on every server stream.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Ping {
    #[prost(message, optional, tag = "1")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SecurityTradingStatus {
    Unspecified = 0,
    NotAvailableForTrading = 1,
    OpeningPeriod = 2,
    ClosingPeriod = 3,
    BreakInTrading = 4,
    NormalTrading = 5,
    ClosingAuction = 6,
    DarkPoolAuction = 7,
    DiscreteAuction = 8,
    OpeningAuctionPeriod = 9,
    TradingAtClosingAuctionPrice = 10,
    SessionAssigned = 11,
    SessionClose = 12,
    SessionOpen = 13,
    DealerNormalTrading = 14,
    DealerBreakInTrading = 15,
    DealerNotAvailableForTrading = 16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InstrumentType {
    Unspecified = 0,
    Bond = 1,
    Share = 2,
    Currency = 3,
    Etf = 4,
    Futures = 5,
    Sp = 6,
    Option = 7,
    ClearingCertificate = 8,
    Index = 9,
    Commodity = 10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PriceType {
    Unspecified = 0,
    Point = 1,
    Currency = 2,
}

// =============================================================================
// OrdersService
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderDirection {
    Unspecified = 0,
    Buy = 1,
    Sell = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderType {
    Unspecified = 0,
    Limit = 1,
    Market = 2,
    Bestprice = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderExecutionReportStatus {
    ExecutionReportStatusUnspecified = 0,
    ExecutionReportStatusFill = 1,
    ExecutionReportStatusRejected = 2,
    ExecutionReportStatusCancelled = 3,
    ExecutionReportStatusNew = 4,
    ExecutionReportStatusPartiallyfill = 5,
}

impl OrderExecutionReportStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::ExecutionReportStatusUnspecified => "EXECUTION_REPORT_STATUS_UNSPECIFIED",
            Self::ExecutionReportStatusFill => "EXECUTION_REPORT_STATUS_FILL",
            Self::ExecutionReportStatusRejected => "EXECUTION_REPORT_STATUS_REJECTED",
            Self::ExecutionReportStatusCancelled => "EXECUTION_REPORT_STATUS_CANCELLED",
            Self::ExecutionReportStatusNew => "EXECUTION_REPORT_STATUS_NEW",
            Self::ExecutionReportStatusPartiallyfill => "EXECUTION_REPORT_STATUS_PARTIALLYFILL",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "EXECUTION_REPORT_STATUS_UNSPECIFIED" => Some(Self::ExecutionReportStatusUnspecified),
            "EXECUTION_REPORT_STATUS_FILL" => Some(Self::ExecutionReportStatusFill),
            "EXECUTION_REPORT_STATUS_REJECTED" => Some(Self::ExecutionReportStatusRejected),
            "EXECUTION_REPORT_STATUS_CANCELLED" => Some(Self::ExecutionReportStatusCancelled),
            "EXECUTION_REPORT_STATUS_NEW" => Some(Self::ExecutionReportStatusNew),
            "EXECUTION_REPORT_STATUS_PARTIALLYFILL" => {
                Some(Self::ExecutionReportStatusPartiallyfill)
            }
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PostOrderRequest {
    #[prost(string, optional, tag = "1")]
    pub figi: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int64, tag = "2")]
    pub quantity: i64,
    #[prost(message, optional, tag = "3")]
    pub price: ::core::option::Option<Quotation>,
    #[prost(enumeration = "OrderDirection", tag = "4")]
    pub direction: i32,
    #[prost(string, tag = "5")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(enumeration = "OrderType", tag = "6")]
    pub order_type: i32,
    #[prost(string, tag = "7")]
    pub order_id: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub instrument_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PostOrderResponse {
    #[prost(string, tag = "1")]
    pub order_id: ::prost::alloc::string::String,
    #[prost(enumeration = "OrderExecutionReportStatus", tag = "2")]
    pub execution_report_status: i32,
    #[prost(int64, tag = "3")]
    pub lots_requested: i64,
    #[prost(int64, tag = "4")]
    pub lots_executed: i64,
    #[prost(message, optional, tag = "5")]
    pub initial_order_price: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "6")]
    pub executed_order_price: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "7")]
    pub total_order_amount: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "8")]
    pub initial_commission: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "9")]
    pub executed_commission: ::core::option::Option<MoneyValue>,
    #[prost(string, tag = "11")]
    pub figi: ::prost::alloc::string::String,
    #[prost(enumeration = "OrderDirection", tag = "12")]
    pub direction: i32,
    #[prost(message, optional, tag = "13")]
    pub initial_security_price: ::core::option::Option<MoneyValue>,
    #[prost(enumeration = "OrderType", tag = "14")]
    pub order_type: i32,
    #[prost(string, tag = "15")]
    pub message: ::prost::alloc::string::String,
    #[prost(string, tag = "17")]
    pub instrument_uid: ::prost::alloc::string::String,
    #[prost(string, tag = "20")]
    pub order_request_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelOrderRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub order_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelOrderResponse {
    #[prost(message, optional, tag = "1")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOrderStateRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub order_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOrdersRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOrdersResponse {
    #[prost(message, repeated, tag = "1")]
    pub orders: ::prost::alloc::vec::Vec<OrderState>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderState {
    #[prost(string, tag = "1")]
    pub order_id: ::prost::alloc::string::String,
    #[prost(enumeration = "OrderExecutionReportStatus", tag = "2")]
    pub execution_report_status: i32,
    #[prost(int64, tag = "3")]
    pub lots_requested: i64,
    #[prost(int64, tag = "4")]
    pub lots_executed: i64,
    #[prost(message, optional, tag = "5")]
    pub initial_order_price: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "6")]
    pub executed_order_price: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "7")]
    pub total_order_amount: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "8")]
    pub average_position_price: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "9")]
    pub initial_commission: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "10")]
    pub executed_commission: ::core::option::Option<MoneyValue>,
    #[prost(string, tag = "11")]
    pub figi: ::prost::alloc::string::String,
    #[prost(enumeration = "OrderDirection", tag = "12")]
    pub direction: i32,
    #[prost(message, optional, tag = "13")]
    pub initial_security_price: ::core::option::Option<MoneyValue>,
    #[prost(string, tag = "16")]
    pub currency: ::prost::alloc::string::String,
    #[prost(enumeration = "OrderType", tag = "17")]
    pub order_type: i32,
    #[prost(message, optional, tag = "18")]
    pub order_date: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "19")]
    pub instrument_uid: ::prost::alloc::string::String,
    #[prost(string, tag = "20")]
    pub order_request_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReplaceOrderRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub order_id: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub idempotency_key: ::prost::alloc::string::String,
    #[prost(int64, tag = "11")]
    pub quantity: i64,
    #[prost(message, optional, tag = "12")]
    pub price: ::core::option::Option<Quotation>,
    #[prost(enumeration = "PriceType", optional, tag = "13")]
    pub price_type: ::core::option::Option<i32>,
}

// =============================================================================
// OrdersStreamService
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradesStreamRequest {
    #[prost(string, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradesStreamResponse {
    #[prost(oneof = "trades_stream_response::Payload", tags = "1, 2")]
    pub payload: ::core::option::Option<trades_stream_response::Payload>,
}

/// Nested message and enum types in `TradesStreamResponse`.
pub mod trades_stream_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        #[prost(message, tag = "1")]
        OrderTrades(super::OrderTrades),
        #[prost(message, tag = "2")]
        Ping(super::Ping),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderTrades {
    #[prost(string, tag = "1")]
    pub order_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub created_at: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(enumeration = "OrderDirection", tag = "3")]
    pub direction: i32,
    #[prost(string, tag = "4")]
    pub figi: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "5")]
    pub trades: ::prost::alloc::vec::Vec<OrderTrade>,
    #[prost(string, tag = "6")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub instrument_uid: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderTrade {
    #[prost(message, optional, tag = "1")]
    pub date_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub price: ::core::option::Option<Quotation>,
    #[prost(int64, tag = "3")]
    pub quantity: i64,
    #[prost(string, tag = "4")]
    pub trade_id: ::prost::alloc::string::String,
}

// =============================================================================
// OperationsService
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationState {
    Unspecified = 0,
    Executed = 1,
    Canceled = 2,
    Progress = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationType {
    Unspecified = 0,
    Input = 1,
    BondTax = 2,
    OutputSecurities = 3,
    Overnight = 4,
    Tax = 5,
    BondRepaymentFull = 6,
    SellCard = 7,
    DividendTax = 8,
    Output = 9,
    BondRepayment = 10,
    TaxCorrection = 11,
    ServiceFee = 12,
    BenefitTax = 13,
    MarginFee = 14,
    Buy = 15,
    BuyCard = 16,
    InputSecurities = 17,
    SellMargin = 18,
    BrokerFee = 19,
    BuyMargin = 20,
    Dividend = 21,
    Sell = 22,
    Coupon = 23,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PortfolioRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PortfolioResponse {
    #[prost(message, optional, tag = "1")]
    pub total_amount_shares: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "2")]
    pub total_amount_bonds: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "3")]
    pub total_amount_etf: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "4")]
    pub total_amount_currencies: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "5")]
    pub total_amount_futures: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "6")]
    pub expected_yield: ::core::option::Option<Quotation>,
    #[prost(message, repeated, tag = "7")]
    pub positions: ::prost::alloc::vec::Vec<PortfolioPosition>,
    #[prost(string, tag = "8")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "11")]
    pub total_amount_portfolio: ::core::option::Option<MoneyValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PortfolioPosition {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub instrument_type: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub quantity: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "4")]
    pub average_position_price: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "5")]
    pub expected_yield: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "8")]
    pub current_price: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "10")]
    pub quantity_lots: ::core::option::Option<Quotation>,
    #[prost(bool, tag = "21")]
    pub blocked: bool,
    #[prost(string, tag = "24")]
    pub position_uid: ::prost::alloc::string::String,
    #[prost(string, tag = "25")]
    pub instrument_uid: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionsRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub money: ::prost::alloc::vec::Vec<MoneyValue>,
    #[prost(message, repeated, tag = "2")]
    pub blocked: ::prost::alloc::vec::Vec<MoneyValue>,
    #[prost(message, repeated, tag = "3")]
    pub securities: ::prost::alloc::vec::Vec<PositionsSecurities>,
    #[prost(bool, tag = "4")]
    pub limits_loading_in_progress: bool,
    #[prost(message, repeated, tag = "5")]
    pub futures: ::prost::alloc::vec::Vec<PositionsFutures>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionsSecurities {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub blocked: i64,
    #[prost(int64, tag = "3")]
    pub balance: i64,
    #[prost(string, tag = "4")]
    pub position_uid: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub instrument_uid: ::prost::alloc::string::String,
    #[prost(bool, tag = "11")]
    pub exchange_blocked: bool,
    #[prost(string, tag = "16")]
    pub instrument_type: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionsFutures {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub blocked: i64,
    #[prost(int64, tag = "3")]
    pub balance: i64,
    #[prost(string, tag = "4")]
    pub position_uid: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub instrument_uid: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationsRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub from: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub to: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(enumeration = "OperationState", tag = "4")]
    pub state: i32,
    #[prost(string, tag = "5")]
    pub figi: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub operations: ::prost::alloc::vec::Vec<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Operation {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub parent_operation_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub currency: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub payment: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "5")]
    pub price: ::core::option::Option<MoneyValue>,
    #[prost(enumeration = "OperationState", tag = "6")]
    pub state: i32,
    #[prost(int64, tag = "7")]
    pub quantity: i64,
    #[prost(int64, tag = "8")]
    pub quantity_rest: i64,
    #[prost(string, tag = "9")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub instrument_type: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "11")]
    pub date: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "12")]
    pub r#type: ::prost::alloc::string::String,
    #[prost(enumeration = "OperationType", tag = "13")]
    pub operation_type: i32,
    #[prost(string, tag = "18")]
    pub instrument_uid: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WithdrawLimitsRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WithdrawLimitsResponse {
    #[prost(message, repeated, tag = "1")]
    pub money: ::prost::alloc::vec::Vec<MoneyValue>,
    #[prost(message, repeated, tag = "2")]
    pub blocked: ::prost::alloc::vec::Vec<MoneyValue>,
    #[prost(message, repeated, tag = "3")]
    pub blocked_guarantee: ::prost::alloc::vec::Vec<MoneyValue>,
}

// =============================================================================
// OperationsStreamService
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PortfolioSubscriptionStatus {
    Unspecified = 0,
    Success = 1,
    AccountNotFound = 2,
    InternalError = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PositionsAccountSubscriptionStatus {
    Unspecified = 0,
    Success = 1,
    AccountNotFound = 2,
    InternalError = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PortfolioStreamRequest {
    #[prost(string, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PortfolioStreamResponse {
    #[prost(oneof = "portfolio_stream_response::Payload", tags = "1, 2, 3")]
    pub payload: ::core::option::Option<portfolio_stream_response::Payload>,
}

/// Nested message and enum types in `PortfolioStreamResponse`.
pub mod portfolio_stream_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        #[prost(message, tag = "1")]
        Subscriptions(super::PortfolioSubscriptionResult),
        #[prost(message, tag = "2")]
        Portfolio(super::PortfolioResponse),
        #[prost(message, tag = "3")]
        Ping(super::Ping),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PortfolioSubscriptionResult {
    #[prost(message, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<AccountSubscriptionStatus>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountSubscriptionStatus {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(enumeration = "PortfolioSubscriptionStatus", tag = "6")]
    pub subscription_status: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionsStreamRequest {
    #[prost(string, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionsStreamResponse {
    #[prost(oneof = "positions_stream_response::Payload", tags = "1, 2, 3")]
    pub payload: ::core::option::Option<positions_stream_response::Payload>,
}

/// Nested message and enum types in `PositionsStreamResponse`.
pub mod positions_stream_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        #[prost(message, tag = "1")]
        Subscriptions(super::PositionsSubscriptionResult),
        #[prost(message, tag = "2")]
        Position(super::PositionData),
        #[prost(message, tag = "3")]
        Ping(super::Ping),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionsSubscriptionResult {
    #[prost(message, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<PositionsSubscriptionStatus>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionsSubscriptionStatus {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(enumeration = "PositionsAccountSubscriptionStatus", tag = "6")]
    pub subscription_status: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionData {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub money: ::prost::alloc::vec::Vec<PositionsMoney>,
    #[prost(message, repeated, tag = "3")]
    pub securities: ::prost::alloc::vec::Vec<PositionsSecurities>,
    #[prost(message, repeated, tag = "4")]
    pub futures: ::prost::alloc::vec::Vec<PositionsFutures>,
    #[prost(message, optional, tag = "6")]
    pub date: ::core::option::Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionsMoney {
    #[prost(message, optional, tag = "1")]
    pub available_value: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "2")]
    pub blocked_value: ::core::option::Option<MoneyValue>,
}

// =============================================================================
// UsersService
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountType {
    Unspecified = 0,
    Tinkoff = 1,
    TinkoffIis = 2,
    InvestBox = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountStatus {
    Unspecified = 0,
    New = 1,
    Open = 2,
    Closed = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccessLevel {
    AccountAccessLevelUnspecified = 0,
    AccountAccessLevelFullAccess = 1,
    AccountAccessLevelReadOnly = 2,
    AccountAccessLevelNoAccess = 3,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetAccountsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountsResponse {
    #[prost(message, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(enumeration = "AccountType", tag = "2")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    #[prost(enumeration = "AccountStatus", tag = "4")]
    pub status: i32,
    #[prost(message, optional, tag = "5")]
    pub opened_date: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub closed_date: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(enumeration = "AccessLevel", tag = "7")]
    pub access_level: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMarginAttributesRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMarginAttributesResponse {
    #[prost(message, optional, tag = "1")]
    pub liquid_portfolio: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "2")]
    pub starting_margin: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "3")]
    pub minimal_margin: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "4")]
    pub funds_sufficiency_level: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "5")]
    pub amount_of_missing_funds: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "6")]
    pub corrected_margin: ::core::option::Option<MoneyValue>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetUserTariffRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserTariffResponse {
    #[prost(message, repeated, tag = "1")]
    pub unary_limits: ::prost::alloc::vec::Vec<UnaryLimit>,
    #[prost(message, repeated, tag = "2")]
    pub stream_limits: ::prost::alloc::vec::Vec<StreamLimit>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnaryLimit {
    #[prost(int32, tag = "1")]
    pub limit_per_minute: i32,
    #[prost(string, repeated, tag = "2")]
    pub methods: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StreamLimit {
    #[prost(int32, tag = "1")]
    pub limit: i32,
    #[prost(string, repeated, tag = "2")]
    pub streams: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(int32, tag = "3")]
    pub open: i32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetInfoRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetInfoResponse {
    #[prost(bool, tag = "1")]
    pub prem_status: bool,
    #[prost(bool, tag = "2")]
    pub qual_status: bool,
    #[prost(string, repeated, tag = "3")]
    pub qualified_for_work_with: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "4")]
    pub tariff: ::prost::alloc::string::String,
}

// =============================================================================
// InstrumentsService
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InstrumentIdType {
    Unspecified = 0,
    Figi = 1,
    Ticker = 2,
    Uid = 3,
    PositionUid = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FindInstrumentRequest {
    #[prost(string, tag = "1")]
    pub query: ::prost::alloc::string::String,
    #[prost(enumeration = "InstrumentType", optional, tag = "2")]
    pub instrument_kind: ::core::option::Option<i32>,
    #[prost(bool, optional, tag = "3")]
    pub api_trade_available_flag: ::core::option::Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FindInstrumentResponse {
    #[prost(message, repeated, tag = "1")]
    pub instruments: ::prost::alloc::vec::Vec<InstrumentShort>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstrumentShort {
    #[prost(string, tag = "1")]
    pub isin: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub ticker: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub class_code: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub instrument_type: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub uid: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub position_uid: ::prost::alloc::string::String,
    #[prost(enumeration = "InstrumentType", tag = "10")]
    pub instrument_kind: i32,
    #[prost(bool, tag = "11")]
    pub api_trade_available_flag: bool,
    #[prost(bool, tag = "12")]
    pub for_iis_flag: bool,
    #[prost(bool, tag = "28")]
    pub for_qual_investor_flag: bool,
    #[prost(bool, tag = "29")]
    pub weekend_flag: bool,
    #[prost(bool, tag = "30")]
    pub blocked_tca_flag: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstrumentRequest {
    #[prost(enumeration = "InstrumentIdType", tag = "1")]
    pub id_type: i32,
    #[prost(string, optional, tag = "2")]
    pub class_code: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, tag = "3")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstrumentResponse {
    #[prost(message, optional, tag = "1")]
    pub instrument: ::core::option::Option<Instrument>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Instrument {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub ticker: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub class_code: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub isin: ::prost::alloc::string::String,
    #[prost(int32, tag = "5")]
    pub lot: i32,
    #[prost(string, tag = "6")]
    pub currency: ::prost::alloc::string::String,
    #[prost(string, tag = "14")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "15")]
    pub exchange: ::prost::alloc::string::String,
    #[prost(string, tag = "18")]
    pub instrument_type: ::prost::alloc::string::String,
    #[prost(enumeration = "SecurityTradingStatus", tag = "19")]
    pub trading_status: i32,
    #[prost(bool, tag = "21")]
    pub buy_available_flag: bool,
    #[prost(bool, tag = "22")]
    pub sell_available_flag: bool,
    #[prost(message, optional, tag = "23")]
    pub min_price_increment: ::core::option::Option<Quotation>,
    #[prost(bool, tag = "24")]
    pub api_trade_available_flag: bool,
    #[prost(string, tag = "25")]
    pub uid: ::prost::alloc::string::String,
    #[prost(string, tag = "27")]
    pub position_uid: ::prost::alloc::string::String,
    #[prost(enumeration = "InstrumentType", tag = "40")]
    pub instrument_kind: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradingSchedulesRequest {
    #[prost(string, optional, tag = "1")]
    pub exchange: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "2")]
    pub from: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub to: ::core::option::Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradingSchedulesResponse {
    #[prost(message, repeated, tag = "1")]
    pub exchanges: ::prost::alloc::vec::Vec<TradingSchedule>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradingSchedule {
    #[prost(string, tag = "1")]
    pub exchange: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub days: ::prost::alloc::vec::Vec<TradingDay>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradingDay {
    #[prost(message, optional, tag = "1")]
    pub date: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "2")]
    pub is_trading_day: bool,
    #[prost(message, optional, tag = "3")]
    pub start_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "4")]
    pub end_time: ::core::option::Option<::prost_types::Timestamp>,
}

// =============================================================================
// MarketDataService
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CandleInterval {
    Unspecified = 0,
    CandleInterval1Min = 1,
    CandleInterval5Min = 2,
    CandleInterval15Min = 3,
    Hour = 4,
    Day = 5,
    CandleInterval2Min = 6,
    CandleInterval3Min = 7,
    CandleInterval10Min = 8,
    CandleInterval30Min = 9,
    CandleInterval2Hour = 10,
    CandleInterval4Hour = 11,
    Week = 12,
    Month = 13,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TradeDirection {
    Unspecified = 0,
    Buy = 1,
    Sell = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCandlesRequest {
    #[prost(string, optional, tag = "1")]
    pub figi: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "2")]
    pub from: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub to: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(enumeration = "CandleInterval", tag = "4")]
    pub interval: i32,
    #[prost(string, optional, tag = "5")]
    pub instrument_id: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCandlesResponse {
    #[prost(message, repeated, tag = "1")]
    pub candles: ::prost::alloc::vec::Vec<HistoricCandle>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HistoricCandle {
    #[prost(message, optional, tag = "1")]
    pub open: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "2")]
    pub high: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "3")]
    pub low: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "4")]
    pub close: ::core::option::Option<Quotation>,
    #[prost(int64, tag = "5")]
    pub volume: i64,
    #[prost(message, optional, tag = "6")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "7")]
    pub is_complete: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLastPricesRequest {
    #[prost(string, repeated, tag = "1")]
    pub figi: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "2")]
    pub instrument_id: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLastPricesResponse {
    #[prost(message, repeated, tag = "1")]
    pub last_prices: ::prost::alloc::vec::Vec<LastPrice>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LastPrice {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub price: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "3")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "11")]
    pub instrument_uid: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOrderBookRequest {
    #[prost(string, optional, tag = "1")]
    pub figi: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int32, tag = "2")]
    pub depth: i32,
    #[prost(string, optional, tag = "3")]
    pub instrument_id: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOrderBookResponse {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub depth: i32,
    #[prost(message, repeated, tag = "3")]
    pub bids: ::prost::alloc::vec::Vec<Order>,
    #[prost(message, repeated, tag = "4")]
    pub asks: ::prost::alloc::vec::Vec<Order>,
    #[prost(message, optional, tag = "5")]
    pub last_price: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "6")]
    pub close_price: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "7")]
    pub limit_up: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "8")]
    pub limit_down: ::core::option::Option<Quotation>,
    #[prost(string, tag = "9")]
    pub instrument_uid: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "21")]
    pub last_price_ts: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "22")]
    pub close_price_ts: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "23")]
    pub orderbook_ts: ::core::option::Option<::prost_types::Timestamp>,
}

/// One order book level.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Order {
    #[prost(message, optional, tag = "1")]
    pub price: ::core::option::Option<Quotation>,
    #[prost(int64, tag = "2")]
    pub quantity: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTradingStatusRequest {
    #[prost(string, optional, tag = "1")]
    pub figi: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub instrument_id: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTradingStatusResponse {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(enumeration = "SecurityTradingStatus", tag = "2")]
    pub trading_status: i32,
    #[prost(bool, tag = "3")]
    pub limit_order_available_flag: bool,
    #[prost(bool, tag = "4")]
    pub market_order_available_flag: bool,
    #[prost(bool, tag = "5")]
    pub api_trade_available_flag: bool,
    #[prost(string, tag = "6")]
    pub instrument_uid: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLastTradesRequest {
    #[prost(string, optional, tag = "1")]
    pub figi: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "2")]
    pub from: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub to: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, optional, tag = "4")]
    pub instrument_id: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLastTradesResponse {
    #[prost(message, repeated, tag = "1")]
    pub trades: ::prost::alloc::vec::Vec<Trade>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Trade {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(enumeration = "TradeDirection", tag = "2")]
    pub direction: i32,
    #[prost(message, optional, tag = "3")]
    pub price: ::core::option::Option<Quotation>,
    #[prost(int64, tag = "4")]
    pub quantity: i64,
    #[prost(message, optional, tag = "5")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "6")]
    pub instrument_uid: ::prost::alloc::string::String,
}

// =============================================================================
// MarketDataStreamService
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SubscriptionAction {
    Unspecified = 0,
    Subscribe = 1,
    Unsubscribe = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SubscriptionInterval {
    Unspecified = 0,
    OneMinute = 1,
    FiveMinutes = 2,
    FifteenMinutes = 3,
    OneHour = 4,
    OneDay = 5,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketDataRequest {
    #[prost(oneof = "market_data_request::Payload", tags = "1, 2, 3, 4, 5, 6")]
    pub payload: ::core::option::Option<market_data_request::Payload>,
}

/// Nested message and enum types in `MarketDataRequest`.
pub mod market_data_request {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        #[prost(message, tag = "1")]
        SubscribeCandlesRequest(super::SubscribeCandlesRequest),
        #[prost(message, tag = "2")]
        SubscribeOrderBookRequest(super::SubscribeOrderBookRequest),
        #[prost(message, tag = "3")]
        SubscribeTradesRequest(super::SubscribeTradesRequest),
        #[prost(message, tag = "4")]
        SubscribeInfoRequest(super::SubscribeInfoRequest),
        #[prost(message, tag = "5")]
        SubscribeLastPriceRequest(super::SubscribeLastPriceRequest),
        #[prost(message, tag = "6")]
        GetMySubscriptions(super::GetMySubscriptions),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketDataServerSideStreamRequest {
    #[prost(message, optional, tag = "1")]
    pub subscribe_candles_request: ::core::option::Option<SubscribeCandlesRequest>,
    #[prost(message, optional, tag = "2")]
    pub subscribe_order_book_request: ::core::option::Option<SubscribeOrderBookRequest>,
    #[prost(message, optional, tag = "3")]
    pub subscribe_trades_request: ::core::option::Option<SubscribeTradesRequest>,
    #[prost(message, optional, tag = "4")]
    pub subscribe_info_request: ::core::option::Option<SubscribeInfoRequest>,
    #[prost(message, optional, tag = "5")]
    pub subscribe_last_price_request: ::core::option::Option<SubscribeLastPriceRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeCandlesRequest {
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    #[prost(message, repeated, tag = "2")]
    pub instruments: ::prost::alloc::vec::Vec<CandleInstrument>,
    #[prost(bool, tag = "3")]
    pub waiting_close: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CandleInstrument {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(enumeration = "SubscriptionInterval", tag = "2")]
    pub interval: i32,
    #[prost(string, tag = "3")]
    pub instrument_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeOrderBookRequest {
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    #[prost(message, repeated, tag = "2")]
    pub instruments: ::prost::alloc::vec::Vec<OrderBookInstrument>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderBookInstrument {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub depth: i32,
    #[prost(string, tag = "3")]
    pub instrument_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeTradesRequest {
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    #[prost(message, repeated, tag = "2")]
    pub instruments: ::prost::alloc::vec::Vec<TradeInstrument>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradeInstrument {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub instrument_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeInfoRequest {
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    #[prost(message, repeated, tag = "2")]
    pub instruments: ::prost::alloc::vec::Vec<InfoInstrument>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InfoInstrument {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub instrument_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeLastPriceRequest {
    #[prost(enumeration = "SubscriptionAction", tag = "1")]
    pub subscription_action: i32,
    #[prost(message, repeated, tag = "2")]
    pub instruments: ::prost::alloc::vec::Vec<LastPriceInstrument>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LastPriceInstrument {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub instrument_id: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetMySubscriptions {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MarketDataResponse {
    #[prost(
        oneof = "market_data_response::Payload",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11"
    )]
    pub payload: ::core::option::Option<market_data_response::Payload>,
}

/// Nested message and enum types in `MarketDataResponse`.
pub mod market_data_response {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        #[prost(message, tag = "1")]
        SubscribeCandlesResponse(super::SubscribeCandlesResponse),
        #[prost(message, tag = "2")]
        SubscribeOrderBookResponse(super::SubscribeOrderBookResponse),
        #[prost(message, tag = "3")]
        SubscribeTradesResponse(super::SubscribeTradesResponse),
        #[prost(message, tag = "4")]
        SubscribeInfoResponse(super::SubscribeInfoResponse),
        #[prost(message, tag = "5")]
        Candle(super::Candle),
        #[prost(message, tag = "6")]
        Trade(super::Trade),
        #[prost(message, tag = "7")]
        Orderbook(super::OrderBook),
        #[prost(message, tag = "8")]
        TradingStatus(super::TradingStatus),
        #[prost(message, tag = "9")]
        Ping(super::Ping),
        #[prost(message, tag = "10")]
        SubscribeLastPriceResponse(super::SubscribeLastPriceResponse),
        #[prost(message, tag = "11")]
        LastPrice(super::LastPrice),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeCandlesResponse {
    #[prost(string, tag = "1")]
    pub tracking_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeOrderBookResponse {
    #[prost(string, tag = "1")]
    pub tracking_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeTradesResponse {
    #[prost(string, tag = "1")]
    pub tracking_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeInfoResponse {
    #[prost(string, tag = "1")]
    pub tracking_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubscribeLastPriceResponse {
    #[prost(string, tag = "1")]
    pub tracking_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Candle {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(enumeration = "SubscriptionInterval", tag = "2")]
    pub interval: i32,
    #[prost(message, optional, tag = "3")]
    pub open: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "4")]
    pub high: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "5")]
    pub low: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "6")]
    pub close: ::core::option::Option<Quotation>,
    #[prost(int64, tag = "7")]
    pub volume: i64,
    #[prost(message, optional, tag = "8")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "9")]
    pub last_trade_ts: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "10")]
    pub instrument_uid: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderBook {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub depth: i32,
    #[prost(bool, tag = "3")]
    pub is_consistent: bool,
    #[prost(message, repeated, tag = "4")]
    pub bids: ::prost::alloc::vec::Vec<Order>,
    #[prost(message, repeated, tag = "5")]
    pub asks: ::prost::alloc::vec::Vec<Order>,
    #[prost(message, optional, tag = "6")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "7")]
    pub limit_up: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "8")]
    pub limit_down: ::core::option::Option<Quotation>,
    #[prost(string, tag = "9")]
    pub instrument_uid: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TradingStatus {
    #[prost(string, tag = "1")]
    pub figi: ::prost::alloc::string::String,
    #[prost(enumeration = "SecurityTradingStatus", tag = "2")]
    pub trading_status: i32,
    #[prost(message, optional, tag = "3")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "4")]
    pub limit_order_available_flag: bool,
    #[prost(bool, tag = "5")]
    pub market_order_available_flag: bool,
    #[prost(string, tag = "6")]
    pub instrument_uid: ::prost::alloc::string::String,
}

// =============================================================================
// StopOrdersService
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StopOrderDirection {
    Unspecified = 0,
    Buy = 1,
    Sell = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StopOrderExpirationType {
    Unspecified = 0,
    GoodTillCancel = 1,
    GoodTillDate = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StopOrderType {
    Unspecified = 0,
    TakeProfit = 1,
    StopLoss = 2,
    StopLimit = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PostStopOrderRequest {
    #[prost(string, optional, tag = "1")]
    pub figi: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(int64, tag = "2")]
    pub quantity: i64,
    #[prost(message, optional, tag = "3")]
    pub price: ::core::option::Option<Quotation>,
    #[prost(message, optional, tag = "4")]
    pub stop_price: ::core::option::Option<Quotation>,
    #[prost(enumeration = "StopOrderDirection", tag = "5")]
    pub direction: i32,
    #[prost(string, tag = "6")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(enumeration = "StopOrderExpirationType", tag = "7")]
    pub expiration_type: i32,
    #[prost(enumeration = "StopOrderType", tag = "8")]
    pub stop_order_type: i32,
    #[prost(message, optional, tag = "9")]
    pub expire_date: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "10")]
    pub instrument_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PostStopOrderResponse {
    #[prost(string, tag = "1")]
    pub stop_order_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetStopOrdersRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetStopOrdersResponse {
    #[prost(message, repeated, tag = "1")]
    pub stop_orders: ::prost::alloc::vec::Vec<StopOrder>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StopOrder {
    #[prost(string, tag = "1")]
    pub stop_order_id: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub lots_requested: i64,
    #[prost(string, tag = "3")]
    pub figi: ::prost::alloc::string::String,
    #[prost(enumeration = "StopOrderDirection", tag = "4")]
    pub direction: i32,
    #[prost(string, tag = "5")]
    pub currency: ::prost::alloc::string::String,
    #[prost(enumeration = "StopOrderType", tag = "6")]
    pub order_type: i32,
    #[prost(message, optional, tag = "7")]
    pub create_date: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "8")]
    pub activation_date_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "9")]
    pub expiration_time: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "10")]
    pub price: ::core::option::Option<MoneyValue>,
    #[prost(message, optional, tag = "11")]
    pub stop_price: ::core::option::Option<MoneyValue>,
    #[prost(string, tag = "12")]
    pub instrument_uid: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelStopOrderRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub stop_order_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CancelStopOrderResponse {
    #[prost(message, optional, tag = "1")]
    pub time: ::core::option::Option<::prost_types::Timestamp>,
}

// =============================================================================
// SandboxService
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenSandboxAccountRequest {
    #[prost(string, optional, tag = "1")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenSandboxAccountResponse {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CloseSandboxAccountRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct CloseSandboxAccountResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SandboxPayInRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub amount: ::core::option::Option<MoneyValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SandboxPayInResponse {
    #[prost(message, optional, tag = "1")]
    pub balance: ::core::option::Option<MoneyValue>,
}
