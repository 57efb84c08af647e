//! Protocol definitions for the invest API contract.
//!
//! Messages and client stubs for package
//! `tinkoff.public.invest.api.contract.v1`, checked into the tree so builds
//! need neither `protoc` nor `buf`.

/// Fully-qualified protobuf package of every service in this module.
pub const PACKAGE: &str = "tinkoff.public.invest.api.contract.v1";

#[allow(
    dead_code,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
mod messages;

#[allow(
    dead_code,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
mod services;

pub use messages::*;
pub use services::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_report_status_wire_names() {
        let fill = PostOrderResponse {
            execution_report_status: 1,
            ..Default::default()
        };
        assert_eq!(
            fill.execution_report_status().as_str_name(),
            "EXECUTION_REPORT_STATUS_FILL"
        );
        assert_eq!(
            OrderExecutionReportStatus::from_str_name("EXECUTION_REPORT_STATUS_PARTIALLYFILL"),
            Some(OrderExecutionReportStatus::ExecutionReportStatusPartiallyfill)
        );
        assert!(OrderExecutionReportStatus::from_str_name("FILL").is_none());
    }
}
