//! Sandbox Demo Binary
//!
//! Opens (or reuses) a sandbox account, funds it, buys and sells one lot of
//! an instrument and prints the positions in between.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sandbox-demo -- config.yaml TCSG
//! ```
//!
//! # Environment Variables
//!
//! - `TOKEN`: referenced from the config file as `${TOKEN}`
//! - `RUST_LOG`: Log level (default: info)

use std::time::Duration;

use invest_sdk::proto::{OrderExecutionReportStatus, PositionsResponse};
use invest_sdk::{
    Client, ClientError, PostOrderRequestShort, SandboxPayInRequestShort, close_position,
    create_uid, find_uid_by_ticker, last_price, load_config, message_from_status,
    security_balance, telemetry,
};
use rust_decimal::Decimal;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Ticker traded when none is given.
const DEFAULT_TICKER: &str = "TCSG";

/// Amount credited to the sandbox account.
const PAY_IN_RUB: i64 = 100_000;

/// Pause between the orders so the sandbox settles positions.
const SETTLE_DELAY: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let ticker = args.next().unwrap_or_else(|| DEFAULT_TICKER.to_string());

    let config = load_config(config_path.as_deref())?;
    tracing::info!(?config, "Loaded configuration");

    let shutdown_token = CancellationToken::new();
    tokio::spawn(await_shutdown(shutdown_token.clone()));

    let client = Client::connect(config, shutdown_token.clone()).await?;

    let outcome = run(&client, &ticker).await;
    client.stop();

    if let Err(e) = &outcome {
        report(e);
    }
    outcome.map_err(Into::into)
}

async fn run(client: &Client, ticker: &str) -> invest_sdk::Result<()> {
    let sandbox = client.sandbox();
    let account_id = sandbox.ensure_sandbox_account().await?;
    tracing::info!(%account_id, "Using sandbox account");

    let balance = sandbox
        .sandbox_pay_in(SandboxPayInRequestShort::new(&account_id, "RUB", PAY_IN_RUB))
        .await?
        .balance
        .map(|money| money.to_decimal())
        .unwrap_or(Decimal::ZERO);
    tracing::info!(%balance, "Funded sandbox account");

    let instruments = client.instruments();
    let Some(uid) = find_uid_by_ticker(&instruments, ticker).await? else {
        tracing::warn!(ticker, "Instrument not found");
        return Ok(());
    };
    tracing::info!(ticker, %uid, "Resolved instrument");

    if let Some(price) = last_price(&client.market_data(), &uid).await? {
        tracing::info!(ticker, price = %price.to_decimal(), "Last price");
    }

    let orders = client.orders();
    let operations = client.operations();

    let bought = orders
        .buy(PostOrderRequestShort::market(&uid, 1).with_order_id(create_uid()))
        .await?;
    print_status("buy", bought.execution_report_status());

    tokio::time::sleep(SETTLE_DELAY).await;
    print_positions(&operations.get_positions(&account_id).await?);

    let held = security_balance(&operations, &account_id, &uid).await?;
    tracing::info!(ticker, held, "Position after buy");

    if let Some(sold) = close_position(&orders, &uid, 1).await? {
        print_status("sell", sold.execution_report_status());
    }

    tokio::time::sleep(SETTLE_DELAY).await;
    print_positions(&operations.get_positions(&account_id).await?);

    Ok(())
}

fn print_status(side: &str, status: OrderExecutionReportStatus) {
    println!("{side}: {}", status.as_str_name());
}

fn print_positions(positions: &PositionsResponse) {
    for money in &positions.money {
        println!("money {}: {}", money.currency, money.to_decimal());
    }
    for security in &positions.securities {
        println!(
            "security {}: balance {} blocked {}",
            security.instrument_uid, security.balance, security.blocked
        );
    }
}

fn report(error: &ClientError) {
    match error.status() {
        Some(status) => tracing::error!(
            code = ?status.code(),
            tracking_id = %error.tracking_id().unwrap_or_default(),
            message = %message_from_status(status),
            "Call failed"
        ),
        None => tracing::error!(error = %error, "Call failed"),
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
#[allow(clippy::expect_used)]
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, cancelling calls");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, cancelling calls");
        }
    }

    shutdown_token.cancel();
}
