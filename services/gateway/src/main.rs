mod config;
mod error;
mod handlers;
mod logging;
mod models;
mod router;
mod state;

use std::sync::Arc;

use config::GatewayConfig;
use matching_engine::MatchingEngine;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = GatewayConfig::from_env()?;
    config.logging.init();

    tracing::info!(
        log_format = %config.logging.format,
        default_trade_limit = config.trades.default_limit,
        max_trade_limit = config.trades.max_limit,
        "Starting prediction market gateway"
    );

    let state = AppState::new(Arc::new(MatchingEngine::new()), config.trades);
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
