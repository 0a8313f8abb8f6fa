//! Binary entry point: wire the desk together and serve the console API.

use anyhow::Context;
use futures_desk::api::rest::{create_router, AppState};
use futures_desk::application::services::{OrderService, OrderServiceConfig};
use futures_desk::application::session::SessionManager;
use futures_desk::config::AppConfig;
use futures_desk::infrastructure::audit::file::FileAuditLog;
use futures_desk::infrastructure::audit::traits::AuditLog;
use futures_desk::infrastructure::exchange::binance::BinanceGatewayFactory;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::load().context("failed to load configuration")?;

    let audit = Arc::new(
        FileAuditLog::open(config.audit.log_path.clone())
            .await
            .context("failed to open audit log")?,
    );
    tracing::info!(path = %audit.path().display(), "audit log open");

    let factory = BinanceGatewayFactory::new(
        config.exchange.request_timeout_ms,
        config.exchange.recv_window_ms,
    );
    let sessions = Arc::new(SessionManager::new(Arc::new(factory)));
    let orders = Arc::new(OrderService::new(
        Arc::clone(&audit) as Arc<dyn AuditLog>,
        OrderServiceConfig {
            submit_timeout_ms: config.exchange.submit_timeout_ms,
        },
    ));

    let state = Arc::new(AppState {
        sessions,
        orders,
        audit: audit as Arc<dyn AuditLog>,
    });

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
