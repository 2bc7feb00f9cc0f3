use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use zonedesk::config::load_proxy_config;
use zonedesk::proxy::{proxy_router, ProxyState, PROXY_ROUTE};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("proxy.yaml"));
    let config = load_proxy_config(&config_file)?;

    let app = proxy_router(ProxyState::new(config.upstream.clone()));
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    info!(
        "Forwarding {} to {} on {}",
        PROXY_ROUTE, config.upstream, config.listen
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Proxy server stopped unexpectedly")
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Signal received, shutting down");
}
