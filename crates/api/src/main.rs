//! Linkup - availability matching service
//!
//! Main entry point for the HTTP process.

use std::sync::Arc;

use anyhow::Context;
use linkup_api::{init_tracing, router, AppContext};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before tracing so RUST_LOG from the file applies
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => debug!(error = %e, "no .env file loaded"),
    }

    let config = linkup_infra::config::load().context("loading configuration")?;
    let bind_addr = config.server.bind_addr.clone();
    let context = Arc::new(AppContext::new(config).context("building application context")?);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!(%bind_addr, "linkup listening");

    axum::serve(listener, router(context)).with_graceful_shutdown(shutdown_signal()).await?;

    info!("linkup stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
