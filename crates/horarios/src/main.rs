//! Service entry point: loads the class catalog, then serves the lookup API.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use horarios::catalog::Catalog;
use horarios::server;
use horarios::types::AppState;

const DEFAULT_DATA_FILE: &str = "data/turmas.json";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let data_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()));
    let bind_addr = args.next().unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    // A failed load is already logged inside the catalog; the service still
    // starts with zero entries.
    let catalog = Catalog::load(&data_path);
    let state = Arc::new(AppState { catalog });

    let app = server::create_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!("Listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl-c: {e}");
    }
    info!("Shutting down");
}
