//! Runs a Cinder server until Ctrl-C.
use std::path::Path;

use anyhow::Context;
use cinder::CinderServer;
use cinder::config::{CONFIG_PATH, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cinder::logger::init()?;

    let config = ServerConfig::load_or_create(Path::new(CONFIG_PATH))
        .with_context(|| format!("failed to load {CONFIG_PATH}"))?;
    let server = CinderServer::new(config).context("failed to build worlds")?;
    server.start();

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("Shutting down");
    server.stop();
    server.await_tasks().await;
    tracing::info!("Server stopped");
    Ok(())
}
