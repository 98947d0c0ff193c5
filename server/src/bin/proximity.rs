use anyhow::Context;
use server::{
    config::{PROXIMITY_DEFAULT_PORT, PROXIMITY_SERVICE, ServiceConfig},
    logging, proximity_endpoint,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::load(PROXIMITY_SERVICE, PROXIMITY_DEFAULT_PORT).context("Failed to load configuration")?;
    logging::init(config.log_file()).context("Failed to set up logging")?;

    tracing::info!("Starting proximity service...");

    let listener = TcpListener::bind(config.address())
        .await
        .with_context(|| format!("Failed to bind {}", config.address()))?;
    tracing::info!("Listen on port ...{}", listener.local_addr()?.port());

    axum::serve(listener, proximity_endpoint::router()).await?;

    Ok(())
}
