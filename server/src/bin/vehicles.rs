use std::sync::Arc;

use anyhow::Context;
use fleet_tracker_data_management::VehicleRegistry;
use server::{
    config::{ServiceConfig, VEHICLE_DEFAULT_PORT, VEHICLE_SERVICE},
    logging,
    server_state::ServerState,
    vehicle_endpoint,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::load(VEHICLE_SERVICE, VEHICLE_DEFAULT_PORT).context("Failed to load configuration")?;
    logging::init(config.log_file()).context("Failed to set up logging")?;

    tracing::info!("Starting vehicle service...");

    let registry = if config.seed_vehicles() {
        VehicleRegistry::seeded()?
    } else {
        VehicleRegistry::default()
    };
    tracing::debug!("Registry holds {} vehicles", registry.list_all().await.len());

    let server_state = Arc::new(ServerState::new(registry));

    let listener = TcpListener::bind(config.address())
        .await
        .with_context(|| format!("Failed to bind {}", config.address()))?;
    tracing::info!("Listen on port ...{}", listener.local_addr()?.port());

    axum::serve(listener, vehicle_endpoint::router(server_state)).await?;

    Ok(())
}
