use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use fleet_tracker_lib::vehicle::{Vehicle, VehicleId};
use tower_http::trace::TraceLayer;

use crate::{api_error::ApiError, json_body::JsonBody, server_state::ServerState};

pub fn router(server_state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/api/vehicles/{id}", get(get_vehicle).put(update_vehicle))
        .route("/api/vehicles/{id}/notify", post(notify_vehicle))
        .route("/api/delete/{id}", delete(delete_vehicle))
        .with_state(server_state)
        .layer(TraceLayer::new_for_http())
}

/// Reads the leading integer of a path id and ignores whatever follows it, so
/// `1abc` and `1.5` both name vehicle 1. A `0x` prefix switches to hex. Ids
/// with no leading digits, negative ids and ids that overflow can never match
/// a vehicle.
fn parse_id(id: &str) -> Result<VehicleId, ApiError> {
    let id = id.trim_start();
    let id = id.strip_prefix('+').unwrap_or(id);
    let (digits, radix) = match id.strip_prefix("0x").or_else(|| id.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (id, 10),
    };
    let end = digits.find(|c: char| !c.is_digit(radix)).unwrap_or(digits.len());
    VehicleId::from_str_radix(&digits[..end], radix).map_err(|_| ApiError::NotFound)
}

async fn list_vehicles(State(state): State<Arc<ServerState>>) -> Json<Vec<Vehicle>> {
    Json(state.registry.list_all().await)
}

async fn get_vehicle(State(state): State<Arc<ServerState>>, Path(id): Path<String>) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = state.registry.get_by_id(parse_id(&id)?).await?;
    Ok(Json(vehicle))
}

async fn create_vehicle(State(state): State<Arc<ServerState>>, JsonBody(body): JsonBody) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = state.registry.create(&body).await?;
    Ok(Json(vehicle))
}

async fn update_vehicle(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = state.registry.update_license(parse_id(&id)?, &body).await?;
    Ok(Json(vehicle))
}

async fn delete_vehicle(State(state): State<Arc<ServerState>>, Path(id): Path<String>) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = state.registry.delete(parse_id(&id)?).await?;
    Ok(Json(vehicle))
}

async fn notify_vehicle(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = state.registry.notify(parse_id(&id)?, &body).await?;
    Ok(Json(vehicle))
}
