use axum::{Json, Router, routing::get};
use fleet_tracker_lib::{
    coordinate::PointPair,
    distance::{Proximity, ProximityEvaluator},
};
use tower_http::trace::TraceLayer;

use crate::{api_error::ApiError, json_body::JsonBody};

pub fn router() -> Router {
    Router::new()
        .route("/api/near", get(near).post(near))
        .layer(TraceLayer::new_for_http())
}

async fn near(JsonBody(body): JsonBody) -> Result<Json<Proximity>, ApiError> {
    let pair = PointPair::from_positions(body.get("positions"))?;
    let proximity = ProximityEvaluator::default().evaluate(&pair);

    tracing::debug!("Points are {:.1} m apart, near: {}", proximity.distance, proximity.near);

    Ok(Json(proximity))
}
