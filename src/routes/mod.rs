//! Routers Axum de l'API

use axum::{response::Json, routing::get, Router};
use serde_json::json;

pub mod ambulance_routes;
pub mod auth_routes;
pub mod hospital_routes;
pub mod maintenance_routes;
pub mod mission_routes;
pub mod personnel_routes;
pub mod user_routes;

/// Endpoint de liveness (non authentifié)
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "ambulance-dispatch",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Router du health check
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health))
}
