//! Routes Ambulance
//!
//! Lectures et rapports de position/statut: tout utilisateur
//! authentifié. Création, update général et suppression: admin ou
//! régulateur.

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::ambulance_controller::AmbulanceController;
use crate::dto::ambulance_dto::{
    CreateAmbulanceRequest, UpdateAmbulanceRequest, UpdateAmbulanceStatusRequest,
    UpdateLocationRequest,
};
use crate::dto::common::{ApiResponse, Pagination};
use crate::middleware::auth_middleware::{require_auth, require_dispatcher};
use crate::models::ambulance::Ambulance;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ambulance_router(state: AppState) -> Router {
    let reads = Router::new()
        .route("/", get(list_ambulances))
        .route("/available", get(list_available_ambulances))
        .route("/:id", get(get_ambulance))
        .route("/:id/location", put(update_ambulance_location))
        .route("/:id/status", put(update_ambulance_status))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let writes = Router::new()
        .route("/", post(create_ambulance))
        .route("/:id", put(update_ambulance))
        .route("/:id", delete(delete_ambulance))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_dispatcher,
        ));

    reads.merge(writes).with_state(state)
}

async fn list_ambulances(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Ambulance>>, AppError> {
    let controller = AmbulanceController::new(state.pool.clone());
    let ambulances = controller
        .list(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(ambulances))
}

async fn list_available_ambulances(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ambulance>>, AppError> {
    let controller = AmbulanceController::new(state.pool.clone());
    let ambulances = controller.list_available().await?;
    Ok(Json(ambulances))
}

async fn get_ambulance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ambulance>, AppError> {
    let controller = AmbulanceController::new(state.pool.clone());
    let ambulance = controller.get_by_id(id).await?;
    Ok(Json(ambulance))
}

async fn create_ambulance(
    State(state): State<AppState>,
    Json(request): Json<CreateAmbulanceRequest>,
) -> Result<Json<ApiResponse<Ambulance>>, AppError> {
    let controller = AmbulanceController::new(state.pool.clone());
    let ambulance = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        ambulance,
        "Ambulance créée avec succès".to_string(),
    )))
}

async fn update_ambulance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAmbulanceRequest>,
) -> Result<Json<Ambulance>, AppError> {
    let controller = AmbulanceController::new(state.pool.clone());
    let ambulance = controller.update(id, request).await?;
    Ok(Json(ambulance))
}

async fn update_ambulance_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLocationRequest>,
) -> Result<Json<Ambulance>, AppError> {
    let controller = AmbulanceController::new(state.pool.clone());
    let ambulance = controller.update_location(id, request).await?;
    Ok(Json(ambulance))
}

async fn update_ambulance_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAmbulanceStatusRequest>,
) -> Result<Json<Ambulance>, AppError> {
    let controller = AmbulanceController::new(state.pool.clone());
    let ambulance = controller.update_status(id, request).await?;
    Ok(Json(ambulance))
}

async fn delete_ambulance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AmbulanceController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Ambulance supprimée avec succès"
    })))
}
