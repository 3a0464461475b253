//! Routes Mission
//!
//! Lectures et avancement de statut: tout utilisateur authentifié.
//! Création, update, assignation et suppression: admin ou régulateur.

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::mission_controller::MissionController;
use crate::dto::common::{ApiResponse, Pagination};
use crate::dto::mission_dto::{
    AssignMissionRequest, CreateMissionRequest, UpdateMissionRequest,
    UpdateMissionStatusRequest,
};
use crate::middleware::auth_middleware::{require_auth, require_dispatcher};
use crate::models::mission::Mission;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_mission_router(state: AppState) -> Router {
    let reads = Router::new()
        .route("/", get(list_missions))
        .route("/active", get(list_active_missions))
        .route("/status/:status", get(list_missions_by_status))
        .route("/:id", get(get_mission))
        .route("/:id/status", put(update_mission_status))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let writes = Router::new()
        .route("/", post(create_mission))
        .route("/:id", put(update_mission))
        .route("/:id/assign", post(assign_mission))
        .route("/:id", delete(delete_mission))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_dispatcher,
        ));

    reads.merge(writes).with_state(state)
}

async fn list_missions(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Mission>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let missions = controller
        .list(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(missions))
}

async fn list_active_missions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Mission>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let missions = controller.list_active().await?;
    Ok(Json(missions))
}

async fn list_missions_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Mission>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let missions = controller.list_by_status(&status).await?;
    Ok(Json(missions))
}

async fn get_mission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Mission>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let mission = controller.get_by_id(id).await?;
    Ok(Json(mission))
}

async fn create_mission(
    State(state): State<AppState>,
    Json(request): Json<CreateMissionRequest>,
) -> Result<Json<ApiResponse<Mission>>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let mission = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        mission,
        "Mission créée avec succès".to_string(),
    )))
}

async fn update_mission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMissionRequest>,
) -> Result<Json<Mission>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let mission = controller.update(id, request).await?;
    Ok(Json(mission))
}

async fn assign_mission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignMissionRequest>,
) -> Result<Json<Mission>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let mission = controller.assign(id, request).await?;
    Ok(Json(mission))
}

async fn update_mission_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMissionStatusRequest>,
) -> Result<Json<Mission>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    let mission = controller.update_status(id, request).await?;
    Ok(Json(mission))
}

async fn delete_mission(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MissionController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Mission supprimée avec succès"
    })))
}
