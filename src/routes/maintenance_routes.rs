//! Routes Maintenance

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::common::{ApiResponse, Pagination};
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::middleware::auth_middleware::{require_auth, require_dispatcher};
use crate::models::maintenance::MaintenanceRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router(state: AppState) -> Router {
    let reads = Router::new()
        .route("/", get(list_maintenance))
        .route("/ambulance/:id", get(list_maintenance_by_ambulance))
        .route("/:id", get(get_maintenance))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let writes = Router::new()
        .route("/", post(create_maintenance))
        .route("/:id", put(update_maintenance))
        .route("/:id", delete(delete_maintenance))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_dispatcher,
        ));

    reads.merge(writes).with_state(state)
}

async fn list_maintenance(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let records = controller
        .list(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(records))
}

async fn list_maintenance_by_ambulance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let records = controller.list_by_ambulance(id).await?;
    Ok(Json(records))
}

async fn get_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaintenanceRecord>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let record = controller.get_by_id(id).await?;
    Ok(Json(record))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceRecord>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let record = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        record,
        "Intervention de maintenance créée avec succès".to_string(),
    )))
}

async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceRequest>,
) -> Result<Json<MaintenanceRecord>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let record = controller.update(id, request).await?;
    Ok(Json(record))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Intervention de maintenance supprimée avec succès"
    })))
}
