//! Routes Personnel

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::personnel_controller::PersonnelController;
use crate::dto::common::{ApiResponse, Pagination};
use crate::dto::personnel_dto::{CreatePersonnelRequest, UpdatePersonnelRequest};
use crate::middleware::auth_middleware::{require_auth, require_dispatcher};
use crate::models::personnel::Personnel;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_personnel_router(state: AppState) -> Router {
    let reads = Router::new()
        .route("/", get(list_personnel))
        .route("/available", get(list_available_personnel))
        .route("/:id", get(get_personnel))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let writes = Router::new()
        .route("/", post(create_personnel))
        .route("/:id", put(update_personnel))
        .route("/:id", delete(delete_personnel))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_dispatcher,
        ));

    reads.merge(writes).with_state(state)
}

async fn list_personnel(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Personnel>>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    let personnel = controller
        .list(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(personnel))
}

async fn list_available_personnel(
    State(state): State<AppState>,
) -> Result<Json<Vec<Personnel>>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    let personnel = controller.list_available().await?;
    Ok(Json(personnel))
}

async fn get_personnel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Personnel>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    let personnel = controller.get_by_id(id).await?;
    Ok(Json(personnel))
}

async fn create_personnel(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonnelRequest>,
) -> Result<Json<ApiResponse<Personnel>>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    let personnel = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        personnel,
        "Membre du personnel créé avec succès".to_string(),
    )))
}

async fn update_personnel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePersonnelRequest>,
) -> Result<Json<Personnel>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    let personnel = controller.update(id, request).await?;
    Ok(Json(personnel))
}

async fn delete_personnel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PersonnelController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Membre du personnel supprimé avec succès"
    })))
}
