//! Routes Hospital

use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::hospital_controller::HospitalController;
use crate::dto::common::{ApiResponse, Pagination};
use crate::dto::hospital_dto::{CreateHospitalRequest, UpdateHospitalRequest};
use crate::middleware::auth_middleware::{require_auth, require_dispatcher};
use crate::models::hospital::Hospital;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_hospital_router(state: AppState) -> Router {
    let reads = Router::new()
        .route("/", get(list_hospitals))
        .route("/active", get(list_active_hospitals))
        .route("/:id", get(get_hospital))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let writes = Router::new()
        .route("/", post(create_hospital))
        .route("/:id", put(update_hospital))
        .route("/:id", delete(delete_hospital))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_dispatcher,
        ));

    reads.merge(writes).with_state(state)
}

async fn list_hospitals(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Hospital>>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    let hospitals = controller
        .list(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(hospitals))
}

async fn list_active_hospitals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Hospital>>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    let hospitals = controller.list_active().await?;
    Ok(Json(hospitals))
}

async fn get_hospital(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Hospital>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    let hospital = controller.get_by_id(id).await?;
    Ok(Json(hospital))
}

async fn create_hospital(
    State(state): State<AppState>,
    Json(request): Json<CreateHospitalRequest>,
) -> Result<Json<ApiResponse<Hospital>>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    let hospital = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        hospital,
        "Hôpital créé avec succès".to_string(),
    )))
}

async fn update_hospital(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateHospitalRequest>,
) -> Result<Json<Hospital>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    let hospital = controller.update(id, request).await?;
    Ok(Json(hospital))
}

async fn delete_hospital(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = HospitalController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Hôpital supprimé avec succès"
    })))
}
