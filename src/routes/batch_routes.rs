//! Rotas de Lotes
//!
//! Leituras abertas a qualquer papel autenticado; mutações restritas a
//! Gestor e Tecnico.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};

use crate::controllers::batch_controller::BatchController;
use crate::dto::batch_dto::{
    ApiResponse, BatchResponse, CreateBatchRequest, UpdateBatchQuantityRequest,
    UpdateBatchStatusRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppResult;

const ALL_ROLES: &[UserRole] = &[UserRole::Gestor, UserRole::Tecnico, UserRole::Agricultor];
const MANAGER_ROLES: &[UserRole] = &[UserRole::Gestor, UserRole::Tecnico];

pub fn create_batch_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_batch))
        .route("/", get(list_batches))
        .route("/disponiveis", get(list_available_batches))
        .route("/vencimento/:dias", get(list_expiring_batches))
        .route("/armazem/:id", get(list_batches_by_warehouse))
        .route("/:id", get(get_batch))
        .route("/:id/status", put(update_batch_status))
        .route("/:id/quantidade", put(update_batch_quantity))
        .route("/:id", delete(delete_batch))
}

async fn create_batch(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(request): Json<CreateBatchRequest>,
) -> AppResult<Json<ApiResponse<BatchResponse>>> {
    user.require_any_role(MANAGER_ROLES)?;

    let controller = BatchController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_batches(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BatchResponse>>> {
    user.require_any_role(ALL_ROLES)?;

    let controller = BatchController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn get_batch(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BatchResponse>> {
    user.require_any_role(ALL_ROLES)?;

    let controller = BatchController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_batches_by_warehouse(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<BatchResponse>>> {
    user.require_any_role(ALL_ROLES)?;

    let controller = BatchController::new(state.pool.clone());
    let response = controller.list_by_warehouse(id).await?;
    Ok(Json(response))
}

async fn list_available_batches(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BatchResponse>>> {
    user.require_any_role(ALL_ROLES)?;

    let controller = BatchController::new(state.pool.clone());
    let response = controller.list_available().await?;
    Ok(Json(response))
}

async fn list_expiring_batches(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(dias): Path<i64>,
) -> AppResult<Json<Vec<BatchResponse>>> {
    user.require_any_role(ALL_ROLES)?;

    let controller = BatchController::new(state.pool.clone());
    let response = controller.list_expiring(dias).await?;
    Ok(Json(response))
}

async fn update_batch_status(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBatchStatusRequest>,
) -> AppResult<Json<ApiResponse<BatchResponse>>> {
    user.require_any_role(MANAGER_ROLES)?;

    let controller = BatchController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn update_batch_quantity(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBatchQuantityRequest>,
) -> AppResult<Json<ApiResponse<BatchResponse>>> {
    user.require_any_role(MANAGER_ROLES)?;

    let controller = BatchController::new(state.pool.clone());
    let response = controller.update_quantity(id, request).await?;
    Ok(Json(response))
}

async fn delete_batch(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    user.require_any_role(MANAGER_ROLES)?;

    let controller = BatchController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Lote removido com sucesso"
    })))
}
