//! Rotas do Dashboard
//!
//! Métricas globais (qualquer papel autenticado) e métricas filtradas por
//! agricultor.

use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};

use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::UserRole;
use crate::models::dashboard::DashboardMetrics;
use crate::services::dashboard_service::DashboardService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/agricultor/:email", get(get_farmer_dashboard))
}

/// Métricas globais do sistema
async fn get_dashboard(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardMetrics>> {
    user.require_any_role(&[UserRole::Gestor, UserRole::Tecnico, UserRole::Agricultor])?;

    let service = DashboardService::new(state.pool.clone());
    let metrics = service.global_metrics().await?;

    Ok(Json(metrics))
}

/// Métricas filtradas para um agricultor (404 quando o email não resolve)
async fn get_farmer_dashboard(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<DashboardMetrics>> {
    user.require_any_role(&[UserRole::Gestor, UserRole::Tecnico, UserRole::Agricultor])?;

    let service = DashboardService::new(state.pool.clone());
    let metrics = service.farmer_metrics(&email).await?;

    Ok(Json(metrics))
}
