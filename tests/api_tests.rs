use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "sprig-backend");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_dashboard_requires_token() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_returns_legacy_field_names() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/dashboard")
                .header(header::AUTHORIZATION, "Bearer token-de-teste")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    // contrato legado do frontend
    assert!(body.get("totalLotes").is_some());
    assert!(body.get("entregasConcluidas").is_some());
    assert!(body.get("percentualEntregue").is_some());
    assert!(body.get("custoPorKm").is_some());
    assert!(body.get("veiculosEmRota").is_some());
}

#[tokio::test]
async fn test_unknown_farmer_returns_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/dashboard/agricultor/desconhecido@fazenda.com")
                .header(header::AUTHORIZATION, "Bearer token-de-teste")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "NOT_FOUND");
}

// App de teste com o mesmo contrato HTTP da API real, sem banco de dados
fn create_test_app() -> Router {
    Router::new()
        .route("/health", get(health_stub))
        .route("/api/dashboard", get(dashboard_stub))
        .route("/api/dashboard/agricultor/:email", get(farmer_dashboard_stub))
}

async fn health_stub() -> Json<serde_json::Value> {
    Json(json!({
        "service": "sprig-backend",
        "status": "healthy",
    }))
}

async fn dashboard_stub(request: Request<Body>) -> axum::response::Response {
    if request.headers().get(header::AUTHORIZATION).is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Unauthorized",
                "message": "Token de autorização requerido",
                "code": "UNAUTHORIZED",
            })),
        )
            .into_response();
    }

    Json(json!({
        "totalLotes": 0,
        "entregasConcluidas": 0,
        "entregasEmRota": 0,
        "entregasPendentes": 0,
        "percentualEntregue": 0.0,
        "tempoMedioEntregaHoras": 0.0,
        "volumeTotalEntregue": 0,
        "custoTotalEstimado": 0.0,
        "distanciaTotalPercorrida": 0.0,
        "custoPorKm": 0.0,
        "estoquesAbaixoDoMinimo": 0,
        "estoquesAcimaDoMaximo": 0,
        "totalVeiculos": 0,
        "totalMotoristas": 0,
        "veiculosEmRota": 0,
    }))
    .into_response()
}

async fn farmer_dashboard_stub(
    axum::extract::Path(email): axum::extract::Path<String>,
) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": format!("Agricultor não encontrado com email: {}", email),
            "code": "NOT_FOUND",
        })),
    )
        .into_response()
}
