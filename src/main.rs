mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{routing::get, Json, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use middleware::auth::auth_middleware;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🌱 Sprig - Backend de Logística Agrícola");
    info!("========================================");

    let env_config = EnvironmentConfig::default();

    // Inicializar banco de dados
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    let app_state = AppState::new(pool, env_config.clone());

    // Rotas autenticadas da API
    let api = Router::new()
        .nest(
            "/api/dashboard",
            routes::dashboard_routes::create_dashboard_router(),
        )
        .nest("/api/lote", routes::batch_routes::create_batch_router())
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .merge(api)
        .layer(cors_middleware(&env_config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr: SocketAddr = env_config.server_url().parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Health check");
    info!("📊 Dashboard:");
    info!("   GET  /api/dashboard - Métricas globais");
    info!("   GET  /api/dashboard/agricultor/:email - Métricas do agricultor");
    info!("📦 Lotes:");
    info!("   POST /api/lote - Cadastrar lote");
    info!("   GET  /api/lote - Listar lotes");
    info!("   GET  /api/lote/:id - Obter lote");
    info!("   GET  /api/lote/armazem/:id - Lotes por armazém");
    info!("   GET  /api/lote/disponiveis - Lotes em estoque");
    info!("   GET  /api/lote/vencimento/:dias - Lotes próximos do vencimento");
    info!("   PUT  /api/lote/:id/status - Atualizar status");
    info!("   PUT  /api/lote/:id/quantidade - Atualizar quantidade");
    info!("   DELETE /api/lote/:id - Remover lote");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "sprig-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
