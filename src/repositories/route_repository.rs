//! Repositório de Rotas
//!
//! Somas de custo estimado e distância usadas pelas métricas do dashboard.

use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Soma do custo estimado de todas as rotas. NULL quando não há rotas.
    pub async fn sum_estimated_cost(&self) -> Result<Option<f64>, AppError> {
        let total: Option<f64> =
            sqlx::query_scalar("SELECT SUM(custo_estimado)::double precision FROM rotas")
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }

    /// Soma da distância total de todas as rotas. NULL quando não há rotas.
    pub async fn sum_total_distance(&self) -> Result<Option<f64>, AppError> {
        let total: Option<f64> =
            sqlx::query_scalar("SELECT SUM(distancia_total)::double precision FROM rotas")
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }
}
