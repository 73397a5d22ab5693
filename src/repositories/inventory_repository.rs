//! Repositório de Estoques
//!
//! Contagens de registros de estoque fora dos limites configurados.

use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Contar estoques com quantidade atual abaixo do mínimo
    pub async fn count_below_minimum(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM estoques WHERE quantidade_atual < quantidade_minima",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Contar estoques com quantidade atual acima do máximo
    pub async fn count_above_maximum(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM estoques WHERE quantidade_atual > quantidade_maxima",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
