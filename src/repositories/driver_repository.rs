//! Repositório de Motoristas

use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Contar o total de motoristas cadastrados
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM motoristas")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
