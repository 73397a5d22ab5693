//! Repositório de Veículos

use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Contar o total de veículos cadastrados
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM veiculos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
