//! Repositório de Agricultores

use crate::models::farmer::Farmer;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct FarmerRepository {
    pool: PgPool,
}

impl FarmerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Buscar agricultor pelo email (chave de busca externa)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Farmer>, AppError> {
        let farmer = sqlx::query_as::<_, Farmer>(
            "SELECT cpf, nome AS name, email FROM agricultores WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(farmer)
    }
}
