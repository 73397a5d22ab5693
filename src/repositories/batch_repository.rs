//! Repositório de Lotes
//!
//! CRUD de lotes com as informações do armazém resolvidas via LEFT JOIN,
//! além da contagem usada pelo dashboard.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use sqlx::PgPool;

use crate::models::batch::{Batch, BatchStatus};
use crate::utils::errors::AppError;

const BATCH_SELECT: &str = r#"
    SELECT l.id_lote AS id,
           l.numero_lote AS batch_number,
           l.especie AS species,
           l.quantidade AS quantity,
           l.validade AS expiry,
           l.data_recebimento AS received_date,
           l.status,
           l.qr_code,
           l.armazem_id AS warehouse_id,
           a.nome AS warehouse_name,
           a.capacidade_total AS warehouse_capacity
    FROM lotes l
    LEFT JOIN armazens a ON a.id_armazem = l.armazem_id
"#;

pub struct BatchRepository {
    pool: PgPool,
}

impl BatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Contar o total de lotes cadastrados
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lotes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn create(
        &self,
        batch_number: i32,
        species: String,
        quantity: i32,
        expiry: DateTime<Utc>,
        received_date: NaiveDate,
        status: BatchStatus,
        qr_code: Option<String>,
        warehouse_id: Option<i32>,
    ) -> Result<Batch, AppError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO lotes (numero_lote, especie, quantidade, validade, data_recebimento, status, qr_code, armazem_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id_lote
            "#,
        )
        .bind(batch_number)
        .bind(species)
        .bind(quantity)
        .bind(expiry)
        .bind(received_date)
        .bind(status)
        .bind(qr_code)
        .bind(warehouse_id)
        .fetch_one(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Lote recém-criado não encontrado: {}", id)))
    }

    pub async fn find_all(&self) -> Result<Vec<Batch>, AppError> {
        let batches =
            sqlx::query_as::<_, Batch>(&format!("{} ORDER BY l.id_lote", BATCH_SELECT))
                .fetch_all(&self.pool)
                .await?;

        Ok(batches)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Batch>, AppError> {
        let batch =
            sqlx::query_as::<_, Batch>(&format!("{} WHERE l.id_lote = $1", BATCH_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(batch)
    }

    pub async fn find_by_warehouse(&self, warehouse_id: i32) -> Result<Vec<Batch>, AppError> {
        let batches = sqlx::query_as::<_, Batch>(&format!(
            "{} WHERE l.armazem_id = $1 ORDER BY l.id_lote",
            BATCH_SELECT
        ))
        .bind(warehouse_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(batches)
    }

    /// Lotes disponíveis em estoque, ordenados pela validade mais próxima
    pub async fn find_available(&self) -> Result<Vec<Batch>, AppError> {
        let batches = sqlx::query_as::<_, Batch>(&format!(
            "{} WHERE l.status = $1 ORDER BY l.validade ASC",
            BATCH_SELECT
        ))
        .bind(BatchStatus::InStock)
        .fetch_all(&self.pool)
        .await?;

        Ok(batches)
    }

    /// Lotes em estoque que vencem dentro do prazo informado
    pub async fn find_expiring(&self, days_ahead: i64) -> Result<Vec<Batch>, AppError> {
        let limit = Utc::now() + Duration::days(days_ahead);

        let batches = sqlx::query_as::<_, Batch>(&format!(
            "{} WHERE l.status = $1 AND l.validade <= $2 ORDER BY l.validade ASC",
            BATCH_SELECT
        ))
        .bind(BatchStatus::InStock)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(batches)
    }

    pub async fn update_status(&self, id: i32, status: BatchStatus) -> Result<Batch, AppError> {
        let result = sqlx::query("UPDATE lotes SET status = $2 WHERE id_lote = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Lote não encontrado: {}", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lote não encontrado: {}", id)))
    }

    pub async fn update_quantity(&self, id: i32, quantity: i32) -> Result<Batch, AppError> {
        let result = sqlx::query("UPDATE lotes SET quantidade = $2 WHERE id_lote = $1")
            .bind(id)
            .bind(quantity)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Lote não encontrado: {}", id)));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lote não encontrado: {}", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lotes WHERE id_lote = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Lote não encontrado: {}", id)));
        }

        Ok(())
    }
}
