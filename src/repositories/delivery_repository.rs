//! Repositório de Entregas
//!
//! Consultas agregadas sobre a tabela de entregas e carga completa com os
//! vínculos de destino/agricultor e lote resolvidos via LEFT JOIN.

use crate::models::delivery::{Delivery, DeliveryStatus};
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct DeliveryRepository {
    pool: PgPool,
}

impl DeliveryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Contar entregas com um determinado status
    pub async fn count_by_status(&self, status: DeliveryStatus) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entregas WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Tempo médio de entrega em horas sobre as entregas com as duas datas
    /// preenchidas. NULL quando nenhuma entrega qualifica.
    pub async fn average_delivery_hours(&self) -> Result<Option<f64>, AppError> {
        let average: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT AVG(EXTRACT(EPOCH FROM (data_entrega::timestamp - data_prevista::timestamp)) / 3600.0)::double precision
            FROM entregas
            WHERE data_entrega IS NOT NULL AND data_prevista IS NOT NULL
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(average)
    }

    /// Soma da quantidade entregue. NULL quando não há entregas.
    pub async fn sum_quantity_delivered(&self) -> Result<Option<i64>, AppError> {
        let total: Option<i64> =
            sqlx::query_scalar("SELECT SUM(quantidade_entregue) FROM entregas")
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }

    /// Carregar todas as entregas com o CPF do agricultor de destino e o
    /// lote vinculado já resolvidos
    pub async fn find_all(&self) -> Result<Vec<Delivery>, AppError> {
        let deliveries = sqlx::query_as::<_, Delivery>(
            r#"
            SELECT e.id_entrega AS id,
                   e.status,
                   e.quantidade_entregue AS quantity_delivered,
                   e.data_prevista AS expected_date,
                   e.data_entrega AS delivery_date,
                   e.lote_id AS batch_id,
                   a.cpf AS destination_farmer_cpf
            FROM entregas e
            LEFT JOIN destinos d ON d.id_destino = e.destino_id
            LEFT JOIN agricultores a ON a.cpf = d.agricultor_cpf
            ORDER BY e.id_entrega
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(deliveries)
    }
}
