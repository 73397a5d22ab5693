//! Controller de Lotes
//!
//! Validação e conversão de DTOs sobre o repositório de lotes.

use sqlx::PgPool;
use validator::Validate;

use crate::dto::batch_dto::{
    ApiResponse, BatchResponse, CreateBatchRequest, UpdateBatchQuantityRequest,
    UpdateBatchStatusRequest,
};
use crate::models::batch::BatchStatus;
use crate::repositories::batch_repository::BatchRepository;
use crate::utils::errors::AppError;

pub struct BatchController {
    repository: BatchRepository,
}

impl BatchController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BatchRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateBatchRequest,
    ) -> Result<ApiResponse<BatchResponse>, AppError> {
        request.validate()?;

        // Sem status explícito o lote entra em estoque
        let status = match request.status.as_deref() {
            Some(value) => BatchStatus::parse(value)?,
            None => BatchStatus::InStock,
        };

        let batch = self
            .repository
            .create(
                request.batch_number,
                request.species,
                request.quantity,
                request.expiry,
                request.received_date,
                status,
                request.qr_code,
                request.warehouse_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            BatchResponse::from(batch),
            "Lote cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn list_all(&self) -> Result<Vec<BatchResponse>, AppError> {
        let batches = self.repository.find_all().await?;
        Ok(batches.into_iter().map(BatchResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<BatchResponse, AppError> {
        let batch = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lote não encontrado: {}", id)))?;

        Ok(BatchResponse::from(batch))
    }

    pub async fn list_by_warehouse(
        &self,
        warehouse_id: i32,
    ) -> Result<Vec<BatchResponse>, AppError> {
        let batches = self.repository.find_by_warehouse(warehouse_id).await?;
        Ok(batches.into_iter().map(BatchResponse::from).collect())
    }

    pub async fn list_available(&self) -> Result<Vec<BatchResponse>, AppError> {
        let batches = self.repository.find_available().await?;
        Ok(batches.into_iter().map(BatchResponse::from).collect())
    }

    pub async fn list_expiring(&self, days_ahead: i64) -> Result<Vec<BatchResponse>, AppError> {
        if days_ahead < 0 {
            return Err(AppError::BadRequest(
                "Dias de antecedência não podem ser negativos".to_string(),
            ));
        }

        let batches = self.repository.find_expiring(days_ahead).await?;
        Ok(batches.into_iter().map(BatchResponse::from).collect())
    }

    pub async fn update_status(
        &self,
        id: i32,
        request: UpdateBatchStatusRequest,
    ) -> Result<ApiResponse<BatchResponse>, AppError> {
        let status = BatchStatus::parse(&request.status)?;
        let batch = self.repository.update_status(id, status).await?;

        Ok(ApiResponse::success_with_message(
            BatchResponse::from(batch),
            "Status do lote atualizado com sucesso".to_string(),
        ))
    }

    pub async fn update_quantity(
        &self,
        id: i32,
        request: UpdateBatchQuantityRequest,
    ) -> Result<ApiResponse<BatchResponse>, AppError> {
        if request.quantity < 0 {
            return Err(AppError::BadRequest(
                "Quantidade não pode ser negativa".to_string(),
            ));
        }

        let batch = self.repository.update_quantity(id, request.quantity).await?;

        Ok(ApiResponse::success_with_message(
            BatchResponse::from(batch),
            "Quantidade do lote atualizada com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
