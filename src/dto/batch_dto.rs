//! DTOs de Lote
//!
//! Requests e responses da API de lotes. Os nomes JSON seguem o contrato
//! legado do frontend (camelCase em português).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::batch::Batch;

/// Request para cadastrar um lote
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBatchRequest {
    #[serde(rename = "numeroLote")]
    pub batch_number: i32,

    #[serde(rename = "especie")]
    #[validate(length(min = 1, max = 100))]
    pub species: String,

    #[serde(rename = "quantidade")]
    #[validate(range(min = 0))]
    pub quantity: i32,

    #[serde(rename = "validade")]
    pub expiry: DateTime<Utc>,

    #[serde(rename = "dataRecebimento")]
    pub received_date: NaiveDate,

    /// Status legado opcional; quando ausente o lote entra como Em_Estoque
    pub status: Option<String>,

    #[serde(rename = "qrCode")]
    pub qr_code: Option<String>,

    #[serde(rename = "armazemId")]
    pub warehouse_id: Option<i32>,
}

/// Request para atualizar o status de um lote
#[derive(Debug, Deserialize)]
pub struct UpdateBatchStatusRequest {
    pub status: String,
}

/// Request para atualizar a quantidade de um lote
#[derive(Debug, Deserialize)]
pub struct UpdateBatchQuantityRequest {
    #[serde(rename = "quantidade")]
    pub quantity: i32,
}

/// Response de lote
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub id: i32,

    #[serde(rename = "numeroLote")]
    pub batch_number: i32,

    #[serde(rename = "especie")]
    pub species: String,

    #[serde(rename = "quantidade")]
    pub quantity: i32,

    #[serde(rename = "validade")]
    pub expiry: DateTime<Utc>,

    #[serde(rename = "dataRecebimento")]
    pub received_date: NaiveDate,

    pub status: String,

    #[serde(rename = "qrCode")]
    pub qr_code: Option<String>,

    #[serde(rename = "armazemId")]
    pub warehouse_id: Option<i32>,

    #[serde(rename = "armazemNome")]
    pub warehouse_name: Option<String>,

    #[serde(rename = "armazemCapacidade")]
    pub warehouse_capacity: Option<i32>,
}

impl From<Batch> for BatchResponse {
    fn from(batch: Batch) -> Self {
        Self {
            id: batch.id,
            batch_number: batch.batch_number,
            species: batch.species,
            quantity: batch.quantity,
            expiry: batch.expiry,
            received_date: batch.received_date,
            status: batch.status.as_str().to_string(),
            warehouse_id: batch.warehouse_id,
            warehouse_name: batch.warehouse_name,
            warehouse_capacity: batch.warehouse_capacity,
            qr_code: batch.qr_code,
        }
    }
}

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
