//! Modelo de Lote
//!
//! Lote de produto agrícola com quantidade, validade e status, opcionalmente
//! vinculado a um armazém.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::errors::AppError;

/// Status de um lote
///
/// Valores textuais legados gravados no banco; não alterar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "status_lote")]
pub enum BatchStatus {
    #[sqlx(rename = "Em_Estoque")]
    #[serde(rename = "Em_Estoque")]
    InStock,

    #[sqlx(rename = "Em_Transporte")]
    #[serde(rename = "Em_Transporte")]
    InTransport,

    #[sqlx(rename = "Entregue")]
    #[serde(rename = "Entregue")]
    Delivered,
}

impl BatchStatus {
    /// Representação textual legada do status
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::InStock => "Em_Estoque",
            BatchStatus::InTransport => "Em_Transporte",
            BatchStatus::Delivered => "Entregue",
        }
    }

    /// Converter a representação textual legada em status
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "Em_Estoque" => Ok(BatchStatus::InStock),
            "Em_Transporte" => Ok(BatchStatus::InTransport),
            "Entregue" => Ok(BatchStatus::Delivered),
            other => Err(AppError::BadRequest(format!(
                "Status de lote inválido: {}",
                other
            ))),
        }
    }
}

/// Lote carregado do banco com as informações do armazém já resolvidas
#[derive(Debug, Clone, FromRow)]
pub struct Batch {
    pub id: i32,
    pub batch_number: i32,
    pub species: String,
    pub quantity: i32,
    pub expiry: DateTime<Utc>,
    pub received_date: NaiveDate,
    pub status: BatchStatus,
    pub qr_code: Option<String>,
    pub warehouse_id: Option<i32>,
    pub warehouse_name: Option<String>,
    pub warehouse_capacity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_status_parse() {
        assert_eq!(BatchStatus::parse("Em_Estoque").unwrap(), BatchStatus::InStock);
        assert_eq!(
            BatchStatus::parse("Em_Transporte").unwrap(),
            BatchStatus::InTransport
        );
        assert_eq!(BatchStatus::parse("Entregue").unwrap(), BatchStatus::Delivered);
        assert!(BatchStatus::parse("Cancelado").is_err());
    }
}
