//! Modelo de Entrega
//!
//! Este módulo contém o struct de entrega e o enum de status com o
//! vocabulário legado usado no banco e no JSON ("Pendente", "Em_rota",
//! "Entregue").

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status de uma entrega
///
/// Os valores textuais são o vocabulário gravado no banco de dados e
/// esperado pelo frontend; não alterar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "status_entrega")]
pub enum DeliveryStatus {
    #[sqlx(rename = "Pendente")]
    #[serde(rename = "Pendente")]
    Pending,

    #[sqlx(rename = "Em_rota")]
    #[serde(rename = "Em_rota")]
    InTransit,

    #[sqlx(rename = "Entregue")]
    #[serde(rename = "Entregue")]
    Completed,
}

/// Entrega carregada do banco com os vínculos já resolvidos
///
/// As consultas fazem LEFT JOIN com destino/agricultor e lote para que o
/// filtro em memória do dashboard do agricultor não precise de consultas
/// adicionais.
#[derive(Debug, Clone, FromRow)]
pub struct Delivery {
    pub id: i32,
    pub status: DeliveryStatus,
    pub quantity_delivered: i32,
    pub expected_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub batch_id: Option<i32>,
    pub destination_farmer_cpf: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_json_tokens() {
        let value = serde_json::to_value(DeliveryStatus::InTransit).unwrap();
        assert_eq!(value, serde_json::json!("Em_rota"));

        let parsed: DeliveryStatus = serde_json::from_value(serde_json::json!("Entregue")).unwrap();
        assert_eq!(parsed, DeliveryStatus::Completed);

        let pending: DeliveryStatus = serde_json::from_value(serde_json::json!("Pendente")).unwrap();
        assert_eq!(pending, DeliveryStatus::Pending);
    }
}
