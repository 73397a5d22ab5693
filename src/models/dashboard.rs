//! Modelo do Dashboard
//!
//! Snapshot de métricas agregadas do sistema. Valor puramente calculado:
//! criado a cada requisição, nunca persistido nem mutado após a construção.

use serde::{Deserialize, Serialize};

/// Métricas agregadas do dashboard
///
/// Os nomes JSON são os campos legados consumidos pelo frontend.
/// Todos os campos degradam para zero quando a fonte está vazia.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(rename = "totalLotes")]
    pub total_batches: i64,

    #[serde(rename = "entregasConcluidas")]
    pub completed_deliveries: i64,

    #[serde(rename = "entregasEmRota")]
    pub in_transit_deliveries: i64,

    #[serde(rename = "entregasPendentes")]
    pub pending_deliveries: i64,

    /// Percentual de entregas concluídas sobre o total, 2 casas decimais
    #[serde(rename = "percentualEntregue")]
    pub completion_percentage: f64,

    #[serde(rename = "tempoMedioEntregaHoras")]
    pub average_delivery_hours: f64,

    #[serde(rename = "volumeTotalEntregue")]
    pub total_volume_delivered: i64,

    #[serde(rename = "custoTotalEstimado")]
    pub total_estimated_cost: f64,

    #[serde(rename = "distanciaTotalPercorrida")]
    pub total_distance_travelled: f64,

    /// Custo estimado por km percorrido, 2 casas decimais
    #[serde(rename = "custoPorKm")]
    pub cost_per_km: f64,

    #[serde(rename = "estoquesAbaixoDoMinimo")]
    pub stock_below_minimum: i64,

    #[serde(rename = "estoquesAcimaDoMaximo")]
    pub stock_above_maximum: i64,

    #[serde(rename = "totalVeiculos")]
    pub total_vehicles: i64,

    #[serde(rename = "totalMotoristas")]
    pub total_drivers: i64,

    /// Aproximação: assume 1 veículo por entrega em rota, não é uma
    /// contagem exata da frota
    #[serde(rename = "veiculosEmRota")]
    pub vehicles_in_transit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_legacy_field_names() {
        let metrics = DashboardMetrics {
            total_batches: 3,
            completed_deliveries: 7,
            completion_percentage: 70.0,
            ..Default::default()
        };

        let value = serde_json::to_value(&metrics).unwrap();
        assert_eq!(value["totalLotes"], 3);
        assert_eq!(value["entregasConcluidas"], 7);
        assert_eq!(value["percentualEntregue"], 70.0);
        assert_eq!(value["veiculosEmRota"], 0);
        assert!(value.get("total_batches").is_none());
    }

    #[test]
    fn test_default_is_all_zeros() {
        let metrics = DashboardMetrics::default();
        assert_eq!(metrics.total_batches, 0);
        assert_eq!(metrics.completion_percentage, 0.0);
        assert_eq!(metrics.cost_per_km, 0.0);
    }
}
