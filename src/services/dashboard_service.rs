//! Service de cálculo de métricas do Dashboard
//!
//! Agrega dados de múltiplos repositórios para fornecer a visão geral do
//! sistema. Duas visões: global (contagens e somas agregadas no banco) e
//! por agricultor (entregas carregadas e filtradas em memória, com os
//! campos não relevantes zerados).
//!
//! Ambas as operações são leituras puras: nada é mutado e cada invocação
//! é independente. As consultas agregadas da visão global são
//! independentes entre si e não formam um snapshot transacional.

use std::collections::HashSet;

use sqlx::PgPool;

use crate::models::dashboard::DashboardMetrics;
use crate::models::delivery::{Delivery, DeliveryStatus};
use crate::repositories::batch_repository::BatchRepository;
use crate::repositories::delivery_repository::DeliveryRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::farmer_repository::FarmerRepository;
use crate::repositories::inventory_repository::InventoryRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct DashboardService {
    deliveries: DeliveryRepository,
    batches: BatchRepository,
    routes: RouteRepository,
    inventory: InventoryRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
    farmers: FarmerRepository,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            deliveries: DeliveryRepository::new(pool.clone()),
            batches: BatchRepository::new(pool.clone()),
            routes: RouteRepository::new(pool.clone()),
            inventory: InventoryRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            farmers: FarmerRepository::new(pool),
        }
    }

    /// Calcular todas as métricas do dashboard global
    ///
    /// Dados ausentes degradam para zero; a única falha possível é um erro
    /// do próprio banco, que é propagado sem tratamento.
    pub async fn global_metrics(&self) -> AppResult<DashboardMetrics> {
        // Métricas de lotes
        let total_batches = self.batches.count().await?;

        // Métricas de entregas: três contagens independentes por status
        let completed = self
            .deliveries
            .count_by_status(DeliveryStatus::Completed)
            .await?;
        let in_transit = self
            .deliveries
            .count_by_status(DeliveryStatus::InTransit)
            .await?;
        let pending = self
            .deliveries
            .count_by_status(DeliveryStatus::Pending)
            .await?;

        let total = completed + in_transit + pending;
        let completion_pct = completion_percentage(completed, total);

        // Métricas de tempo
        let average_hours = self.deliveries.average_delivery_hours().await?.unwrap_or(0.0);

        // Métricas de volume
        let volume = self.deliveries.sum_quantity_delivered().await?.unwrap_or(0);

        // Métricas de custo e distância
        let total_cost = self.routes.sum_estimated_cost().await?;
        let total_distance = self.routes.sum_total_distance().await?;
        let cost_km = cost_per_km(total_cost, total_distance);

        // Métricas de estoque
        let below_minimum = self.inventory.count_below_minimum().await?;
        let above_maximum = self.inventory.count_above_maximum().await?;

        // Métricas de veículos e motoristas
        let total_vehicles = self.vehicles.count().await?;
        let total_drivers = self.drivers.count().await?;

        Ok(DashboardMetrics {
            total_batches,
            completed_deliveries: completed,
            in_transit_deliveries: in_transit,
            pending_deliveries: pending,
            completion_percentage: completion_pct,
            average_delivery_hours: average_hours,
            total_volume_delivered: volume,
            total_estimated_cost: total_cost.unwrap_or(0.0),
            total_distance_travelled: total_distance.unwrap_or(0.0),
            cost_per_km: cost_km,
            stock_below_minimum: below_minimum,
            stock_above_maximum: above_maximum,
            total_vehicles,
            total_drivers,
            // Veículos em rota = entregas em rota (assume 1 veículo por entrega)
            vehicles_in_transit: in_transit,
        })
    }

    /// Calcular métricas filtradas para um agricultor específico
    ///
    /// O email é apenas a chave de busca; o vínculo das entregas é feito
    /// pelo CPF do agricultor. Carrega todas as entregas e filtra em
    /// memória; aceitável na escala atual, limitação conhecida.
    pub async fn farmer_metrics(&self, email: &str) -> AppResult<DashboardMetrics> {
        let farmer = self
            .farmers
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Agricultor não encontrado com email: {}", email))
            })?;

        let all_deliveries = self.deliveries.find_all().await?;

        let farmer_deliveries: Vec<Delivery> = all_deliveries
            .into_iter()
            .filter(|d| d.destination_farmer_cpf.as_deref() == Some(farmer.cpf.as_str()))
            .collect();

        Ok(scoped_metrics(&farmer_deliveries))
    }
}

/// Calcular o snapshot a partir de um conjunto de entregas já filtrado
///
/// Campos que não dizem respeito ao agricultor (custo, distância, estoques,
/// frota) ficam zerados.
fn scoped_metrics(deliveries: &[Delivery]) -> DashboardMetrics {
    let completed = count_by_status(deliveries, DeliveryStatus::Completed);
    let in_transit = count_by_status(deliveries, DeliveryStatus::InTransit);
    let pending = count_by_status(deliveries, DeliveryStatus::Pending);

    let total = completed + in_transit + pending;

    let volume: i64 = deliveries.iter().map(|d| d.quantity_delivered as i64).sum();

    // Tempo médio entre a data prevista e a data de entrega, em horas
    // inteiras (datas à meia-noite), apenas sobre entregas com as duas
    // datas preenchidas
    let durations: Vec<f64> = deliveries
        .iter()
        .filter_map(|d| match (d.expected_date, d.delivery_date) {
            (Some(expected), Some(delivered)) => {
                Some((delivered - expected).num_hours() as f64)
            }
            _ => None,
        })
        .collect();

    let average_hours = if durations.is_empty() {
        0.0
    } else {
        round2(durations.iter().sum::<f64>() / durations.len() as f64)
    };

    // Total de lotes distintos recebidos (entregas sem lote são ignoradas)
    let distinct_batches: HashSet<i32> =
        deliveries.iter().filter_map(|d| d.batch_id).collect();

    DashboardMetrics {
        total_batches: distinct_batches.len() as i64,
        completed_deliveries: completed,
        in_transit_deliveries: in_transit,
        pending_deliveries: pending,
        completion_percentage: completion_percentage(completed, total),
        average_delivery_hours: average_hours,
        total_volume_delivered: volume,
        ..Default::default()
    }
}

fn count_by_status(deliveries: &[Delivery], status: DeliveryStatus) -> i64 {
    deliveries.iter().filter(|d| d.status == status).count() as i64
}

/// Percentual de entregas concluídas sobre o total, 2 casas decimais.
/// Definido como 0.0 quando o total é zero.
fn completion_percentage(completed: i64, total: i64) -> f64 {
    if total > 0 {
        round2(completed as f64 / total as f64 * 100.0)
    } else {
        0.0
    }
}

/// Custo por km, 2 casas decimais. Definido como 0.0 quando a distância é
/// zero ou qualquer um dos lados está ausente.
fn cost_per_km(total_cost: Option<f64>, total_distance: Option<f64>) -> f64 {
    match (total_cost, total_distance) {
        (Some(cost), Some(distance)) if distance > 0.0 => round2(cost / distance),
        _ => 0.0,
    }
}

/// Arredondar para 2 casas decimais
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn delivery(
        id: i32,
        status: DeliveryStatus,
        quantity: i32,
        expected: Option<&str>,
        delivered: Option<&str>,
        batch_id: Option<i32>,
        cpf: Option<&str>,
    ) -> Delivery {
        let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        Delivery {
            id,
            status,
            quantity_delivered: quantity,
            expected_date: expected.map(parse),
            delivery_date: delivered.map(parse),
            batch_id,
            destination_farmer_cpf: cpf.map(|c| c.to_string()),
        }
    }

    #[test]
    fn test_completion_percentage() {
        // 70 concluídas, 20 em rota, 10 pendentes -> 70%
        assert_eq!(completion_percentage(70, 100), 70.0);
        assert_eq!(completion_percentage(0, 0), 0.0);
        assert_eq!(completion_percentage(1, 3), 33.33);
        assert_eq!(completion_percentage(2, 3), 66.67);
    }

    #[test]
    fn test_cost_per_km() {
        assert_eq!(cost_per_km(Some(100.0), Some(3.0)), 33.33);
        // distância zero nunca divide
        assert_eq!(cost_per_km(Some(150.0), Some(0.0)), 0.0);
        assert_eq!(cost_per_km(None, Some(10.0)), 0.0);
        assert_eq!(cost_per_km(Some(10.0), None), 0.0);
        assert_eq!(cost_per_km(None, None), 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(12.0), 12.0);
    }

    #[test]
    fn test_scoped_metrics_empty_set() {
        let metrics = scoped_metrics(&[]);

        assert_eq!(metrics.completed_deliveries, 0);
        assert_eq!(metrics.in_transit_deliveries, 0);
        assert_eq!(metrics.pending_deliveries, 0);
        assert_eq!(metrics.completion_percentage, 0.0);
        assert_eq!(metrics.average_delivery_hours, 0.0);
        assert_eq!(metrics.total_volume_delivered, 0);
        assert_eq!(metrics.total_batches, 0);
        // campos não relevantes para o agricultor permanecem zerados
        assert_eq!(metrics.total_estimated_cost, 0.0);
        assert_eq!(metrics.total_distance_travelled, 0.0);
        assert_eq!(metrics.cost_per_km, 0.0);
        assert_eq!(metrics.stock_below_minimum, 0);
        assert_eq!(metrics.stock_above_maximum, 0);
        assert_eq!(metrics.total_vehicles, 0);
        assert_eq!(metrics.total_drivers, 0);
        assert_eq!(metrics.vehicles_in_transit, 0);
    }

    #[test]
    fn test_scoped_metrics_counts_and_percentage() {
        let deliveries = vec![
            delivery(1, DeliveryStatus::Completed, 10, Some("2024-03-01"), Some("2024-03-02"), Some(1), Some("111")),
            delivery(2, DeliveryStatus::Completed, 5, Some("2024-03-01"), Some("2024-03-01"), Some(1), Some("111")),
            delivery(3, DeliveryStatus::InTransit, 0, Some("2024-03-05"), None, Some(2), Some("111")),
            delivery(4, DeliveryStatus::Pending, 0, None, None, None, Some("111")),
        ];

        let metrics = scoped_metrics(&deliveries);

        assert_eq!(metrics.completed_deliveries, 2);
        assert_eq!(metrics.in_transit_deliveries, 1);
        assert_eq!(metrics.pending_deliveries, 1);
        assert_eq!(metrics.completion_percentage, 50.0);
        assert_eq!(metrics.total_volume_delivered, 15);
        // 24h e 0h entre prevista e entrega -> média 12h
        assert_eq!(metrics.average_delivery_hours, 12.0);
    }

    #[test]
    fn test_scoped_metrics_counts_distinct_batches_once() {
        let deliveries = vec![
            delivery(1, DeliveryStatus::Completed, 10, None, None, Some(7), Some("111")),
            delivery(2, DeliveryStatus::Completed, 5, None, None, Some(7), Some("111")),
            delivery(3, DeliveryStatus::Pending, 0, None, None, None, Some("111")),
        ];

        let metrics = scoped_metrics(&deliveries);

        // duas entregas do mesmo lote contam um único lote; entrega sem
        // lote é ignorada
        assert_eq!(metrics.total_batches, 1);
    }

    #[test]
    fn test_scoped_metrics_ignores_deliveries_missing_a_date() {
        let deliveries = vec![
            delivery(1, DeliveryStatus::Completed, 1, Some("2024-03-01"), Some("2024-03-03"), None, Some("111")),
            delivery(2, DeliveryStatus::InTransit, 1, Some("2024-03-01"), None, None, Some("111")),
            delivery(3, DeliveryStatus::Pending, 1, None, None, None, Some("111")),
        ];

        let metrics = scoped_metrics(&deliveries);

        // apenas a primeira entrega tem as duas datas: 48h
        assert_eq!(metrics.average_delivery_hours, 48.0);
    }

    #[test]
    fn test_scoped_metrics_is_deterministic() {
        let deliveries = vec![
            delivery(1, DeliveryStatus::Completed, 10, Some("2024-03-01"), Some("2024-03-02"), Some(1), Some("111")),
            delivery(2, DeliveryStatus::Pending, 0, None, None, Some(2), Some("111")),
        ];

        assert_eq!(scoped_metrics(&deliveries), scoped_metrics(&deliveries));
    }
}
