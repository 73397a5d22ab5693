//! Services do sistema
//!
//! Este módulo contém a lógica de negócio da aplicação. Os services
//! encapsulam operações que envolvem múltiplos repositórios.

pub mod dashboard_service;

pub use dashboard_service::DashboardService;
