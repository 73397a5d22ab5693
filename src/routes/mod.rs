//! Rotas da API

pub mod batch_routes;
pub mod dashboard_routes;
