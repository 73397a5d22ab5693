//! Modelos do sistema
//!
//! Este módulo contém os modelos de dados que mapeiam para o schema
//! PostgreSQL. Rotas, estoques, veículos e motoristas só participam de
//! consultas agregadas e não têm representação em memória.

pub mod auth;
pub mod batch;
pub mod dashboard;
pub mod delivery;
pub mod farmer;
