//! Repositórios de acesso a dados
//!
//! Cada repositório encapsula as consultas SQL de uma coleção. Todos são
//! somente leitura do ponto de vista do dashboard; apenas lotes têm
//! operações de escrita.

pub mod batch_repository;
pub mod delivery_repository;
pub mod driver_repository;
pub mod farmer_repository;
pub mod inventory_repository;
pub mod route_repository;
pub mod vehicle_repository;
