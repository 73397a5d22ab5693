//! Controllers da aplicação
//!
//! Camada entre as rotas e os repositórios: validação e mapeamento de DTOs.

pub mod batch_controller;
