//! DTOs da API
//!
//! Requests e responses expostos pela camada HTTP.

pub mod batch_dto;
