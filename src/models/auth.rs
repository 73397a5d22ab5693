//! Modelos de autenticação
//!
//! Papéis de usuário aceitos pela API.

use serde::{Deserialize, Serialize};

/// Papel de um usuário autenticado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Gestor,
    Tecnico,
    Agricultor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Gestor => "Gestor",
            UserRole::Tecnico => "Tecnico",
            UserRole::Agricultor => "Agricultor",
        }
    }

    /// Converter o papel gravado nas claims do JWT
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Gestor" => Some(UserRole::Gestor),
            "Tecnico" => Some(UserRole::Tecnico),
            "Agricultor" => Some(UserRole::Agricultor),
            _ => None,
        }
    }
}
