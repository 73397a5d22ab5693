//! Modelo de Agricultor
//!
//! O agricultor tem duas chaves distintas: o email é a chave de busca
//! externa (login/rota) e o CPF é a chave de junção interna usada para
//! vincular destinos de entrega. As duas não são intercambiáveis.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Agricultor cadastrado no sistema
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Farmer {
    pub cpf: String,
    pub name: String,
    pub email: String,
}
