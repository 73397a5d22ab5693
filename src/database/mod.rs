//! Módulo de banco de dados
//!
//! Gerencia a conexão com PostgreSQL.

pub mod connection;

pub use connection::create_pool;
