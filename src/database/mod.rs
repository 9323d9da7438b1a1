//! Módulo de base de datos
//!
//! Maneja la conexión con MySQL.

pub mod connection;

pub use connection::create_pool;
