//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se
//! pasa a través del router de Axum. El pool es el único handle de
//! almacenamiento del proceso: se crea al arrancar, se comparte por
//! clonación y nunca vive en un singleton oculto.

use sqlx::MySqlPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: MySqlPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
