use std::sync::Arc;

use pagila_db::services::Services;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and every service are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pagila_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read services, all backed by the configured data-access strategy.
    pub services: Services,
}

impl AppState {
    pub fn new(pool: pagila_db::DbPool, config: ServerConfig) -> Self {
        let services = Services::new(pool.clone(), &config.data_access);
        Self {
            pool,
            config: Arc::new(config),
            services,
        }
    }
}
