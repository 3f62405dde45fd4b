//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database,
    domain::carts::{CartsApplication, CartsService, PgCartsRepository},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to migrate database")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(carts: Arc<dyn CartsService>) -> Self {
        Self { carts }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to or migrating the database fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        let repository = PgCartsRepository::new(pool);

        Ok(Self::new(Arc::new(CartsApplication::new(Arc::new(
            repository,
        )))))
    }
}
