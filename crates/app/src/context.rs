//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    database,
    domain::{
        assets::{AssetsService, PgAssetsService},
        leads::{LeadsService, PgLeadsService},
        subscribers::{PgSubscribersService, SubscribersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("invalid database configuration")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub leads: Arc<dyn LeadsService>,
    pub assets: Arc<dyn AssetsService>,
    pub subscribers: Arc<dyn SubscribersService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// The pool connects lazily, so an unreachable database does not prevent
    /// start-up; services report it per request instead.
    ///
    /// # Errors
    ///
    /// Returns an error when the database URL cannot be parsed.
    pub fn from_database_url(url: &str, acquire_timeout: Duration) -> Result<Self, AppInitError> {
        let pool = database::connect_lazy(url, acquire_timeout).map_err(AppInitError::Database)?;

        Ok(Self {
            leads: Arc::new(PgLeadsService::new(pool.clone())),
            assets: Arc::new(PgAssetsService::new(pool.clone())),
            subscribers: Arc::new(PgSubscribersService::new(pool)),
        })
    }
}
