use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::{AppError, BusinessClock};

/// Server state shared by every handler
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// config is small and immutable.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Build state from an existing pool (tests use this with an
    /// in-memory database)
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Open the database and apply migrations
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::new(config.clone(), db.pool))
    }

    /// The clock used by the past-reservation check
    pub fn business_clock(&self) -> BusinessClock {
        BusinessClock::new(self.config.clock_offset_hours)
    }
}
