//! Database connection pool management
//!
//! Uses sqlx PgPool with an explicit connection limit. The pool is opened
//! once, pinged, then handed out by reference.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::DbError;
use crate::config::DbConfig;

/// Shared handle to the users database.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open the pool and verify the server answers a round-trip.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the liveness ping fails.
    pub async fn initialize(config: &DbConfig) -> Result<Self, DbError> {
        tracing::debug!(config = ?config, "Opening database pool");

        let pool = create_pool(config).await?;
        let db = Self { pool };
        db.ping().await?;

        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            "Database connection verified"
        );
        Ok(db)
    }

    /// Wrap an already-open pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Issue `SELECT 1`.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create a PostgreSQL connection pool.
///
/// # Example
///
/// ```ignore
/// let config = DbConfig::from_env()?;
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}
