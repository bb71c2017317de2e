//! # Database Pool Management
//!
//! Connection pool creation, verification and teardown for MySQL.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session Connection Lifecycle                       │
//! │                                                                         │
//! │  DbConfig::from_env()                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← open pool + SELECT 1                    │
//! │       │                                                                 │
//! │       ├── Err → fatal, menu never shown                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.fruits() ──► injected into every menu action                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.close().await ← always runs when the menu loop ends                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::DbConfig;
use crate::error::{DbError, DbResult};
use crate::repository::fruit::FruitRepository;
use fruit_core::TableSchema;

/// Main database handle providing repository access.
///
/// Cloning is cheap: clones share the pool and the schema cache.
#[derive(Debug, Clone)]
pub struct Database {
    /// The MySQL connection pool.
    pool: MySqlPool,

    /// Column structure of the fruits table, introspected on first use and
    /// kept for the lifetime of this handle.
    schema: Arc<OnceCell<TableSchema>>,
}

impl Database {
    /// Opens the connection pool and verifies it with a round-trip.
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use database handle
    /// * `Err(DbError::ConnectionFailed)` - Bad credentials, unreachable
    ///   host, unknown database
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(url = %config.redacted_url(), "Initializing database connection");

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(config.connect_options())
            .await
            .map_err(|e| match DbError::from(e) {
                err @ DbError::ConnectionFailed(_) => err,
                other => DbError::ConnectionFailed(other.to_string()),
            })?;

        debug!(max_connections = config.max_connections, "Database pool created");

        let db = Database::from_pool(pool);

        if !db.health_check().await {
            db.close().await;
            return Err(DbError::ConnectionFailed(
                "server did not answer the health check".to_string(),
            ));
        }

        info!("Database connection verified");
        Ok(db)
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: MySqlPool) -> Self {
        Database {
            pool,
            schema: Arc::new(OnceCell::new()),
        }
    }

    /// Returns the fruit repository.
    pub fn fruits(&self) -> FruitRepository {
        FruitRepository::new(self.pool.clone(), Arc::clone(&self.schema))
    }

    /// Closes the database connection pool.
    ///
    /// ## Note
    /// After calling close, all repository operations will fail.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
