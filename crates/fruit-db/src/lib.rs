//! # fruit-db: Database Layer for the Fruit Store Client
//!
//! This crate provides MySQL access for the fruit store client.
//! It uses sqlx with the tokio runtime.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fruit Store Data Flow                            │
//! │                                                                         │
//! │  Menu action (list / insert / mean / visualize / search)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     fruit-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │  (fruit.rs)   │    │ (schema.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ MySqlPool     │◄───│ FruitStore    │───►│ information_ │  │   │
//! │  │   │ Health check  │    │ FruitRepo     │    │ schema cache │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     MySQL: `fruits` table                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Connection settings, loaded from the environment
//! - [`pool`] - Connection pool creation and teardown
//! - [`schema`] - Column structure introspection
//! - [`error`] - Database error types
//! - [`repository`] - The `FruitStore` seam and its MySQL implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fruit_db::{Database, DbConfig, FruitStore};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//! let snapshot = db.fruits().fetch_all().await?;
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, DbConfig};
pub use error::{DbError, DbResult};
pub use pool::Database;
pub use repository::fruit::FruitRepository;
pub use repository::FruitStore;
