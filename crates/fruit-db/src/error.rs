//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  MySQL Error (sqlx::Error)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ActionError (in fruit-cli) ← Printed, menu continues                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

/// MySQL server error numbers this crate distinguishes.
mod codes {
    pub const ACCESS_DENIED: u16 = 1045;
    pub const UNKNOWN_DATABASE: u16 = 1049;
    pub const DUPLICATE_ENTRY: u16 = 1062;
    pub const NO_SUCH_TABLE: u16 = 1146;
}

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for the message printed to the user.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - `fetch_one` returns no rows
    /// - The `fruits` table does not exist in the configured database
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - The schema declares a UNIQUE key (e.g. on `name`) and the value
    ///   is already taken
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// The live table lacks a column the inserter writes.
    #[error("Table '{table}' has no column '{column}'")]
    SchemaMismatch { table: String, column: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Bad credentials
    /// - Unreachable host
    /// - Unknown database name
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Pulls `(key, value)` out of "Duplicate entry 'v' for key 'k'".
fn parse_duplicate_entry(msg: &str) -> Option<(String, String)> {
    let rest = msg.strip_prefix("Duplicate entry '")?;
    let (value, rest) = rest.split_once("' for key '")?;
    let key = rest.strip_suffix('\'').unwrap_or(rest);
    Some((key.to_string(), value.to_string()))
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound      → DbError::NotFound
/// sqlx::Error::Database (1062)  → DbError::UniqueViolation
/// sqlx::Error::Database (1146)  → DbError::NotFound (table)
/// sqlx::Error::Database (1045)  → DbError::ConnectionFailed
/// sqlx::Error::Io / Tls         → DbError::ConnectionFailed
/// sqlx::Error::PoolTimedOut     → DbError::PoolExhausted
/// Other                         → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();
                let number = db_err
                    .try_downcast_ref::<MySqlDatabaseError>()
                    .map(|e| e.number());

                match number {
                    Some(codes::DUPLICATE_ENTRY) => match parse_duplicate_entry(&msg) {
                        Some((field, value)) => DbError::UniqueViolation { field, value },
                        None => DbError::UniqueViolation {
                            field: "unknown".to_string(),
                            value: "unknown".to_string(),
                        },
                    },
                    Some(codes::NO_SUCH_TABLE) => DbError::NotFound {
                        entity: "Table".to_string(),
                        id: msg,
                    },
                    Some(codes::ACCESS_DENIED) | Some(codes::UNKNOWN_DATABASE) => {
                        DbError::ConnectionFailed(msg)
                    }
                    _ => DbError::QueryFailed(msg),
                }
            }

            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),

            sqlx::Error::Tls(e) => DbError::ConnectionFailed(e.to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
