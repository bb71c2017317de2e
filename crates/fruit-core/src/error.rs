//! # Error Types
//!
//! Domain-specific error types for fruit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fruit-core errors (this file)                                         │
//! │  ├── CoreError        - Nothing to compute on (no columns, no data)    │
//! │  └── ValidationError  - Bad interactive input                          │
//! │                                                                         │
//! │  fruit-db errors (separate crate)                                      │
//! │  └── DbError          - Query / connection failures                    │
//! │                                                                         │
//! │  fruit-cli errors (app)                                                │
//! │  └── ActionError      - What the menu loop prints                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised when a snapshot cannot support the requested computation.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// The table has no integer or floating-point column.
    #[error("No numeric columns available")]
    NoNumericColumns,

    /// The table has nothing besides the identifier column.
    #[error("No columns available to visualize")]
    NoChartableColumns,

    /// The selected column holds no non-null values.
    ///
    /// ## When This Occurs
    /// - Mean or histogram over an empty table
    /// - Column where every row is NULL
    #[error("No data in column '{column}'")]
    NoData { column: String },

    /// Column index outside the snapshot.
    #[error("Column index {index} out of range ({count} columns)")]
    ColumnOutOfRange { index: usize, count: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any database round-trip and abort only the current
/// menu action.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Price or stock did not parse as an integer.
    #[error("price and stock must be numbers")]
    NotANumber { field: String, input: String },

    /// A menu or column selection that does not name an offered option.
    #[error("invalid choice")]
    InvalidChoice { input: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
