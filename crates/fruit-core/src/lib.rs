//! # fruit-core: Pure Domain Logic for the Fruit Store Client
//!
//! This crate holds everything the client computes without touching the
//! outside world: the fruit row types, the column-typed table snapshot,
//! input validation, summary statistics and chart specifications.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fruit Store Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    fruit-cli (menu loop)                        │   │
//! │  │   List ──► Insert ──► Mean ──► Visualize ──► Search ──► Exit   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fruit-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ snapshot  │  │   stats   │  │   chart   │  │   │
//! │  │   │  NewFruit │  │  Value    │  │   mean    │  │  BarChart │  │   │
//! │  │   │  Fruit    │  │  Column   │  │ histogram │  │ Histogram │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    fruit-db (Database Layer)                    │   │
//! │  │              MySQL queries, schema introspection                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Fruit row types
//! - [`snapshot`] - Column-typed table snapshot and table schema
//! - [`validation`] - Interactive input parsing and validation
//! - [`pattern`] - `LIKE` pattern building for substring search
//! - [`stats`] - Mean, value counts, histogram bins, density estimate
//! - [`chart`] - Chart specifications handed to a renderer
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod chart;
pub mod error;
pub mod pattern;
pub mod snapshot;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use chart::ChartSpec;
pub use error::{CoreError, ValidationError};
pub use snapshot::{Column, ColumnInfo, ColumnType, TableSchema, TableSnapshot, Value};
pub use types::{Fruit, NewFruit};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the table this client works against.
///
/// The schema is owned by the database; this client never creates or
/// migrates it.
pub const FRUITS_TABLE: &str = "fruits";

/// Column searched by the substring search.
pub const NAME_COLUMN: &str = "name";

/// Columns the inserter writes, in the order they are prompted for.
pub const INSERT_COLUMNS: [&str; 4] = ["name", "category", "price", "stock"];
