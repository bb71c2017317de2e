//! # Table Snapshot
//!
//! A column-typed, in-memory copy of one query result.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu action starts                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT * FROM fruits  ──►  TableSnapshot { columns, rows }            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  print / mean / chart                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Menu action ends  ──►  snapshot dropped (no cross-action cache)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Column types come from the table schema rather than from the rows, so an
//! empty table still knows which of its columns are numeric.

use std::fmt;

// =============================================================================
// Value
// =============================================================================

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the cell. Text that parses as a number counts too.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(s) => s.trim().parse().ok(),
            Value::Null => None,
        }
    }

    /// Label view of the cell, used for value counts.
    pub fn as_label(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

// =============================================================================
// Column Type
// =============================================================================

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    /// Anything treated as a discrete label (strings, dates, enums).
    Text,
}

impl ColumnType {
    /// Maps a MySQL type name to a semantic type.
    ///
    /// Accepts both `information_schema.DATA_TYPE` values (`int`) and full
    /// column types (`int(11) unsigned`).
    ///
    /// ## Example
    /// ```rust
    /// use fruit_core::ColumnType;
    ///
    /// assert_eq!(ColumnType::from_sql_type("INT UNSIGNED"), ColumnType::Integer);
    /// assert_eq!(ColumnType::from_sql_type("decimal(10,2)"), ColumnType::Float);
    /// assert_eq!(ColumnType::from_sql_type("varchar(50)"), ColumnType::Text);
    /// ```
    pub fn from_sql_type(sql_type: &str) -> Self {
        let lowered = sql_type.trim().to_ascii_lowercase();
        let base = lowered
            .split(|c: char| c == '(' || c.is_whitespace())
            .next()
            .unwrap_or_default();

        match base {
            "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "bit"
            | "bool" | "boolean" | "year" => ColumnType::Integer,
            "decimal" | "numeric" | "float" | "double" | "real" => ColumnType::Float,
            _ => ColumnType::Text,
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Column as seen in a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Column {
            name: name.into(),
            column_type,
        }
    }
}

/// Column as described by `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Raw MySQL data type (`int`, `varchar`, ...).
    pub data_type: String,
    pub nullable: bool,
    pub auto_increment: bool,
}

impl ColumnInfo {
    pub fn column_type(&self) -> ColumnType {
        ColumnType::from_sql_type(&self.data_type)
    }
}

/// Live column structure of one table, in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    /// Finds a column by name (MySQL column names are case-insensitive).
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Result-set columns for a `SELECT *` over this table.
    pub fn result_columns(&self) -> Vec<Column> {
        self.columns
            .iter()
            .map(|c| Column::new(c.name.clone(), c.column_type()))
            .collect()
    }
}

// =============================================================================
// Table Snapshot
// =============================================================================

/// Rows and typed columns fetched by a single read.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

impl TableSnapshot {
    /// Creates a snapshot. Every row must have one value per column.
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        TableSnapshot { columns, rows }
    }

    /// A snapshot with headers but no rows.
    pub fn empty(columns: Vec<Column>) -> Self {
        TableSnapshot {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Indices of integer and floating-point columns, in table order.
    pub fn numeric_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.column_type.is_numeric())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Indices of every column except the first (the identifier).
    pub fn chartable_columns(&self) -> Vec<usize> {
        (1..self.columns.len()).collect()
    }

    /// Non-null numeric values of a column.
    pub fn numeric_values(&self, column: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column).and_then(Value::as_f64))
            .collect()
    }

    /// Non-null values of a column rendered as labels.
    pub fn labels(&self, column: usize) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column).and_then(Value::as_label))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
