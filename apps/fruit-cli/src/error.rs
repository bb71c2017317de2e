//! # Action Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Menu Loop                          │
//! │                                                                         │
//! │  Action (list / insert / mean / visualize / search)                    │
//! │  Result<T, ActionError>                                                │
//! │         │                                                               │
//! │         ├── ValidationError ─── "price and stock must be numbers" ──┐  │
//! │         ├── CoreError ───────── "No data in column 'price'" ────────┤  │
//! │         ├── DbError ─────────── "Database error: ..." ──────────────┤  │
//! │         ├── Render ──────────── "Chart error: ..." ─────────────────┤  │
//! │         │                                                           ▼  │
//! │         │                                          print, re-prompt    │
//! │         │                                                               │
//! │         ├── InputClosed ─────── stdin reached EOF ──► leave the loop   │
//! │         └── Io ──────────────── stdout is gone ─────► leave the loop   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use fruit_core::{CoreError, ValidationError};
use fruit_db::DbError;
use thiserror::Error;

/// Error returned by a menu action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Bad interactive input. No database round-trip happened.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The loaded table cannot support the request.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Query or connection failure.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// The chart viewer could not be opened or restored.
    #[error("Chart error: {0}")]
    Render(#[source] io::Error),

    /// Standard input ended in the middle of an action.
    #[error("input closed")]
    InputClosed,

    /// Writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ActionError {
    /// Whether the menu loop can keep going after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ActionError::InputClosed | ActionError::Io(_))
    }
}

/// Result type for menu actions.
pub type ActionResult<T> = Result<T, ActionError>;
