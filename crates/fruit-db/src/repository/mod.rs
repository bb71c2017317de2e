//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu action                                                           │
//! │       │                                                                 │
//! │       │  store.search_by_name("ppl")                                   │
//! │       ▼                                                                 │
//! │  FruitStore (trait)                                                    │
//! │  ├── fetch_all(&self)                                                  │
//! │  ├── search_by_name(&self, term)                                       │
//! │  └── insert(&self, fruit)                                              │
//! │       │                                                                 │
//! │       ├──► FruitRepository  (MySQL, this crate)                        │
//! │       └──► in-memory store  (fruit-cli tests)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Actions are generic over [`FruitStore`], so the menu logic is tested
//! without a running server.

pub mod fruit;

use fruit_core::{NewFruit, TableSnapshot};

use crate::error::DbResult;

/// Read/write access to the fruits table.
#[allow(async_fn_in_trait)]
pub trait FruitStore {
    /// Every row and column of the table.
    async fn fetch_all(&self) -> DbResult<TableSnapshot>;

    /// Rows whose name contains `term` (database `LIKE` semantics).
    async fn search_by_name(&self, term: &str) -> DbResult<TableSnapshot>;

    /// Inserts one row and returns the identifier the database assigned.
    async fn insert(&self, fruit: &NewFruit) -> DbResult<i64>;
}
