//! # Domain Types
//!
//! The fruit row and its insert-side counterpart.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NewFruit (from prompts)            Fruit (from database)              │
//! │  ─────────────────────              ─────────────────────              │
//! │  name                      INSERT   id        ← AUTO_INCREMENT         │
//! │  category                  ──────►  name                               │
//! │  price                              category                           │
//! │  stock                              price / stock                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The identifier is assigned by the database and never changes afterwards.

use crate::snapshot::Value;

// =============================================================================
// New Fruit
// =============================================================================

/// A fruit that has been validated but not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFruit {
    /// Display name, matched by the substring search.
    pub name: String,

    /// Free-text grouping (e.g. "Tropical", "Citrus").
    pub category: String,

    /// Price in whole currency units.
    pub price: i64,

    /// Units in stock.
    pub stock: i64,
}

impl NewFruit {
    /// Values in the order of [`crate::INSERT_COLUMNS`].
    pub fn values(&self) -> [Value; 4] {
        [
            Value::Text(self.name.clone()),
            Value::Text(self.category.clone()),
            Value::Int(self.price),
            Value::Int(self.stock),
        ]
    }

    /// Looks up the value destined for `column`.
    pub fn value_for(&self, column: &str) -> Option<Value> {
        crate::INSERT_COLUMNS
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
            .map(|idx| self.values()[idx].clone())
    }
}

// =============================================================================
// Fruit
// =============================================================================

/// A stored fruit row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fruit {
    /// Database-assigned identifier.
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub stock: i64,
}

impl Fruit {
    /// Attaches a freshly assigned identifier to a new fruit.
    pub fn from_new(id: i64, fruit: NewFruit) -> Self {
        Fruit {
            id,
            name: fruit.name,
            category: fruit.category,
            price: fruit.price,
            stock: fruit.stock,
        }
    }

    /// Row values in table order: id, name, category, price, stock.
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Text(self.name.clone()),
            Value::Text(self.category.clone()),
            Value::Int(self.price),
            Value::Int(self.stock),
        ]
    }
}
