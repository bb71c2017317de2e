//! # Validation Module
//!
//! Parsing and validation of interactive input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (before any database round-trip)                 │
//! │  ├── price / stock must parse as integers                              │
//! │  ├── name must not be empty                                            │
//! │  └── menu / column choices must name an offered option                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (MySQL)                                             │
//! │  ├── NOT NULL / column width                                           │
//! │  └── UNIQUE and other constraints the schema owns                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fruit_core::validation::{parse_choice, parse_new_fruit};
//!
//! let fruit = parse_new_fruit("Mango", "Tropical", "15000", "50").unwrap();
//! assert_eq!(fruit.price, 15000);
//!
//! // "2" out of three options is the second option (0-based index 1)
//! assert_eq!(parse_choice("2", 3).unwrap(), 1);
//! assert!(parse_choice("4", 3).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::NewFruit;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted fruit name.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted search term.
pub const MAX_SEARCH_LEN: usize = 100;

// =============================================================================
// Fruit Input
// =============================================================================

/// Builds a [`NewFruit`] from the four raw prompt answers.
///
/// Price and stock are checked first so that a bad number is always
/// reported as "price and stock must be numbers", regardless of the name.
pub fn parse_new_fruit(
    name: &str,
    category: &str,
    price: &str,
    stock: &str,
) -> ValidationResult<NewFruit> {
    let price = parse_integer("price", price)?;
    let stock = parse_integer("stock", stock)?;
    validate_fruit_name(name)?;

    Ok(NewFruit {
        name: name.trim().to_string(),
        category: category.trim().to_string(),
        price,
        stock,
    })
}

/// Validates a fruit name.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_fruit_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Parses a whole number, tolerating surrounding whitespace.
pub fn parse_integer(field: &str, input: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
            input: input.to_string(),
        })
}

// =============================================================================
// Choices
// =============================================================================

/// Resolves a 1-based selection among `count` options to a 0-based index.
///
/// ## Example
/// ```rust
/// use fruit_core::validation::parse_choice;
///
/// assert_eq!(parse_choice(" 1 ", 2).unwrap(), 0);
/// assert!(parse_choice("0", 2).is_err());
/// assert!(parse_choice("one", 2).is_err());
/// ```
pub fn parse_choice(input: &str, count: usize) -> ValidationResult<usize> {
    let invalid = || ValidationError::InvalidChoice {
        input: input.trim().to_string(),
        max: count,
    };

    let position: usize = input.trim().parse().map_err(|_| invalid())?;
    if position == 0 || position > count {
        return Err(invalid());
    }

    Ok(position - 1)
}

// =============================================================================
// Search
// =============================================================================

/// Validates a search term and returns it trimmed.
///
/// An empty term is allowed and matches every row.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    let term = term.trim();

    if term.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search term".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(term.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
