//! Option 2: add a fruit from four prompted fields.
//!
//! Price and stock are parsed before anything is sent to the database, so a
//! typo never costs a round-trip and never leaves a row behind.

use std::io::{BufRead, Write};

use fruit_core::validation::parse_new_fruit;
use fruit_db::FruitStore;
use tracing::info;

use crate::error::ActionResult;
use crate::prompt::Console;

/// Prompts for a fruit, inserts it and returns the new identifier.
pub async fn insert<S, R, W>(store: &S, console: &mut Console<R, W>) -> ActionResult<i64>
where
    S: FruitStore,
    R: BufRead,
    W: Write,
{
    writeln!(console.output())?;
    writeln!(console.output(), "=== ADD NEW FRUIT ===")?;

    let name = console.ask("Fruit name: ")?;
    let category = console.ask("Fruit category: ")?;
    let price = console.ask("Price: ")?;
    let stock = console.ask("Stock: ")?;

    let fruit = parse_new_fruit(&name, &category, &price, &stock)?;
    let id = store.insert(&fruit).await?;
    info!(id, name = %fruit.name, "Fruit added from menu");

    let out = console.output();
    writeln!(out)?;
    writeln!(out, "Fruit '{}' added successfully!", fruit.name)?;
    writeln!(out, "New fruit ID: {id}")?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{console, output, MemoryStore};
    use crate::error::ActionError;
    use fruit_core::{Fruit, ValidationError};

    #[tokio::test]
    async fn test_insert_mango() {
        let store = MemoryStore::sample();
        let previous_max = store.fruits().iter().map(|f| f.id).max().unwrap();

        let mut console = console("Mango\nTropical\n15000\n50\n");
        let id = insert(&store, &mut console).await.unwrap();

        assert_eq!(id, previous_max + 1);
        let mangoes: Vec<Fruit> = store
            .fruits()
            .into_iter()
            .filter(|f| f.name == "Mango")
            .collect();
        assert_eq!(
            mangoes,
            vec![Fruit {
                id,
                name: "Mango".to_string(),
                category: "Tropical".to_string(),
                price: 15000,
                stock: 50,
            }]
        );

        let text = output(console);
        assert!(text.contains("Fruit 'Mango' added successfully!"));
        assert!(text.contains(&format!("New fruit ID: {id}")));
    }

    #[tokio::test]
    async fn test_non_numeric_price_inserts_nothing() {
        let store = MemoryStore::sample();
        let mut console = console("Mango\nTropical\nfifteen\n50\n");

        let err = insert(&store, &mut console).await.unwrap_err();

        assert!(matches!(
            err,
            ActionError::Validation(ValidationError::NotANumber { .. })
        ));
        assert_eq!(err.to_string(), "price and stock must be numbers");
        assert_eq!(store.fruits().len(), 3);
    }

    #[tokio::test]
    async fn test_non_numeric_stock_inserts_nothing() {
        let store = MemoryStore::sample();
        let mut console = console("Mango\nTropical\n15000\n5.5\n");

        let err = insert(&store, &mut console).await.unwrap_err();
        assert_eq!(err.to_string(), "price and stock must be numbers");
        assert_eq!(store.fruits().len(), 3);
    }

    #[tokio::test]
    async fn test_database_failure_is_reported() {
        let store = MemoryStore::sample();
        store.fail_queries();
        let mut console = console("Mango\nTropical\n15000\n50\n");

        let err = insert(&store, &mut console).await.unwrap_err();
        assert!(matches!(err, ActionError::Database(_)));
    }

    #[tokio::test]
    async fn test_input_closed_mid_prompt() {
        let store = MemoryStore::sample();
        let mut console = console("Mango\n");

        let err = insert(&store, &mut console).await.unwrap_err();
        assert!(matches!(err, ActionError::InputClosed));
        assert_eq!(store.fruits().len(), 3);
    }
}
