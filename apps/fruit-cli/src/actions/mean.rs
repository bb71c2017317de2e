//! Option 3: mean of a chosen numeric column.

use std::io::{BufRead, Write};

use fruit_core::stats::{mean as column_mean, round_to};
use fruit_core::validation::parse_choice;
use fruit_core::CoreError;
use fruit_db::FruitStore;

use super::print_column_choices;
use crate::error::ActionResult;
use crate::prompt::Console;

/// Outcome of the mean action.
#[derive(Debug, Clone, PartialEq)]
pub struct MeanReport {
    pub column: String,
    /// Rounded to two decimals. `None` when the column has no values.
    pub mean: Option<f64>,
}

/// Lists numeric columns, reads a 1-based choice and prints the mean.
pub async fn mean<S, R, W>(store: &S, console: &mut Console<R, W>) -> ActionResult<MeanReport>
where
    S: FruitStore,
    R: BufRead,
    W: Write,
{
    let snapshot = store.fetch_all().await?;
    let numeric = snapshot.numeric_columns();
    if numeric.is_empty() {
        return Err(CoreError::NoNumericColumns.into());
    }

    print_column_choices(
        console.output(),
        "Numeric columns available:",
        &snapshot,
        &numeric,
    )?;

    let input = console.ask("Choose a column for the mean (enter a number): ")?;
    let index = numeric[parse_choice(&input, numeric.len())?];

    let column = snapshot.columns()[index].name.clone();
    let mean = column_mean(&snapshot.numeric_values(index)).map(|m| round_to(m, 2));

    let out = console.output();
    writeln!(out)?;
    match mean {
        Some(value) => writeln!(out, "Mean of column '{column}': {value:.2}")?,
        None => writeln!(out, "Mean of column '{column}': no data")?,
    }

    Ok(MeanReport { column, mean })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::{console, output, MemoryStore};
    use crate::error::ActionError;
    use fruit_core::ValidationError;

    #[tokio::test]
    async fn test_mean_of_price() {
        let store = MemoryStore::sample();
        // numeric columns: 1. id, 2. price, 3. stock
        let mut console = console("2\n");

        let report = mean(&store, &mut console).await.unwrap();

        assert_eq!(report.column, "price");
        assert_eq!(report.mean, Some(11666.67));

        let text = output(console);
        assert!(text.contains("1. id"));
        assert!(text.contains("2. price"));
        assert!(text.contains("3. stock"));
        assert!(text.contains("Mean of column 'price': 11666.67"));
    }

    #[tokio::test]
    async fn test_mean_of_stock() {
        let store = MemoryStore::sample();
        let mut console = console("3\n");

        let report = mean(&store, &mut console).await.unwrap();
        assert_eq!(report.mean, Some(30.0));
        assert!(output(console).contains("Mean of column 'stock': 30.00"));
    }

    #[tokio::test]
    async fn test_out_of_range_choice() {
        let store = MemoryStore::sample();

        for script in ["0\n", "4\n", "price\n", "\n"] {
            let mut console = console(script);
            let err = mean(&store, &mut console).await.unwrap_err();
            assert!(matches!(
                err,
                ActionError::Validation(ValidationError::InvalidChoice { .. })
            ));
            assert_eq!(err.to_string(), "invalid choice");
        }
    }

    #[tokio::test]
    async fn test_empty_table_reports_no_data() {
        let store = MemoryStore::default();
        let mut console = console("2\n");

        let report = mean(&store, &mut console).await.unwrap();
        assert_eq!(report.mean, None);
        assert!(output(console).contains("Mean of column 'price': no data"));
    }
}
