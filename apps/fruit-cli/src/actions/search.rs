//! Option 5: substring search on the fruit name.

use std::io::{BufRead, Write};

use fruit_core::validation::validate_search_term;
use fruit_core::TableSnapshot;
use fruit_db::FruitStore;

use crate::display::print_table;
use crate::error::ActionResult;
use crate::prompt::Console;

/// Outcome of a search. Zero matches is a result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    NotFound,
    Found(TableSnapshot),
}

/// Reads a term and prints the fruits whose name contains it.
pub async fn search<S, R, W>(store: &S, console: &mut Console<R, W>) -> ActionResult<SearchOutcome>
where
    S: FruitStore,
    R: BufRead,
    W: Write,
{
    let input = console.ask("Enter a fruit name to search for: ")?;
    let term = validate_search_term(&input)?;

    let matches = store.search_by_name(&term).await?;
    let out = console.output();

    if matches.is_empty() {
        writeln!(out)?;
        writeln!(out, "Fruit '{term}' not found")?;
        return Ok(SearchOutcome::NotFound);
    }

    print_table(out, "SEARCH RESULTS", &matches)?;
    Ok(SearchOutcome::Found(matches))
}
