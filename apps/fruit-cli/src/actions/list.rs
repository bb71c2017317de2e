//! Option 1: print the whole table.

use std::io::Write;

use fruit_db::FruitStore;
use tracing::debug;

use crate::display::print_table;
use crate::error::ActionResult;

/// Prints every row and column. Returns the number of rows shown.
pub async fn list<S, W>(store: &S, out: &mut W) -> ActionResult<usize>
where
    S: FruitStore,
    W: Write,
{
    let snapshot = store.fetch_all().await?;
    debug!(rows = snapshot.row_count(), "Listing fruits");

    print_table(out, "FRUIT DATA", &snapshot)?;
    Ok(snapshot.row_count())
}
