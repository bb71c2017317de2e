//! # Menu Actions
//!
//! One module per menu option. Every action receives the store explicitly
//! and returns an [`ActionResult`]; none of them exits the program.
//!
//! ## Action Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Option  Action      Store call          Output                        │
//! │  ──────  ──────────  ──────────────────  ───────────────────────────── │
//! │  1       list        fetch_all           full table + row count        │
//! │  2       insert      insert              new identifier                │
//! │  3       mean        fetch_all           mean of one numeric column    │
//! │  4       visualize   fetch_all           modal chart                   │
//! │  5       search      search_by_name      matches, or "not found"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod insert;
pub mod list;
pub mod mean;
pub mod search;
pub mod visualize;

use std::io::Write;

use fruit_core::TableSnapshot;

/// Writes a 1-based numbered list of the columns at `indices`.
fn print_column_choices<W: Write>(
    out: &mut W,
    heading: &str,
    snapshot: &TableSnapshot,
    indices: &[usize],
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{heading}")?;
    for (position, &index) in indices.iter().enumerate() {
        writeln!(out, "{}. {}", position + 1, snapshot.columns()[index].name)?;
    }
    Ok(())
}
