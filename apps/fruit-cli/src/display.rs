//! Table output.
//!
//! Snapshots are printed as UTF-8 box tables followed by a row count footer.
//! Every row and column is shown; there is no pagination.

use std::io::{self, Write};

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, ContentArrangement, Table};
use fruit_core::{TableSnapshot, Value};

/// Builds the printable table for `snapshot`.
pub fn render_table(snapshot: &TableSnapshot) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(snapshot.columns().iter().map(|c| Cell::new(&c.name)));

    for row in snapshot.rows() {
        table.add_row(row.iter().map(format_cell));
    }

    table
}

fn format_cell(value: &Value) -> Cell {
    let cell = Cell::new(value);
    match value {
        Value::Int(_) | Value::Float(_) => cell.set_alignment(CellAlignment::Right),
        Value::Null | Value::Text(_) => cell,
    }
}

/// Prints a heading, the table and a row count footer.
pub fn print_table<W: Write>(out: &mut W, heading: &str, snapshot: &TableSnapshot) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {heading} ===")?;
    writeln!(out, "{}", render_table(snapshot))?;
    writeln!(out, "{}", row_count_footer(snapshot.row_count()))
}

/// "1 row in set" / "N rows in set".
pub fn row_count_footer(count: usize) -> String {
    let noun = if count == 1 { "row" } else { "rows" };
    format!("{count} {noun} in set")
}
