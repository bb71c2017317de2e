//! # Schema Introspection
//!
//! Reads the live column structure of a table from `information_schema`.
//!
//! The client never assumes a fixed layout: both the insert statement and
//! the column types of every snapshot come from what the server reports.
//! Text columns are cast to `CHAR` because some MySQL 8 builds report
//! `information_schema` columns with a binary collation.

use sqlx::mysql::MySqlPool;
use sqlx::FromRow;
use tracing::debug;

use crate::error::{DbError, DbResult};
use fruit_core::{ColumnInfo, TableSchema};

#[derive(Debug, FromRow)]
struct ColumnRow {
    column_name: String,
    data_type: String,
    is_nullable: String,
    extra: String,
}

impl From<ColumnRow> for ColumnInfo {
    fn from(row: ColumnRow) -> Self {
        ColumnInfo {
            name: row.column_name,
            data_type: row.data_type,
            nullable: row.is_nullable.eq_ignore_ascii_case("YES"),
            auto_increment: row.extra.to_ascii_lowercase().contains("auto_increment"),
        }
    }
}

/// Introspects `table` in the connection's current database.
///
/// ## Returns
/// * `Ok(TableSchema)` - Columns in ordinal order
/// * `Err(DbError::NotFound)` - The table does not exist
pub async fn introspect_table(pool: &MySqlPool, table: &str) -> DbResult<TableSchema> {
    debug!(table = %table, "Introspecting table schema");

    let rows = sqlx::query_as::<_, ColumnRow>(
        r#"
        SELECT
            CAST(COLUMN_NAME AS CHAR) AS column_name,
            CAST(DATA_TYPE AS CHAR)   AS data_type,
            CAST(IS_NULLABLE AS CHAR) AS is_nullable,
            CAST(EXTRA AS CHAR)       AS extra
        FROM information_schema.columns
        WHERE table_schema = DATABASE() AND table_name = ?
        ORDER BY ORDINAL_POSITION
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        return Err(DbError::not_found("Table", table));
    }

    let schema = TableSchema {
        table: table.to_string(),
        columns: rows.into_iter().map(ColumnInfo::from).collect(),
    };

    debug!(columns = schema.columns.len(), "Schema introspected");
    Ok(schema)
}

/// Quotes an identifier with backticks, doubling embedded backticks.
pub fn quote_ident(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_row_conversion() {
        let info = ColumnInfo::from(ColumnRow {
            column_name: "id".to_string(),
            data_type: "int".to_string(),
            is_nullable: "NO".to_string(),
            extra: "auto_increment".to_string(),
        });
        assert!(info.auto_increment);
        assert!(!info.nullable);

        let info = ColumnInfo::from(ColumnRow {
            column_name: "category".to_string(),
            data_type: "varchar".to_string(),
            is_nullable: "YES".to_string(),
            extra: String::new(),
        });
        assert!(!info.auto_increment);
        assert!(info.nullable);
    }

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("fruits"), "`fruits`");
        assert_eq!(quote_ident("we`ird"), "`we``ird`");
    }
}
