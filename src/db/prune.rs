// src/db/prune.rs
//! Halving a log table, oldest rows first.

use crate::config::TableSchema;
use rusqlite::Connection;

/// Single-statement delete: the COUNT, the ordering and the DELETE all see
/// the same table state.
///
/// Identifiers are bracket-quoted. A double-quoted name that resolves to no
/// column silently becomes a string literal in SQLite; a bracketed one is
/// always "no such column".
pub fn prune_sql(schema: &TableSchema) -> String {
    let t = &schema.table;
    let c = &schema.timestamp_column;
    format!(
        "DELETE FROM [{t}] \
         WHERE rowid IN ( \
             SELECT rowid FROM [{t}] \
             ORDER BY [{c}] ASC \
             LIMIT (SELECT COUNT(*) / 2 FROM [{t}]) \
         )"
    )
}

/// Delete the `floor(n / 2)` rows with the smallest timestamps and return how
/// many the engine reports as removed.
pub fn prune_oldest_half(conn: &Connection, schema: &TableSchema) -> rusqlite::Result<usize> {
    conn.execute(&prune_sql(schema), [])
}
