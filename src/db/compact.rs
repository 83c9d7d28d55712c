// src/db/compact.rs

use rusqlite::Connection;

/// Rebuild the whole file so pages freed by the prune go back to the OS.
pub fn compact(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("VACUUM")
}
