// src/db/connection.rs
//! Opening existing SQLite files for maintenance.

use rusqlite::{Connection, OpenFlags};
use std::{path::Path, time::Duration};

/// Open an existing database read-write. Never creates the file, and leaves
/// its journal mode alone since the logging side owns that setting.
pub fn open_database(path: &Path) -> rusqlite::Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)?;
    conn.busy_timeout(Duration::from_millis(1_000))?;
    Ok(conn)
}
