// src/db/mod.rs
//! Public façade for DB helpers (re-exports plus `process_database`).

pub mod connection;
pub mod prune;
pub mod compact;
pub mod error;

use crate::config::TableSchema;
use crate::pruner_log;
use log::Level;
use std::path::Path;

pub use compact::compact;
pub use connection::open_database;
pub use error::PruneError;
pub use prune::prune_oldest_half;

/// Open `path`, drop the oldest half of `schema.table`, then VACUUM.
///
/// The connection lives only for the duration of this call. A failed prune
/// returns early so the file is never compacted after an error.
pub fn process_database(path: &Path, schema: &TableSchema) -> Result<usize, PruneError> {
    let conn = open_database(path).map_err(|source| PruneError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let deleted = prune_oldest_half(&conn, schema).map_err(|source| PruneError::Execution {
        path: path.to_path_buf(),
        table: schema.table.clone(),
        source,
    })?;
    pruner_log!(Level::Debug, "db", "{}: {} row(s) removed from {}", path.display(), deleted, schema.table);

    compact(&conn).map_err(|source| PruneError::Compaction {
        path: path.to_path_buf(),
        source,
    })?;

    if let Err((_, e)) = conn.close() {
        pruner_log!(Level::Warn, "db", "{}: close failed: {}", path.display(), e);
    }
    Ok(deleted)
}
