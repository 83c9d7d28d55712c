// src/db/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while maintaining one database, or while
/// looking for them.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("cannot open database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("cannot prune {table} in {}: {source}", path.display())]
    Execution {
        path: PathBuf,
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("cannot compact {}: {source}", path.display())]
    Compaction {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("cannot walk {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PruneError {
    /// Only a failed directory walk stops the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PruneError::Traversal { .. })
    }
}
