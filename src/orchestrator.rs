// src/orchestrator.rs

//! Two-stage maintenance run.
//!
//! 1. Main database: prune + compact, failures recorded but not fatal
//! 2. Site databases: prune + compact each one as the walk of the sites root
//!    reaches it; only a failed directory walk aborts the run

use crate::config::{PrunerConfig, TableSchema};
use crate::db::{process_database, PruneError};
use crate::discovery::find_site_databases;
use crate::pruner_log;
use log::Level;
use std::{fmt, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    Main,
    Site,
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseKind::Main => f.write_str("main database"),
            DatabaseKind::Site => f.write_str("site database"),
        }
    }
}

/// Result of maintaining one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub kind:   DatabaseKind,
    pub path:   PathBuf,
    pub result: Result<usize, PruneError>,
}

/// Outcomes in processing order: main first, then sites in walk order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn rows_deleted(&self) -> usize {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok()).sum()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Process one file and log how it went.
fn process_target(kind: DatabaseKind, path: PathBuf, schema: &TableSchema) -> FileOutcome {
    let result = process_database(&path, schema);
    match &result {
        Ok(deleted) => pruner_log!(
            Level::Info,
            "orchestrator",
            "{} {}: removed {} {} row(s) and compacted",
            kind,
            path.display(),
            deleted,
            schema.table
        ),
        Err(e) => pruner_log!(Level::Error, "orchestrator", "{} {}: {}", kind, path.display(), e),
    }
    FileOutcome { kind, path, result }
}

/// Run both stages. Per-file failures end up in the report; a traversal
/// failure is returned as `Err`, after the main database and every site
/// reached before the failing directory have been processed.
pub fn run(cfg: &PrunerConfig) -> Result<RunReport, PruneError> {
    let mut report = RunReport::default();

    // 1 ─ Main database
    report.outcomes.push(process_target(
        DatabaseKind::Main,
        cfg.main.path.clone(),
        &cfg.main.schema(),
    ));

    // 2 ─ Site databases
    pruner_log!(Level::Info, "orchestrator", "Scanning {:?} for {}", cfg.sites.root, cfg.sites.file_name);
    let schema = cfg.sites.schema();
    find_site_databases(&cfg.sites.root, &cfg.sites.file_name, |path| {
        report.outcomes.push(process_target(DatabaseKind::Site, path, &schema));
    })?;

    pruner_log!(
        Level::Info,
        "orchestrator",
        "Done: {} database(s) processed, {} failed, {} row(s) removed",
        report.succeeded(),
        report.outcomes.len() - report.succeeded(),
        report.rows_deleted()
    );
    Ok(report)
}
