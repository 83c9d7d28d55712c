// src/config/model.rs

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_MAIN_DB: &str = "/opt/1panel/apps/openresty/openresty/1pwaf/data/db/req_log.db";
const DEFAULT_SITES_ROOT: &str = "/opt/1panel/apps/openresty/openresty/1pwaf/data/db/sites";

/// Top-level runtime config
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrunerConfig {
    pub main:    MainTarget,
    pub sites:   SitesTarget,
    pub logging: LoggingConfig,
}

/// Mirror of the `[logging]` table
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]            pub enable: bool,
    #[serde(default)]            pub file:   Option<String>,
    #[serde(default = "default_level")] pub level: String,
}
fn default_level() -> String { "INFO".into() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { enable: false, file: None, level: default_level() }
    }
}

/// The aggregate request log, `[main]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MainTarget {
    pub path:             PathBuf,
    pub table:            String,
    pub timestamp_column: String,
}

impl Default for MainTarget {
    fn default() -> Self {
        Self {
            path:             PathBuf::from(DEFAULT_MAIN_DB),
            table:            "req_logs".into(),
            timestamp_column: "localtime".into(),
        }
    }
}

/// Per-site request logs found under `root`, `[sites]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitesTarget {
    pub root:             PathBuf,
    pub file_name:        String,
    pub table:            String,
    pub timestamp_column: String,
}

impl Default for SitesTarget {
    fn default() -> Self {
        Self {
            root:             PathBuf::from(DEFAULT_SITES_ROOT),
            file_name:        "site_req_logs.db".into(),
            table:            "site_req_logs".into(),
            timestamp_column: "localtime".into(),
        }
    }
}

/// Table + ordering column handed to the pruner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table:            String,
    pub timestamp_column: String,
}

impl TableSchema {
    pub fn new(table: impl Into<String>, timestamp_column: impl Into<String>) -> Self {
        Self { table: table.into(), timestamp_column: timestamp_column.into() }
    }
}

impl MainTarget {
    pub fn schema(&self) -> TableSchema {
        TableSchema::new(&self.table, &self.timestamp_column)
    }
}

impl SitesTarget {
    pub fn schema(&self) -> TableSchema {
        TableSchema::new(&self.table, &self.timestamp_column)
    }
}

/// All the ways config loading can go wrong
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SQL identifier '{value}' for {field}")]
    InvalidIdentifier { field: &'static str, value: String },

    #[error("sites.file_name must not be empty")]
    EmptyFileName,

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Plain `[A-Za-z_][A-Za-z0-9_]*`; anything else is rejected before it reaches SQL.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl PrunerConfig {
    /// Reject table/column names that cannot be spliced into SQL safely.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let idents = [
            ("main.table", &self.main.table),
            ("main.timestamp_column", &self.main.timestamp_column),
            ("sites.table", &self.sites.table),
            ("sites.timestamp_column", &self.sites.timestamp_column),
        ];
        for (field, value) in idents {
            if !is_valid_identifier(value) {
                return Err(ConfigError::InvalidIdentifier { field, value: value.clone() });
            }
        }
        if self.sites.file_name.is_empty() {
            return Err(ConfigError::EmptyFileName);
        }
        Ok(())
    }
}
