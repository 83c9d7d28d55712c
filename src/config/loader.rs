// src/config/loader.rs

//! # Configuration Loader
//!
//! Reads `reqlog-pruner.toml` and deserializes it into `PrunerConfig`.
//! Every key is optional; a missing file means "use the built-in targets".

use crate::config::model::{ConfigError, PrunerConfig};
use crate::pruner_log;
use log::Level;
use std::{fs, io, path::Path};

/// Expected next to the executable.
pub const CONFIG_FILE_NAME: &str = "reqlog-pruner.toml";

/// Load, parse and validate the configuration at `path`.
pub fn load_config(path: &Path) -> Result<PrunerConfig, ConfigError> {
    pruner_log!(Level::Debug, "config", "Reading config from {:?}", path);
    let txt = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse_config(&txt)?;
    pruner_log!(Level::Info, "config", "Loaded config from {:?}", path);
    Ok(cfg)
}

/// Like [`load_config`], but a file that does not exist yields the defaults.
pub fn load_or_default(path: &Path) -> Result<PrunerConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            pruner_log!(Level::Debug, "config", "No config at {:?}, using defaults", path);
            Ok(PrunerConfig::default())
        }
        other => other,
    }
}

/// Parse and validate TOML text.
pub fn parse_config(txt: &str) -> Result<PrunerConfig, ConfigError> {
    let cfg: PrunerConfig = toml::from_str(txt)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.main.table, "req_logs");
        assert_eq!(cfg.sites.table, "site_req_logs");
        assert!(!cfg.logging.enable);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let cfg = parse_config(
            r#"
            [main]
            path = "/tmp/req_log.db"

            [sites]
            root = "/tmp/sites"
            timestamp_column = "created_at"

            [logging]
            enable = true
            file = "pruner.log"
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.main.path, PathBuf::from("/tmp/req_log.db"));
        assert_eq!(cfg.main.timestamp_column, "localtime");
        assert_eq!(cfg.sites.root, PathBuf::from("/tmp/sites"));
        assert_eq!(cfg.sites.file_name, "site_req_logs.db");
        assert_eq!(cfg.sites.timestamp_column, "created_at");
        assert_eq!(cfg.logging.file.as_deref(), Some("pruner.log"));
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn malformed_toml_is_reported() {
        assert!(matches!(parse_config("[main\npath = 1"), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_identifier_fails_parse() {
        let err = parse_config("[main]\ntable = \"req-logs\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIdentifier { field: "main.table", .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(cfg.sites.file_name, "site_req_logs.db");
    }

    #[test]
    fn existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[sites]\nfile_name = \"logs.db\"\n").unwrap();
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg.sites.file_name, "logs.db");
    }
}
