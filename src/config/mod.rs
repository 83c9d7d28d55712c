//! Public API for configuration

pub mod loader;
pub mod model;

// Re-export the main entrypoints:
pub use loader::{load_config, load_or_default, CONFIG_FILE_NAME};
pub use model::{ConfigError, LoggingConfig, MainTarget, PrunerConfig, SitesTarget, TableSchema};
