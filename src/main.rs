// src/main.rs

//! Request-log pruner entry-point.
//!
//! 1. Load `reqlog-pruner.toml` next to the executable (defaults if absent)
//! 2. Set up logging
//! 3. Halve + VACUUM the main database, then every site database
//! 4. Exit non-zero only if setup failed or the sites directory could not be walked
//!

// ───── std / 3rd-party imports ──────────────────────────────────────────────
use anyhow::Context;
use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::{
    path::{Path, PathBuf},
    process::{self, ExitCode},
    thread,
};

// ───── local imports ────────────────────────────────────────────────────────
use reqlog_pruner::config::{load_or_default, PrunerConfig, CONFIG_FILE_NAME};
use reqlog_pruner::orchestrator;

// ───── helpers ──────────────────────────────────────────────────────────────

/// Print an error with context and terminate the process.
macro_rules! fatal {
    ($ctx:expr, $($arg:tt)+) => {{
        eprintln!(
            "[{}][ERROR][{}] {}",
            chrono::Local::now().to_rfc3339(),
            $ctx,
            format!($($arg)+)
        );
        std::process::exit(1);
    }};
}

/// Directory that contains the running executable.
fn exe_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot determine executable path")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("executable must live in some directory")
}

fn load_cfg() -> anyhow::Result<(PathBuf, PrunerConfig)> {
    let dir = exe_dir()?;
    let path = dir.join(CONFIG_FILE_NAME);
    let cfg = load_or_default(&path).with_context(|| format!("loading {}", path.display()))?;
    Ok((dir, cfg))
}

/// Configure global logging as requested in `cfg.logging`.
fn setup_logging(exe_dir: &Path, cfg: &PrunerConfig) -> Result<(), fern::InitError> {
    let level = match cfg.logging.level.to_uppercase().as_str() {
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    let log_path = cfg
        .logging
        .enable
        .then(|| exe_dir.join(cfg.logging.file.as_deref().unwrap_or("reqlog-pruner.log")));

    let mut dispatch = Dispatch::new()
        .format(|out, msg, record| {
            out.finish(format_args!(
                "[{}][{:5}][{}][pid={}][tid={:?}] {}",
                Local::now().to_rfc3339(),
                record.level(),
                record.target(),
                process::id(),
                thread::current().id(),
                msg
            ))
        })
        .level(level)
        .chain(
            Dispatch::new()
                .filter(|meta| meta.level() > log::Level::Warn)
                .chain(std::io::stdout()),
        )
        .chain(Dispatch::new().level(LevelFilter::Warn).chain(std::io::stderr()));

    if let Some(path) = log_path {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}

/// Both stages; only a failed walk of the sites root is a failure exit.
fn prune_all(cfg: &PrunerConfig) -> ExitCode {
    match orchestrator::run(cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Aborting: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    // 1 ─ Config
    let (exe_dir, cfg) = load_cfg().unwrap_or_else(|e| fatal!("config", "{:#}", e));

    // 2 ─ Logging
    setup_logging(&exe_dir, &cfg).unwrap_or_else(|e| fatal!("logging", "{}", e));
    log::info!("Pruning request logs (main={}, sites={})", cfg.main.path.display(), cfg.sites.root.display());

    // 3 ─ Both stages
    prune_all(&cfg)
}
