// src/macros.rs

/// Logs a line under a component target.
/// Usage:
/// ```ignore
/// pruner_log!(Level::Info, "orchestrator", "Run started");
/// pruner_log!(Level::Error, "config", "Config load failed: {}", err);
/// ```
/// The `fern` dispatcher set up in `main.rs` renders it like:
/// [2025-04-25T16:32:10+02:00][INFO ][orchestrator][pid=4568][tid=ThreadId(1)] Run started
#[macro_export]
macro_rules! pruner_log {
    ($level:expr, $component:expr, $($arg:tt)+) => {
        log::log!(target: $component, $level, $($arg)+)
    };
}
