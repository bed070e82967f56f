// crates/adpost-ui/src/helpers/log.rs
//
// Logging setup for the binary.
//
// In release builds with `windows_subsystem = "windows"` (double-click launch)
// there is no console attached, so stderr output is silently discarded.
// The tracing subscriber writes to a temp file instead so logs are visible
// regardless of launch mode.
//
// File:   %TEMP%\adpost.log (see paths::log_file) — append-only.
// Filter: ADPOST_LOG, EnvFilter syntax. Default `info`.
//
// Every crate logs through `tracing` with an `[area]` prefix:
//   tracing::info!("[submit] saved");
//   tracing::warn!("[form] {e}");

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::paths::log_file;

pub const FILTER_ENV: &str = "ADPOST_LOG";

/// Install the global subscriber. Falls back to stderr when the log file
/// can't be opened. Never panics; a second call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env(FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let path = log_file();
    let installed = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        Err(e) => {
            eprintln!("[log] cannot open {}: {e}", path.display());
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init()
        }
    };

    if installed.is_ok() {
        tracing::info!("[app] session start, logging to {}", path.display());
    }
}
