// crates/adpost-ui/src/paths.rs
// Single source of truth for where AdPost keeps its config and log.

use std::path::PathBuf;

/// `%APPDATA%\AdPost` on Windows, `~/.config/AdPost` elsewhere.
pub fn app_config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    let base = std::env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());
    #[cfg(not(target_os = "windows"))]
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|_| std::env::temp_dir());
    base.join("AdPost")
}

pub fn config_file() -> PathBuf {
    app_config_dir().join("config.json")
}

/// Append-only session log in the OS temp directory.
pub fn log_file() -> PathBuf {
    std::env::temp_dir().join("adpost.log")
}
