// crates/adpost-ui/src/config.rs
//
// AppConfig: the few knobs that live outside the form.
//
// Read once at startup from paths::config_file(). A missing file means
// defaults; a malformed one is logged and also means defaults, so a bad
// edit never stops the app from opening. Missing keys fall back per field.
// ADPOST_ENDPOINT overrides the endpoint from the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::paths::config_file;

pub const ENDPOINT_ENV: &str = "ADPOST_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/listings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Listings endpoint; receives `POST` with the JSON payload.
    pub endpoint:            String,
    /// Pre-fills "Your name" on the review section.
    pub seller_name:         String,
    /// File dialog filter and drop filter.
    pub accepted_extensions: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint:            DEFAULT_ENDPOINT.to_string(),
            seller_name:         String::new(),
            accepted_extensions: ["jpg", "jpeg", "png", "webp", "gif", "bmp"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl AppConfig {
    /// Startup entry point: file, then environment.
    pub fn load() -> Self {
        Self::load_from(&config_file())
            .with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
    }

    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(cfg)) => {
                info!("[config] loaded {}", path.display());
                cfg
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("[config] {e:#}; using defaults");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cfg = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(cfg))
    }

    /// Blank values are ignored.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            info!("[config] endpoint from {ENDPOINT_ENV}: {endpoint}");
            self.endpoint = endpoint.trim().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_default() {
        let dir = tempdir().unwrap();
        assert_eq!(AppConfig::load_from(&dir.path().join("config.json")), AppConfig::default());
    }

    #[test]
    fn malformed_file_is_default() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ endpoint: nope").unwrap();
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "sellerName": "Tushar Rajput" }"#).unwrap();
        let cfg = AppConfig::load_from(&path);
        assert_eq!(cfg.seller_name, "Tushar Rajput");
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert!(cfg.accepted_extensions.contains(&"webp".to_string()));
    }

    #[test]
    fn endpoint_override() {
        let cfg = AppConfig::default()
            .with_endpoint_override(Some(" https://example.test/listings ".into()));
        assert_eq!(cfg.endpoint, "https://example.test/listings");

        let cfg = AppConfig::default().with_endpoint_override(Some("   ".into()));
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        let cfg = AppConfig::default().with_endpoint_override(None);
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    }
}
