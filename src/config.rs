//! Client configuration: service base URL and request timeout.
//!
//! Base URL selection is a deployment concern: `local()` for a dev server,
//! otherwise whatever `settings.json` or `EDU_TRANSCRIBE_BASE_URL` says.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default dev server, matching the backend's local port.
pub const LOCAL_BASE_URL: &str = "http://localhost:5000";

/// Environment variable overriding the configured base URL.
pub const BASE_URL_ENV: &str = "EDU_TRANSCRIBE_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    LOCAL_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Configuration pointing at a local dev server.
    pub fn local() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.base_url = base_url.into();
        config.normalize();
        config
    }

    /// Load from a settings file, falling back to defaults when the file is
    /// missing or unreadable. `EDU_TRANSCRIBE_BASE_URL` wins over the file.
    pub fn load(path: &Path) -> Self {
        let mut config: Self = std::fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config.normalize();
        config
    }

    /// Load from the default settings path (platform config dir).
    pub fn load_default() -> Self {
        Self::load(&crate::paths::settings_path())
    }

    fn normalize(&mut self) {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
    }
}
