//! Dashboard Configuration
//!
//! Persisted settings read from `miso-dash.toml` in the config directory.

use crate::constants::{
    API_URL_ENV, DEFAULT_API_BASE_URL, POLL_INTERVAL_SECS, REQUEST_TIMEOUT_SECS,
};
use crate::domain::PageSize;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

const CONFIG_FILE_NAME: &str = "miso-dash.toml";

/// Get the config file path, writing defaults on first run
fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        let defaults = toml::to_string_pretty(&DashConfig::default())?;
        std::fs::write(&path, defaults)?;
        info!(path = ?path, "Wrote default config file");
    }
    Ok(path)
}

/// Dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Backend base URL, e.g. `http://localhost:8000`
    pub api_base_url: String,
    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,
    /// Rows per page on startup (5, 10 or 15)
    pub default_page_size: PageSize,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            poll_interval_secs: POLL_INTERVAL_SECS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            default_page_size: PageSize::default(),
        }
    }
}

impl DashConfig {
    /// Parse config text; empty text yields defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Load from the config file and apply the environment override
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        let config = Self::from_toml(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })?;

        Ok(config.with_base_url_override(std::env::var(API_URL_ENV).ok()))
    }

    /// Load, falling back to defaults when the file is unusable
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Using default configuration");
            Self::default().with_base_url_override(std::env::var(API_URL_ENV).ok())
        })
    }

    /// Replace the base URL when an override is present and non-empty
    pub fn with_base_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            info!(url = %url, "Base URL overridden from environment");
            self.api_base_url = url;
        }
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
