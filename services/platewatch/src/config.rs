//! Configuration types for the platewatch service

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides the configured backend API key
pub const API_KEY_ENV: &str = "PLATEWATCH_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Hosted backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://example.supabase.co`
    pub url: String,
    /// Public (anon) API key; may instead come from `PLATEWATCH_API_KEY`
    #[serde(default)]
    pub api_key: String,
}

/// Dashboard server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_port")]
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: default_dashboard_port(),
        }
    }
}

fn default_dashboard_port() -> u16 {
    8088
}

impl Config {
    /// Resolve secrets from the environment.
    ///
    /// The anon key is public by design but still does not belong in source
    /// or version-controlled config, so `PLATEWATCH_API_KEY` takes
    /// precedence over the config file. An empty key is a configuration
    /// error either way.
    pub fn resolve_secrets(&mut self) -> crate::Result<()> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            self.backend.api_key = key;
        }
        if self.backend.api_key.is_empty() {
            return Err(crate::PlatewatchError::Config(format!(
                "Backend API key is not set; provide backend.api_key or {}",
                API_KEY_ENV
            )));
        }
        Ok(())
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::PlatewatchError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
