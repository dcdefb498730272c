use anyhow::Context;
use serde::Deserialize;
use shared::NavConfig;

use super::logging::{LogLevel, Logger};

/// Application config embedded at build time
const APP_CONFIG: &str = include_str!("../../app.json");

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log_level: LogLevel,
    pub navigation: NavConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(json).context("Failed to parse app config")?;
        config
            .navigation
            .validate()
            .context("Invalid navigation config")?;
        Ok(config)
    }

    /// Load the embedded config, falling back to the built-in destinations
    pub fn load_or_default() -> Self {
        match Self::from_json(APP_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                Logger::error_with_component("config", &format!("{:#}, using defaults", e));
                Self::default()
            }
        }
    }
}
