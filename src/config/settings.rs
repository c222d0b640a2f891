use super::defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_CONSISTENCY_TOLERANCE, DEFAULT_PORT, DEFAULT_UNIT,
};
use crate::calculator::Unit;
use crate::form::FormSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub config_path: String,
    /// Unit new and cleared forms start in.
    pub default_unit: Unit,
    /// Target free percentage pre-filled on new forms.
    pub default_target_percent: Option<f64>,
    /// Relative tolerance for the free + used == total check.
    pub consistency_tolerance: f64,
    /// Recipient placed in generated `mailto:` links (may be empty).
    pub mail_to: String,
    /// Used when an email request omits the client abbreviation.
    pub client_abbreviation: String,
    /// Whether POST /api/form/probe may read volumes on this host.
    pub allow_probe: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            default_unit: DEFAULT_UNIT,
            default_target_percent: None,
            consistency_tolerance: DEFAULT_CONSISTENCY_TOLERANCE,
            mail_to: String::new(),
            client_abbreviation: String::new(),
            allow_probe: true,
        }
    }
}

impl AppConfig {
    /// Load configuration, merging defaults with config file values and env overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("IDS_CONFIG_PATH") {
            config.config_path = path;
        }

        let cfg_path = Path::new(&config.config_path);
        if cfg_path.exists() {
            let contents = fs::read_to_string(cfg_path)
                .with_context(|| format!("Failed to read config file: {}", config.config_path))?;
            config.parse_ini(&contents);
        }

        if let Ok(port) = std::env::var("IDS_PORT") {
            config.port = port.parse().context("IDS_PORT must be a valid port number")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// The subset of settings the form reducer needs.
    pub(crate) fn form_settings(&self) -> FormSettings {
        FormSettings {
            default_unit: self.default_unit,
            default_target: self.default_target_percent,
            tolerance: self.consistency_tolerance,
        }
    }
}
