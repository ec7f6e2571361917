//! Bot settings loading from config.toml
//!
//! Every setting has a default, so the bot runs without a settings file at all.
//! When the file exists it must parse; a malformed file stops startup rather than
//! silently falling back to defaults.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an alternative settings file
pub const CONFIG_PATH_VAR: &str = "EXPENSE_BOT_CONFIG";

/// Settings file used when `EXPENSE_BOT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Application settings shared by the bot, the sheet adapter and the liveness endpoint
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the service-account key file
    pub credentials_path: String,
    /// Human-readable name of the spreadsheet document
    pub spreadsheet_name: String,
    /// Prefix for text commands
    pub command_prefix: String,
    /// Currency marker prepended to amounts in replies
    pub currency_prefix: String,
    /// Socket address for the liveness endpoint
    pub liveness_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            credentials_path: "creds.json".to_string(),
            spreadsheet_name: "Daily Expenses Bot".to_string(),
            command_prefix: "!".to_string(),
            currency_prefix: "RM".to_string(),
            liveness_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Loads settings from a TOML file, falling back to defaults when the file does not exist.
///
/// # Errors
/// Returns `Error::Config` if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!("No settings file at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    tracing::debug!("Loading settings from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file {path:?}: {e}"),
    })
}

/// Loads settings from `EXPENSE_BOT_CONFIG`, or ./config.toml when unset
pub fn load_default_config() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}

fn parse_config(contents: &str) -> std::result::Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}
