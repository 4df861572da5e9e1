use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Base name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard";
pub const ENV_PREFIX: &str = "DASHBOARD";

/// CLI settings, layered as defaults, then the config file, then `DASHBOARD_*` variables.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub dataset_path: Option<PathBuf>,
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dataset_path: None,
            currency: "USD".to_string(),
        }
    }
}

/// Loads settings. An explicit `path` must exist; the default `dashboard.*` file is optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let file = match path {
        Some(path) => ::config::File::from(path).required(true),
        None => ::config::File::with_name(CONFIG_FILE).required(false),
    };

    let config = ::config::Config::builder()
        .add_source(file)
        .add_source(::config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .context("Failed to read configuration")?;

    config
        .try_deserialize()
        .context("Invalid configuration values")
}
