//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};
use crate::driver::{Flavor, OutputFormat};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Run settings
    #[serde(default)]
    pub run: RunConfig,
}

/// Settings for a run; unset keys fall back to the built-in defaults
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Sample inputs, in print order
    #[serde(default)]
    pub inputs: Option<Vec<u32>>,

    /// Banner flavor
    #[serde(default)]
    pub flavor: Option<Flavor>,

    /// Output format
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file '{}' does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
