use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::errors::TrackerError;

pub const CONFIG_FILE_NAME: &str = "finance_tracker.json";
const DEFAULT_DATABASE_FILE: &str = "finance_tracker.db";
const DEFAULT_CURRENCY_PRECISION: u8 = 2;

/// User preferences read at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_database_path")]
    pub database_path: PathBuf,
    #[serde(default = "Config::default_currency_precision")]
    pub currency_precision: u8,
    #[serde(default = "Config::default_color_enabled")]
    pub color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: Self::default_database_path(),
            currency_precision: Self::default_currency_precision(),
            color_enabled: Self::default_color_enabled(),
        }
    }
}

impl Config {
    fn default_database_path() -> PathBuf {
        PathBuf::from(DEFAULT_DATABASE_FILE)
    }

    fn default_currency_precision() -> u8 {
        DEFAULT_CURRENCY_PRECISION
    }

    fn default_color_enabled() -> bool {
        true
    }
}

/// Locates and reads [`Config`] from a base directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Self {
        let path = base.join(CONFIG_FILE_NAME);
        Self { base, path }
    }

    /// Uses the process working directory as the base.
    pub fn from_working_dir() -> Result<Self, TrackerError> {
        let base =
            std::env::current_dir().map_err(|err| TrackerError::ConfigError(err.to_string()))?;
        Ok(Self::with_base_dir(base))
    }

    /// Returns defaults when no config file is present.
    pub fn load(&self) -> Result<Config, TrackerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)
                .map_err(|err| TrackerError::ConfigError(err.to_string()))?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the configured database path against the base directory.
    pub fn database_path(&self, config: &Config) -> PathBuf {
        if config.database_path.is_absolute() {
            config.database_path.clone()
        } else {
            self.base.join(&config.database_path)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
