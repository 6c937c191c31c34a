//! Run configuration

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main configuration for a benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Loop count used by every suite without an override
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    /// Seed for the filler entities of the component scene
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_filler_entities")]
    pub filler_entities: usize,
    /// Suites to run, in any order. Empty runs nothing.
    #[serde(default)]
    pub suites: Vec<String>,
    /// Per-suite loop counts
    #[serde(default = "default_overrides")]
    pub overrides: BTreeMap<String, u64>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("config validation error: {0}")]
    Validation(String),
}

fn default_iterations() -> u64 {
    10_000_000
}

fn default_seed() -> u64 {
    7
}

fn default_filler_entities() -> usize {
    256
}

fn default_overrides() -> BTreeMap<String, u64> {
    // Repeated `+` concatenation is quadratic; the global count would never finish.
    BTreeMap::from([("string_concat".to_string(), 20_000)])
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            seed: default_seed(),
            filler_entities: default_filler_entities(),
            suites: Vec::new(),
            overrides: default_overrides(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Validation(
                "iterations must be greater than zero".into(),
            ));
        }
        if let Some((suite, _)) = self.overrides.iter().find(|(_, count)| **count == 0) {
            return Err(ConfigError::Validation(format!(
                "override for suite '{suite}' must be greater than zero"
            )));
        }
        if self.suites.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "suite names must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Loop count for `suite`, honouring overrides
    pub fn iterations_for(&self, suite: &str) -> u64 {
        self.overrides
            .get(suite)
            .copied()
            .unwrap_or(self.iterations)
    }
}
