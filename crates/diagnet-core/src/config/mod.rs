//! Configuration for model build, queries, and storage.
//!
//! Every section is `#[serde(default)]`, so an empty TOML document yields
//! the defaults. Call [`DiagnetConfig::validate`] before handing a config
//! to the model builder.

pub mod model_config;
pub mod query_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use model_config::ModelConfig;
pub use query_config::QueryConfig;
pub use storage_config::StorageConfig;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnetConfig {
    pub model: ModelConfig,
    pub query: QueryConfig,
    pub storage: StorageConfig,
}

impl DiagnetConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&source).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;
        self.query.validate()?;
        self.storage.validate()
    }
}
