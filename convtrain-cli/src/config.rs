//! Configuration loading for the convtrain CLI.
//!
//! The file is optional; every field has a default. Command-line flags
//! override file values.

use convtrain_client::{PollConfig, ServiceConfig};
use convtrain_core::ConfigError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TrainerConfig {
    pub service: ServiceConfig,
    pub polling: PollConfig,
}

impl TrainerConfig {
    /// Load from `path` when given, otherwise use defaults. Always validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: TrainerConfig = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn with_base_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url {
            self.service.base_url = url.to_string();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.service.validate()?;
        self.polling.validate()?;
        Ok(())
    }
}
