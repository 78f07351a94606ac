//! Error types for the CLI.

use convtrain_core::{ConfigError, ConvtrainError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Convtrain(#[from] ConvtrainError),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to initialize logging: {0}")]
    Telemetry(String),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Convtrain(err.into())
    }
}
