//! Error types for convtrain operations

use std::time::Duration;
use thiserror::Error;

/// Errors reading or writing headerless CSV files.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TabularError {
    #[error("Failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Malformed CSV at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("Failed to write {path}: {reason}")]
    Write { path: String, reason: String },
}

/// Errors loading the optional base workspace document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Failed to read base document {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid base document {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Errors talking to the remote assistant service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("Request to {endpoint} failed with status {status}: {message}")]
    RequestFailed {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse { endpoint: String, reason: String },
}

/// Training did not reach the available state in time.
///
/// Distinct from [`ServiceError`]: the workspace exists and may still finish
/// training, so callers are expected to query it again later.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrainingError {
    #[error("Training of workspace {workspace_id} timed out after {waited:?}")]
    Timeout {
        workspace_id: String,
        waited: Duration,
    },
}

/// Errors exporting a workspace back into training files.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("No intent found in workspace {workspace_id}")]
    NoIntents { workspace_id: String },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse config file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Master error type for all convtrain errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvtrainError {
    #[error("Tabular error: {0}")]
    Tabular(#[from] TabularError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Training error: {0}")]
    Training(#[from] TrainingError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for convtrain operations.
pub type ConvtrainResult<T> = Result<T, ConvtrainError>;

// =============================================================================
// TESTS
// =============================================================================
