//! convtrain Client - Assistant Service Contract
//!
//! Defines the narrow request/response contract with the remote training
//! service, a REST implementation of it, and the fixed-interval poller that
//! waits for training to finish.

pub mod config;
pub mod poller;
pub mod rest;
pub mod types;

pub use config::{Credentials, PollConfig, ServiceConfig};
pub use poller::{train_workspace, wait_until_available};
pub use rest::AssistantClient;
pub use types::{ApiErrorBody, WorkspaceReport, WorkspaceStatus};

use async_trait::async_trait;
use convtrain_core::{ConvtrainResult, WorkspaceConfig};
use serde_json::Value;

// ============================================================================
// ASSISTANT SERVICE TRAIT
// ============================================================================

/// Remote workspace management and training service.
///
/// Implementations must be thread-safe (Send + Sync). Failures are returned
/// as-is; nothing in this crate retries a call.
///
/// # Example
/// ```ignore
/// let client = AssistantClient::new(&ServiceConfig::default(), credentials)?;
/// let created = client.create_workspace(&workspace).await?;
/// let report = client.get_workspace(&created.workspace_id).await?;
/// ```
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Create a workspace from a fully assembled configuration.
    /// Training starts on the service side as soon as the call returns.
    async fn create_workspace(&self, workspace: &WorkspaceConfig)
        -> ConvtrainResult<WorkspaceReport>;

    /// Fetch the current status document of a workspace.
    async fn get_workspace(&self, workspace_id: &str) -> ConvtrainResult<WorkspaceReport>;

    /// Fetch the full workspace content (intents, entities, dialog) as JSON.
    async fn export_workspace(&self, workspace_id: &str) -> ConvtrainResult<Value>;
}
