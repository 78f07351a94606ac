//! Assistant service request and response types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// STATUS TYPES
// ============================================================================

/// Training status reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkspaceStatus {
    #[serde(rename = "Non Existent")]
    NonExistent,
    Training,
    Failed,
    Available,
    Unavailable,
    #[serde(other)]
    Unknown,
}

/// Workspace status document.
///
/// Only the id and status are interpreted; every other field is kept in
/// `extra` so the document can be printed back in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceReport {
    pub workspace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkspaceStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkspaceReport {
    pub fn is_available(&self) -> bool {
        self.status == Some(WorkspaceStatus::Available)
    }
}

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Error document returned with non-2xx responses.
///
/// Only `error` is read; the HTTP status already carries the code.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
