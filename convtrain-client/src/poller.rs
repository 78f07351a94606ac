//! Training submission and fixed-interval status polling

use crate::config::PollConfig;
use crate::types::{WorkspaceReport, WorkspaceStatus};
use crate::AssistantService;
use convtrain_core::{ConvtrainResult, TrainingError, WorkspaceConfig};
use std::time::Duration;

/// Create the workspace and wait until it has finished training.
pub async fn train_workspace<S>(
    service: &S,
    workspace: &WorkspaceConfig,
    poll: &PollConfig,
) -> ConvtrainResult<WorkspaceReport>
where
    S: AssistantService + ?Sized,
{
    let created = service.create_workspace(workspace).await?;
    tracing::info!(
        workspace_id = %created.workspace_id,
        intents = workspace.intents.len(),
        entities = workspace.entities.len(),
        "Workspace created, waiting for training"
    );
    wait_until_available(service, &created.workspace_id, poll).await
}

/// Query the workspace every `poll.interval()` until it is available.
///
/// Each query adds `poll.increment()` to the elapsed-time counter, so at
/// most `poll.max_polls()` queries are made before
/// [`TrainingError::Timeout`]. Any service error ends the wait immediately.
pub async fn wait_until_available<S>(
    service: &S,
    workspace_id: &str,
    poll: &PollConfig,
) -> ConvtrainResult<WorkspaceReport>
where
    S: AssistantService + ?Sized,
{
    poll.validate()?;
    let interval = poll.interval();
    let increment = poll.increment();
    let max_wait = poll.max_wait();
    let mut waited = Duration::ZERO;
    let mut attempt: u64 = 0;

    while waited < max_wait {
        let report = service.get_workspace(workspace_id).await?;
        attempt += 1;

        if report.is_available() {
            tracing::info!(workspace_id, attempt, waited = ?waited, "Workspace available");
            return Ok(report);
        }

        match report.status {
            Some(WorkspaceStatus::Failed) => {
                tracing::warn!(workspace_id, attempt, "Workspace reports failed training")
            }
            status => tracing::debug!(workspace_id, attempt, ?status, "Workspace not ready"),
        }

        tokio::time::sleep(interval).await;
        waited += increment;
    }

    tracing::warn!(workspace_id, attempt, waited = ?waited, "Training wait exhausted");
    Err(TrainingError::Timeout {
        workspace_id: workspace_id.to_string(),
        waited,
    }
    .into())
}
