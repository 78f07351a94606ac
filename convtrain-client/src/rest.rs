//! REST implementation of the assistant service
//!
//! Workspaces live under `{base_url}/v1/workspaces`; every request carries
//! the `version` query parameter and HTTP basic auth.

use crate::config::{Credentials, ServiceConfig};
use crate::types::{ApiErrorBody, WorkspaceReport};
use crate::AssistantService;
use async_trait::async_trait;
use convtrain_core::{ConvtrainResult, ServiceError, WorkspaceConfig};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the assistant service.
#[derive(Clone)]
pub struct AssistantClient {
    client: Client,
    base_url: String,
    api_version: String,
    credentials: Credentials,
}

impl AssistantClient {
    pub fn new(config: &ServiceConfig, credentials: Credentials) -> ConvtrainResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ServiceError::Transport {
                endpoint: "client".to_string(),
                reason: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn workspaces_url(&self) -> String {
        format!("{}/v1/workspaces", self.base_url)
    }

    fn workspace_url(&self, workspace_id: &str) -> String {
        format!("{}/v1/workspaces/{}", self.base_url, workspace_id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .query(&[("version", self.api_version.as_str())])
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> ConvtrainResult<T> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| ServiceError::Transport {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ServiceError::Transport {
            endpoint: endpoint.to_string(),
            reason: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(api_error) => api_error.error,
                Err(_) if body.is_empty() => status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
                Err(_) => body,
            };
            tracing::debug!(endpoint, status = status.as_u16(), %message, "Service request failed");
            return Err(ServiceError::RequestFailed {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            }
            .into());
        }

        serde_json::from_str(&body).map_err(|e| {
            ServiceError::InvalidResponse {
                endpoint: endpoint.to_string(),
                reason: format!("Failed to parse response: {}", e),
            }
            .into()
        })
    }
}

#[async_trait]
impl AssistantService for AssistantClient {
    async fn create_workspace(
        &self,
        workspace: &WorkspaceConfig,
    ) -> ConvtrainResult<WorkspaceReport> {
        tracing::debug!(
            name = %workspace.name,
            intents = workspace.intents.len(),
            entities = workspace.entities.len(),
            "Creating workspace"
        );
        let request = self.client.post(self.workspaces_url()).json(workspace);
        self.send("create_workspace", request).await
    }

    async fn get_workspace(&self, workspace_id: &str) -> ConvtrainResult<WorkspaceReport> {
        let request = self.client.get(self.workspace_url(workspace_id));
        self.send("get_workspace", request).await
    }

    async fn export_workspace(&self, workspace_id: &str) -> ConvtrainResult<Value> {
        let request = self
            .client
            .get(self.workspace_url(workspace_id))
            .query(&[("export", "true")]);
        self.send("export_workspace", request).await
    }
}

impl std::fmt::Debug for AssistantClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("credentials", &self.credentials)
            .finish()
    }
}
