//! convtrain Test Utilities
//!
//! Centralized test infrastructure for the convtrain workspace:
//! - Scripted mock assistant service
//! - Proptest generators for raw rows and definitions
//! - CSV and workspace fixtures
//! - Assertions on convtrain error kinds

pub use convtrain_client::{AssistantService, PollConfig, WorkspaceReport, WorkspaceStatus};
pub use convtrain_core::{
    ConvtrainError, ConvtrainResult, EntityDefinition, EntityRow, Example, IntentDefinition,
    IntentRow, ServiceError, TrainingError, ValueRecord, WorkspaceConfig,
};

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ============================================================================
// MOCK ASSISTANT SERVICE
// ============================================================================

/// In-memory assistant service that replays a scripted status sequence.
///
/// Each `get_workspace` call pops the next scripted status; once the script
/// is exhausted the steady status is returned forever.
#[derive(Debug)]
pub struct MockAssistantService {
    workspace_id: String,
    script: Mutex<VecDeque<WorkspaceStatus>>,
    steady_status: WorkspaceStatus,
    export_document: Option<Value>,
    create_failure: Option<ServiceError>,
    get_failure: Option<(usize, ServiceError)>,
    created: Mutex<Vec<WorkspaceConfig>>,
    get_calls: AtomicUsize,
}

impl MockAssistantService {
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            script: Mutex::new(VecDeque::new()),
            steady_status: WorkspaceStatus::Training,
            export_document: None,
            create_failure: None,
            get_failure: None,
            created: Mutex::new(Vec::new()),
            get_calls: AtomicUsize::new(0),
        }
    }

    /// Statuses returned by the first `get_workspace` calls, in order.
    pub fn with_statuses(self, statuses: impl IntoIterator<Item = WorkspaceStatus>) -> Self {
        *self.script.lock().unwrap() = statuses.into_iter().collect();
        self
    }

    /// Status returned after the script runs out.
    pub fn with_steady_status(mut self, status: WorkspaceStatus) -> Self {
        self.steady_status = status;
        self
    }

    pub fn with_export(mut self, document: Value) -> Self {
        self.export_document = Some(document);
        self
    }

    pub fn failing_create(mut self, error: ServiceError) -> Self {
        self.create_failure = Some(error);
        self
    }

    /// Fail the `n`-th `get_workspace` call (1-based) and every later one.
    pub fn failing_get_from(mut self, n: usize, error: ServiceError) -> Self {
        self.get_failure = Some((n, error));
        self
    }

    /// Workspaces submitted through `create_workspace`.
    pub fn created_workspaces(&self) -> Vec<WorkspaceConfig> {
        self.created.lock().unwrap().clone()
    }

    /// Number of `get_workspace` calls so far.
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    fn report(&self, status: WorkspaceStatus) -> WorkspaceReport {
        let mut extra = Map::new();
        if let Some(last) = self.created.lock().unwrap().last() {
            extra.insert("name".to_string(), Value::String(last.name.clone()));
            extra.insert("language".to_string(), Value::String(last.language.clone()));
        }
        WorkspaceReport {
            workspace_id: self.workspace_id.clone(),
            status: Some(status),
            extra,
        }
    }
}

#[async_trait]
impl AssistantService for MockAssistantService {
    async fn create_workspace(
        &self,
        workspace: &WorkspaceConfig,
    ) -> ConvtrainResult<WorkspaceReport> {
        if let Some(error) = &self.create_failure {
            return Err(error.clone().into());
        }
        self.created.lock().unwrap().push(workspace.clone());
        Ok(self.report(WorkspaceStatus::Training))
    }

    async fn get_workspace(&self, workspace_id: &str) -> ConvtrainResult<WorkspaceReport> {
        let call = self.get_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((from, error)) = &self.get_failure {
            if call >= *from {
                return Err(error.clone().into());
            }
        }
        if workspace_id != self.workspace_id {
            return Err(ServiceError::RequestFailed {
                endpoint: "get_workspace".to_string(),
                status: 404,
                message: format!("Workspace {} not found", workspace_id),
            }
            .into());
        }
        let status = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.steady_status);
        Ok(self.report(status))
    }

    async fn export_workspace(&self, workspace_id: &str) -> ConvtrainResult<Value> {
        match &self.export_document {
            Some(document) if workspace_id == self.workspace_id => Ok(document.clone()),
            _ => Err(ServiceError::RequestFailed {
                endpoint: "export_workspace".to_string(),
                status: 404,
                message: format!("Workspace {} not found", workspace_id),
            }
            .into()),
        }
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for raw rows and definitions.

    use super::*;
    use proptest::prelude::*;

    /// Generate an intent name from a small pool so groups collide.
    pub fn arb_intent_name() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["greet", "goodbye", "order_pizza", "help", "cancel"])
            .prop_map(str::to_string)
    }

    /// Generate an utterance, sometimes empty.
    pub fn arb_utterance() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => Just(String::new()),
            4 => "[a-z][a-z ,']{0,24}",
        ]
    }

    /// Generate an intent row.
    pub fn arb_intent_row() -> impl Strategy<Value = IntentRow> {
        (arb_utterance(), arb_intent_name())
            .prop_map(|(utterance, intent)| IntentRow::new(utterance, intent))
    }

    /// Generate a raw extra column: absent, empty, synonym or `/pattern/`.
    pub fn arb_extra_column() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some(String::new())),
            "[a-z]{1,10}".prop_map(Some),
            "[a-z0-9^$.+]{0,8}".prop_map(|p| Some(format!("/{}/", p))),
        ]
    }

    /// Generate an entity row, sometimes a system-entity reference.
    pub fn arb_entity_row() -> impl Strategy<Value = EntityRow> {
        (
            prop::sample::select(vec!["color", "size", "topping", "sys-number"]),
            prop_oneof![1 => Just(String::new()), 4 => "[a-z]{1,10}"],
            prop::collection::vec(arb_extra_column(), 0..5),
        )
            .prop_map(|(entity, value, extra)| EntityRow::new(entity, value, extra))
    }

    /// Generate a workspace status.
    pub fn arb_status() -> impl Strategy<Value = WorkspaceStatus> {
        prop_oneof![
            Just(WorkspaceStatus::NonExistent),
            Just(WorkspaceStatus::Training),
            Just(WorkspaceStatus::Failed),
            Just(WorkspaceStatus::Available),
            Just(WorkspaceStatus::Unavailable),
        ]
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built CSV content and workspaces for common scenarios.

    use super::*;

    /// Intent CSV with one empty utterance and two intents.
    pub const INTENT_CSV: &str = "\"hello\",\"greet\"\n\
\"\",\"greet\"\n\
\"good morning, friend\",\"greet\"\n\
\"see you\",\"goodbye\"\n";

    /// Ragged entity CSV with synonyms, a pattern row and a system entity.
    pub const ENTITY_CSV: &str = "\"color\",\"blue\",\"azure\",\"navy\"\n\
\"color\",\"hex\",\"/#[0-9a-f]{6}/\",\"hexcode\"\n\
\"sys-number\",\"\"\n\
\"size\",\"large\"\n";

    /// Base document as exported by the service.
    pub fn base_document() -> Value {
        serde_json::json!({
            "name": "exported",
            "description": "exported workspace",
            "language": "fr",
            "workspace_id": "ws-base",
            "status": "Available",
            "intents": [{"intent": "bonjour", "examples": [{"text": "salut"}]}],
            "entities": [],
            "dialog_nodes": [{"dialog_node": "welcome", "conditions": "welcome"}],
            "counterexamples": [],
            "metadata": {"api_version": {"major_version": "v1", "minor_version": "2018-07-10"}},
            "learning_opt_out": false
        })
    }

    /// A small assembled workspace.
    pub fn small_workspace() -> WorkspaceConfig {
        WorkspaceConfig {
            name: "pizza".to_string(),
            intents: vec![IntentDefinition::new(
                "order_pizza",
                vec![Example::new("I want a pizza")],
            )],
            entities: vec![EntityDefinition::new(
                "topping",
                vec![ValueRecord::synonyms("cheese", vec!["mozzarella".to_string()])],
            )],
            ..Default::default()
        }
    }

    /// Poll configuration whose counter advances by the sleep interval.
    pub fn quick_poll(interval_ms: u64, max_wait_ms: u64) -> PollConfig {
        split_poll(interval_ms, interval_ms, max_wait_ms)
    }

    /// Poll configuration with independent sleep and counter increment.
    pub fn split_poll(interval_ms: u64, increment_ms: u64, max_wait_ms: u64) -> PollConfig {
        PollConfig {
            interval_ms,
            increment_ms,
            max_wait_ms,
        }
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Assertions on convtrain error kinds.

    use super::*;

    /// Assert that a ConvtrainResult is Ok.
    #[track_caller]
    pub fn assert_ok<T: std::fmt::Debug>(result: &ConvtrainResult<T>) {
        assert!(result.is_ok(), "Expected Ok, got Err: {:?}", result);
    }

    /// Assert that a ConvtrainResult is a training timeout.
    #[track_caller]
    pub fn assert_timeout<T: std::fmt::Debug>(result: &ConvtrainResult<T>) {
        match result {
            Err(ConvtrainError::Training(TrainingError::Timeout { .. })) => {}
            other => panic!("Expected training timeout, got: {:?}", other),
        }
    }

    /// Assert that a ConvtrainResult is a service error.
    #[track_caller]
    pub fn assert_service_error<T: std::fmt::Debug>(result: &ConvtrainResult<T>) {
        match result {
            Err(ConvtrainError::Service(_)) => {}
            other => panic!("Expected Service error, got: {:?}", other),
        }
    }

    /// Assert that a ConvtrainResult is a config error.
    #[track_caller]
    pub fn assert_config_error<T: std::fmt::Debug>(result: &ConvtrainResult<T>) {
        match result {
            Err(ConvtrainError::Config(_)) => {}
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }
}
