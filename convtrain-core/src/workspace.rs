//! Workspace data model
//!
//! Shapes follow the assistant service's JSON contract so that a
//! [`WorkspaceConfig`] serializes directly into the create-workspace body.

use crate::{DocumentError, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

// ============================================================================
// INTENTS
// ============================================================================

/// A single example utterance of an intent.
///
/// Fields the service attaches to an example (such as `mentions`) are kept
/// in `extra` and sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Example {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extra: Map::new(),
        }
    }
}

/// Intent with its example utterances, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentDefinition {
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IntentDefinition {
    pub fn new(intent: impl Into<String>, examples: Vec<Example>) -> Self {
        Self {
            intent: intent.into(),
            description: None,
            examples,
            extra: Map::new(),
        }
    }
}

// ============================================================================
// ENTITIES
// ============================================================================

/// Canonical entity value with either synonyms or patterns, never both.
///
/// Serialized with a `type` discriminator (`"synonyms"` or `"patterns"`),
/// which is how the service tells the two apart. A document without `type`
/// is read as synonyms unless it only carries `patterns`. Unmodeled fields
/// (`metadata`, timestamps) travel in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValueDocument", into = "ValueDocument")]
pub enum ValueRecord {
    Synonyms {
        value: String,
        synonyms: Vec<String>,
        extra: Map<String, Value>,
    },
    Patterns {
        value: String,
        patterns: Vec<String>,
        extra: Map<String, Value>,
    },
}

impl ValueRecord {
    pub fn synonyms(value: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self::Synonyms {
            value: value.into(),
            synonyms,
            extra: Map::new(),
        }
    }

    pub fn patterns(value: impl Into<String>, patterns: Vec<String>) -> Self {
        Self::Patterns {
            value: value.into(),
            patterns,
            extra: Map::new(),
        }
    }

    /// The canonical value.
    pub fn value(&self) -> &str {
        match self {
            Self::Synonyms { value, .. } | Self::Patterns { value, .. } => value,
        }
    }
}

/// Wire shape of a value record.
#[derive(Serialize, Deserialize)]
struct ValueDocument {
    value: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    synonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    patterns: Option<Vec<String>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<ValueDocument> for ValueRecord {
    type Error = String;

    fn try_from(doc: ValueDocument) -> Result<Self, Self::Error> {
        let is_patterns = match doc.kind.as_deref() {
            Some("synonyms") => false,
            Some("patterns") => true,
            Some(other) => return Err(format!("unknown value type `{}`", other)),
            None => doc.synonyms.is_none() && doc.patterns.is_some(),
        };
        Ok(if is_patterns {
            Self::Patterns {
                value: doc.value,
                patterns: doc.patterns.unwrap_or_default(),
                extra: doc.extra,
            }
        } else {
            Self::Synonyms {
                value: doc.value,
                synonyms: doc.synonyms.unwrap_or_default(),
                extra: doc.extra,
            }
        })
    }
}

impl From<ValueRecord> for ValueDocument {
    fn from(record: ValueRecord) -> Self {
        match record {
            ValueRecord::Synonyms {
                value,
                synonyms,
                extra,
            } => Self {
                value,
                kind: Some("synonyms".to_string()),
                synonyms: Some(synonyms),
                patterns: None,
                extra,
            },
            ValueRecord::Patterns {
                value,
                patterns,
                extra,
            } => Self {
                value,
                kind: Some("patterns".to_string()),
                synonyms: None,
                patterns: Some(patterns),
                extra,
            },
        }
    }
}

/// Entity with its values, in source order.
///
/// An entity with no values references a built-in (system) entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
    #[serde(default)]
    pub values: Vec<ValueRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EntityDefinition {
    pub fn new(entity: impl Into<String>, values: Vec<ValueRecord>) -> Self {
        Self {
            entity: entity.into(),
            description: None,
            fuzzy_match: None,
            values,
            extra: Map::new(),
        }
    }
}

// ============================================================================
// WORKSPACE
// ============================================================================

/// Fully assembled workspace, ready to be submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub name: String,
    pub description: String,
    pub language: String,
    pub intents: Vec<IntentDefinition>,
    pub entities: Vec<EntityDefinition>,
    pub dialog_nodes: Vec<Value>,
    pub counterexamples: Vec<Example>,
    pub metadata: Map<String, Value>,
    pub learning_opt_out: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            intents: Vec::new(),
            entities: Vec::new(),
            dialog_nodes: Vec::new(),
            counterexamples: Vec::new(),
            metadata: Map::new(),
            learning_opt_out: false,
        }
    }
}

/// Pre-existing workspace document used to seed an assembly.
///
/// Every field is optional and `null` counts as absent. Anything else in the
/// document (timestamps, ids, status, name) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseWorkspace {
    #[serde(default)]
    pub intents: Option<Vec<IntentDefinition>>,
    #[serde(default)]
    pub entities: Option<Vec<EntityDefinition>>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub dialog_nodes: Option<Vec<Value>>,
    #[serde(default)]
    pub counterexamples: Option<Vec<Example>>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub learning_opt_out: Option<bool>,
}

impl BaseWorkspace {
    /// Read and parse a base document from disk.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&contents).map_err(|reason| DocumentError::Parse {
            path: path.display().to_string(),
            reason,
        })
    }

    pub fn from_json_str(contents: &str) -> Result<Self, String> {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    }

    pub fn from_value(value: Value) -> Result<Self, String> {
        serde_json::from_value(value).map_err(|e| e.to_string())
    }
}
