//! convtrain Core - Workspace Model and Tabular Transformation
//!
//! Pure data transformation with no network access. Everything the
//! client and CLI crates submit to the assistant service is built here.
//!
//! Pipeline:
//! ```text
//! Headerless CSV (intents / ragged entities)
//!     ↓
//! Tabular reader (IntentRow / EntityRow)
//!     ↓
//! Row grouper (first-occurrence key order, stable rows)
//!     ↓
//! Example / value builders
//!     ↓
//! Workspace assembler (+ optional base document)
//!     ↓
//! WorkspaceConfig (request payload)
//! ```

pub mod assembler;
pub mod builders;
pub mod error;
pub mod export;
pub mod grouping;
pub mod tabular;
pub mod workspace;

pub use assembler::WorkspaceAssembler;
pub use builders::{
    build_entities, build_intents, classify_column, to_entity_values, to_examples, ColumnKind,
    TransformOptions,
};
pub use error::*;
pub use export::{
    entity_rows, export_workspace, intent_rows, write_entity_rows, write_intent_rows, ExportPaths,
    ExportSummary,
};
pub use grouping::{group_rows, RowGroup};
pub use tabular::{
    load_entity_file, load_intent_file, read_entity_rows, read_intent_rows, EntityRow, IntentRow,
};
pub use workspace::{
    BaseWorkspace, EntityDefinition, Example, IntentDefinition, ValueRecord, WorkspaceConfig,
};

// ============================================================================
// NAMED DEFAULTS
// ============================================================================

/// Language used when neither the base document nor the caller sets one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Character that wraps a pattern column in the entity file (`/regex/`).
pub const DEFAULT_PATTERN_DELIMITER: char = '/';

/// File name of the base document written by the exporter.
pub const WORKSPACE_BASE_FILENAME: &str = "workspace-base.json";

/// File name of the intent CSV written by the exporter.
pub const INTENT_FILENAME: &str = "intents.csv";

/// File name of the entity CSV written by the exporter.
pub const ENTITY_FILENAME: &str = "entities.csv";
