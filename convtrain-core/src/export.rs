//! Workspace export back into training files
//!
//! The inverse of the tabular transform: an exported workspace document is
//! flattened into the headerless intent and entity CSV layouts and the
//! document itself is kept as the base for the next training run.

use crate::{
    BaseWorkspace, ConvtrainResult, DocumentError, EntityDefinition, ExportError, IntentDefinition,
    IntentRow, TabularError, ValueRecord, DEFAULT_PATTERN_DELIMITER, ENTITY_FILENAME,
    INTENT_FILENAME, WORKSPACE_BASE_FILENAME,
};
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output locations for an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub base: PathBuf,
    pub intents: PathBuf,
    pub entities: PathBuf,
}

impl ExportPaths {
    /// Standard file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            base: dir.join(WORKSPACE_BASE_FILENAME),
            intents: dir.join(INTENT_FILENAME),
            entities: dir.join(ENTITY_FILENAME),
        }
    }
}

/// Counts of what an export wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub intents: usize,
    pub intent_rows: usize,
    pub entities: usize,
    pub entity_rows: usize,
}

/// Intent rows in file order. An intent without examples becomes one row
/// with an empty utterance so that it survives re-import.
pub fn intent_rows(intents: &[IntentDefinition]) -> Vec<IntentRow> {
    let mut rows = Vec::new();
    for intent in intents {
        if intent.examples.is_empty() {
            rows.push(IntentRow::new("", intent.intent.as_str()));
        }
        for example in &intent.examples {
            rows.push(IntentRow::new(example.text.as_str(), intent.intent.as_str()));
        }
    }
    rows
}

/// Ragged entity rows: `entity, value, synonyms...` or
/// `entity, value, /pattern/...`.
pub fn entity_rows(entities: &[EntityDefinition]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for entity in entities {
        for record in &entity.values {
            let mut row = vec![entity.entity.clone(), record.value().to_string()];
            match record {
                ValueRecord::Synonyms { synonyms, .. } => row.extend(synonyms.iter().cloned()),
                ValueRecord::Patterns { patterns, .. } => row.extend(patterns.iter().map(|p| {
                    format!("{d}{p}{d}", d = DEFAULT_PATTERN_DELIMITER)
                })),
            }
            rows.push(row);
        }
    }
    rows
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer)
}

/// Write intent rows as fully quoted CSV.
pub fn write_intent_rows<W: Write>(writer: W, rows: &[IntentRow]) -> csv::Result<()> {
    let mut out = csv_writer(writer);
    for row in rows {
        out.write_record([row.utterance.as_str(), row.intent.as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Write ragged entity rows as fully quoted CSV.
pub fn write_entity_rows<W: Write>(writer: W, rows: &[Vec<String>]) -> csv::Result<()> {
    let mut out = csv_writer(writer);
    for row in rows {
        out.write_record(row)?;
    }
    out.flush()?;
    Ok(())
}

fn write_error(path: &Path, reason: impl ToString) -> TabularError {
    TabularError::Write {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn create(path: &Path) -> Result<File, TabularError> {
    File::create(path).map_err(|e| write_error(path, e))
}

/// Write an exported workspace document to `paths`.
///
/// Fails before writing anything when the workspace has no intents. The
/// entity file is only written when the workspace has entities.
pub fn export_workspace(
    workspace_id: &str,
    document: &Value,
    paths: &ExportPaths,
) -> ConvtrainResult<ExportSummary> {
    let parsed = BaseWorkspace::from_value(document.clone()).map_err(|reason| DocumentError::Parse {
        path: format!("workspace {}", workspace_id),
        reason,
    })?;
    let intents = parsed.intents.unwrap_or_default();
    let entities = parsed.entities.unwrap_or_default();
    if intents.is_empty() {
        return Err(ExportError::NoIntents {
            workspace_id: workspace_id.to_string(),
        }
        .into());
    }

    let base = serde_json::to_string_pretty(document).map_err(|e| write_error(&paths.base, e))?;
    std::fs::write(&paths.base, base).map_err(|e| write_error(&paths.base, e))?;

    let i_rows = intent_rows(&intents);
    write_intent_rows(create(&paths.intents)?, &i_rows)
        .map_err(|e| write_error(&paths.intents, e))?;

    let e_rows = entity_rows(&entities);
    if !entities.is_empty() {
        write_entity_rows(create(&paths.entities)?, &e_rows)
            .map_err(|e| write_error(&paths.entities, e))?;
    }

    let summary = ExportSummary {
        intents: intents.len(),
        intent_rows: i_rows.len(),
        entities: entities.len(),
        entity_rows: e_rows.len(),
    };
    tracing::info!(
        workspace_id,
        intents = summary.intents,
        entities = summary.entities,
        "Exported workspace"
    );
    Ok(summary)
}
