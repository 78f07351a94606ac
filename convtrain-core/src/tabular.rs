//! Headerless CSV readers for intent and entity files
//!
//! Intent file: `utterance, intent`.
//! Entity file: `entity, value, synonym-or-pattern...` with a ragged column
//! count. Entity rows are padded to the widest row with `None`, so no
//! fixed width is assumed anywhere downstream.

use crate::TabularError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One line of the intent file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRow {
    pub utterance: String,
    pub intent: String,
}

impl IntentRow {
    pub fn new(utterance: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            utterance: utterance.into(),
            intent: intent.into(),
        }
    }
}

/// One line of the entity file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRow {
    pub entity: String,
    /// Canonical value. Empty for a row that only references a system entity.
    pub value: String,
    /// Synonym or pattern candidates; `None` where this row is shorter than the widest row.
    pub extra: Vec<Option<String>>,
}

impl EntityRow {
    pub fn new(entity: impl Into<String>, value: impl Into<String>, extra: Vec<Option<String>>) -> Self {
        Self {
            entity: entity.into(),
            value: value.into(),
            extra,
        }
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

fn malformed(err: csv::Error) -> TabularError {
    TabularError::Malformed {
        line: err.position().map(|p| p.line()).unwrap_or(0),
        reason: err.to_string(),
    }
}

fn open(path: &Path) -> Result<File, TabularError> {
    File::open(path).map_err(|e| TabularError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Parse intent rows. Lines without an intent name are skipped.
pub fn read_intent_rows<R: Read>(reader: R) -> Result<Vec<IntentRow>, TabularError> {
    let mut rows = Vec::new();
    for (index, record) in csv_reader(reader).records().enumerate() {
        let record = record.map_err(malformed)?;
        match (record.get(0), record.get(1)) {
            (Some(utterance), Some(intent)) if !intent.is_empty() => {
                rows.push(IntentRow::new(utterance, intent));
            }
            _ => {
                tracing::debug!(line = index + 1, "Skipping intent row without intent name");
            }
        }
    }
    Ok(rows)
}

/// Parse ragged entity rows. Lines without an entity name are skipped.
pub fn read_entity_rows<R: Read>(reader: R) -> Result<Vec<EntityRow>, TabularError> {
    let mut records = Vec::new();
    for record in csv_reader(reader).records() {
        records.push(record.map_err(malformed)?);
    }

    let width = records.iter().map(|r| r.len()).max().unwrap_or(0);
    let extra_width = width.saturating_sub(2);

    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let entity = record.get(0).unwrap_or_default();
        if entity.is_empty() {
            tracing::debug!(line = index + 1, "Skipping entity row without entity name");
            continue;
        }
        let value = record.get(1).unwrap_or_default();
        let extra = (0..extra_width)
            .map(|i| record.get(i + 2).map(str::to_string))
            .collect();
        rows.push(EntityRow::new(entity, value, extra));
    }
    Ok(rows)
}

/// Read the intent file at `path`.
pub fn load_intent_file(path: &Path) -> Result<Vec<IntentRow>, TabularError> {
    let rows = read_intent_rows(open(path)?)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Loaded intent file");
    Ok(rows)
}

/// Read the entity file at `path`.
pub fn load_entity_file(path: &Path) -> Result<Vec<EntityRow>, TabularError> {
    let rows = read_entity_rows(open(path)?)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Loaded entity file");
    Ok(rows)
}
