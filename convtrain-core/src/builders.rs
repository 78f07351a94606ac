//! Intent example and entity value builders
//!
//! Each builder works on one group of rows produced by [`group_rows`] and
//! never fails: rows that carry no usable data are skipped.

use crate::{
    group_rows, EntityDefinition, EntityRow, Example, IntentDefinition, IntentRow, ValueRecord,
    DEFAULT_PATTERN_DELIMITER,
};

/// Options for the tabular-to-workspace transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Character wrapping a pattern column, e.g. `/^\d+$/`.
    pub pattern_delimiter: char,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            pattern_delimiter: DEFAULT_PATTERN_DELIMITER,
        }
    }
}

/// How one extra column of an entity row is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind<'a> {
    Synonym(&'a str),
    /// Pattern text with the wrapping delimiters removed.
    Pattern(&'a str),
}

/// Classify a raw extra column. Absent and empty columns yield `None`.
///
/// A column is a pattern when it both starts and ends with the delimiter.
/// A lone delimiter is accepted and yields the empty pattern.
pub fn classify_column(raw: Option<&str>, delimiter: char) -> Option<ColumnKind<'_>> {
    let raw = raw.filter(|s| !s.is_empty())?;
    if raw.starts_with(delimiter) && raw.ends_with(delimiter) {
        let inner = raw
            .strip_prefix(delimiter)
            .and_then(|s| s.strip_suffix(delimiter))
            .unwrap_or("");
        Some(ColumnKind::Pattern(inner))
    } else {
        Some(ColumnKind::Synonym(raw))
    }
}

/// Examples for one intent group, skipping empty utterances.
pub fn to_examples(rows: &[IntentRow]) -> Vec<Example> {
    rows.iter()
        .filter(|row| !row.utterance.is_empty())
        .map(|row| Example::new(row.utterance.as_str()))
        .collect()
}

/// Value records for one entity group.
///
/// Rows with an empty value are skipped (system entity references). Within a
/// row, any pattern column turns the record into a pattern record and the
/// row's synonyms are dropped.
pub fn to_entity_values(rows: &[EntityRow], options: &TransformOptions) -> Vec<ValueRecord> {
    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        if row.value.is_empty() {
            continue;
        }

        let mut synonyms = Vec::new();
        let mut patterns = Vec::new();
        for column in &row.extra {
            match classify_column(column.as_deref(), options.pattern_delimiter) {
                Some(ColumnKind::Pattern(p)) => patterns.push(p.to_string()),
                Some(ColumnKind::Synonym(s)) => synonyms.push(s.to_string()),
                None => {}
            }
        }

        if patterns.is_empty() {
            values.push(ValueRecord::synonyms(row.value.as_str(), synonyms));
        } else {
            values.push(ValueRecord::patterns(row.value.as_str(), patterns));
        }
    }
    values
}

/// Group intent rows by intent name and build one definition per intent.
pub fn build_intents(rows: Vec<IntentRow>) -> Vec<IntentDefinition> {
    group_rows(rows, |row| row.intent.as_str())
        .into_iter()
        .map(|group| IntentDefinition::new(group.key, to_examples(&group.rows)))
        .collect()
}

/// Group entity rows by entity name and build one definition per entity.
pub fn build_entities(rows: Vec<EntityRow>, options: &TransformOptions) -> Vec<EntityDefinition> {
    group_rows(rows, |row| row.entity.as_str())
        .into_iter()
        .map(|group| EntityDefinition::new(group.key, to_entity_values(&group.rows, options)))
        .collect()
}
