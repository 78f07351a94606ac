//! Ordered, stable grouping of rows by key.

use std::collections::HashMap;

/// Rows sharing one key, in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGroup<R> {
    pub key: String,
    pub rows: Vec<R>,
}

/// Group `rows` by `key_fn`.
///
/// Groups appear in first-occurrence order of their key and each group keeps
/// the relative order of its rows, so the output does not depend on locale
/// or hash ordering.
pub fn group_rows<R, F>(rows: impl IntoIterator<Item = R>, key_fn: F) -> Vec<RowGroup<R>>
where
    F: Fn(&R) -> &str,
{
    let mut groups: Vec<RowGroup<R>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let key = key_fn(&row);
        match index.get(key) {
            Some(&slot) => groups[slot].rows.push(row),
            None => {
                let key = key.to_string();
                index.insert(key.clone(), groups.len());
                groups.push(RowGroup {
                    key,
                    rows: vec![row],
                });
            }
        }
    }

    groups
}
