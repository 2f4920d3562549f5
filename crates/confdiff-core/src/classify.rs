//! Root-level classification of two documents.
//!
//! Partitions the union of both root key sets into added, removed, unchanged,
//! and changed. Before equality is judged, every sequence that is the direct
//! value of a root key is sorted into a canonical order; nested sequences are
//! deliberately left alone and handled by the walk's residual-matching rule.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::InvalidRootError;
use crate::value::Value;

/// The four root-level key sets.
///
/// Together they partition the union of both documents' root keys: every key
/// appears in exactly one set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootClassification {
    /// Keys present only in the current document.
    pub added: BTreeSet<String>,
    /// Keys present only in the past document.
    pub removed: BTreeSet<String>,
    /// Shared keys whose values are deeply equal.
    pub unchanged: BTreeSet<String>,
    /// Shared keys whose values differ somewhere.
    pub changed: BTreeSet<String>,
}

impl RootClassification {
    /// Returns `true` if the two documents had identical root keys and
    /// values.
    pub fn is_identical(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Total number of classified keys.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.unchanged.len() + self.changed.len()
    }

    /// Returns `true` if both documents were empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify the root keys of two documents.
///
/// Both roots must be mappings; anything else is an [`InvalidRootError`].
/// The inputs are never mutated — the root-level sequence sort happens on
/// owned copies.
pub fn classify(current: &Value, past: &Value) -> Result<RootClassification, InvalidRootError> {
    let (current_map, past_map) = root_mappings(current, past)?;
    let current_sorted = sort_root_sequences(current_map);
    let past_sorted = sort_root_sequences(past_map);
    Ok(classify_sorted(&current_sorted, &past_sorted))
}

/// Extract the root mappings, naming the offending side on failure.
pub(crate) fn root_mappings<'a>(
    current: &'a Value,
    past: &'a Value,
) -> Result<(&'a BTreeMap<String, Value>, &'a BTreeMap<String, Value>), InvalidRootError> {
    let current_map = current.as_mapping().ok_or(InvalidRootError {
        side: "current",
        variant: current.variant_name(),
    })?;
    let past_map = past.as_mapping().ok_or(InvalidRootError {
        side: "past",
        variant: past.variant_name(),
    })?;
    Ok((current_map, past_map))
}

/// Copy a root mapping, sorting each directly held sequence ascending.
///
/// Applied one level deep only: a sequence nested inside a root-level mapping
/// value is not touched. Equality and the subsequent walk both operate on the
/// post-sort values.
pub(crate) fn sort_root_sequences(map: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Sequence(items) => {
                    let mut items = items.clone();
                    items.sort_by(|a, b| a.total_cmp(b));
                    Value::Sequence(items)
                }
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Partition the key sets of two already-normalized root mappings.
pub(crate) fn classify_sorted(
    current: &BTreeMap<String, Value>,
    past: &BTreeMap<String, Value>,
) -> RootClassification {
    let mut classification = RootClassification::default();

    for (key, current_val) in current {
        match past.get(key) {
            Some(past_val) if current_val == past_val => {
                classification.unchanged.insert(key.clone());
            }
            Some(_) => {
                classification.changed.insert(key.clone());
            }
            None => {
                classification.added.insert(key.clone());
            }
        }
    }

    for key in past.keys() {
        if !current.contains_key(key) {
            classification.removed.insert(key.clone());
        }
    }

    classification
}
