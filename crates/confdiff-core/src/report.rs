//! The full comparison driver: classification plus per-key walks.

use serde::{Deserialize, Serialize};

use crate::classify::{classify_sorted, root_mappings, sort_root_sequences, RootClassification};
use crate::error::InvalidRootError;
use crate::value::Value;
use crate::walk::{walk, DivergenceRecord};

/// The complete result of comparing two documents.
///
/// Holds the four root-level key sets and the ordered divergence records
/// accumulated over the changed keys. This is what a renderer consumes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Root-level key classification.
    pub classification: RootClassification,
    /// Divergence records for every changed key, in ascending key order.
    pub records: Vec<DivergenceRecord>,
}

impl DiffReport {
    /// Compare two documents end to end.
    ///
    /// Classifies the root keys, then walks each changed key's pair of
    /// post-sort sub-trees with the path seeded as `/<key>`. Both documents
    /// must be mappings.
    pub fn compute(current: &Value, past: &Value) -> Result<Self, InvalidRootError> {
        let (current_map, past_map) = root_mappings(current, past)?;
        let current_sorted = sort_root_sequences(current_map);
        let past_sorted = sort_root_sequences(past_map);
        let classification = classify_sorted(&current_sorted, &past_sorted);

        let mut records = Vec::new();
        for key in &classification.changed {
            let seed = format!("/{}", key);
            let (key_records, _) = walk(&current_sorted[key], &past_sorted[key], &seed);
            records.extend(key_records);
        }

        Ok(Self {
            classification,
            records,
        })
    }

    /// Returns `true` if the documents differ anywhere.
    pub fn has_differences(&self) -> bool {
        !self.classification.is_identical()
    }
}
