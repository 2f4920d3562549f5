//! The recursive tree comparator.
//!
//! [`walk`] descends two values in lock-step and emits an ordered list of
//! [`DivergenceRecord`]s, each tagged with the slash-delimited path to the
//! divergence site (`/key/nested/[2]` style, `[i]` for sequence indices).
//!
//! Sequences are normalized before positional comparison: elements with an
//! exact deep-equal match on the other side are paired off (one occurrence
//! per match) and drop out, and only the residuals — in their original
//! relative order — are compared index by index. Reordering matched elements
//! therefore never produces a record, while unmatched elements remain
//! positionally significant.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One reported difference at a specific path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DivergenceRecord {
    /// The two sides have different variant tags (e.g. mapping vs sequence).
    TypeMismatch {
        path: String,
        left: Value,
        right: Value,
    },
    /// Two leaf values (or a leaf against a container under a shared mapping
    /// key) disagree.
    ScalarMismatch {
        path: String,
        left: Value,
        right: Value,
    },
    /// A mapping key present only on the left side.
    KeyAdded { path: String, key: String },
    /// A mapping key present only on the right side.
    KeyRemoved { path: String, key: String },
    /// Sequence residuals have different lengths; terminal for this subtree.
    ListLengthMismatch {
        path: String,
        left_len: usize,
        right_len: usize,
    },
    /// Positional mismatch between two residual sequence elements.
    ListItemMismatch {
        path: String,
        index: usize,
        left: Value,
        right: Value,
    },
}

impl DivergenceRecord {
    /// The path to the divergence site.
    pub fn path(&self) -> &str {
        match self {
            DivergenceRecord::TypeMismatch { path, .. }
            | DivergenceRecord::ScalarMismatch { path, .. }
            | DivergenceRecord::KeyAdded { path, .. }
            | DivergenceRecord::KeyRemoved { path, .. }
            | DivergenceRecord::ListLengthMismatch { path, .. }
            | DivergenceRecord::ListItemMismatch { path, .. } => path,
        }
    }
}

/// Compare two values and report every divergence beneath `path`.
///
/// Returns the ordered records and a flag that is `true` iff the two values
/// are structurally equal (no records were produced at this level or below).
/// Never fails: every difference between well-formed values is representable
/// as a record.
pub fn walk(left: &Value, right: &Value, path: &str) -> (Vec<DivergenceRecord>, bool) {
    let mut records = Vec::new();
    walk_into(left, right, path, &mut records);
    let equal = records.is_empty();
    (records, equal)
}

fn walk_into(left: &Value, right: &Value, path: &str, records: &mut Vec<DivergenceRecord>) {
    // Tag disagreement short-circuits: no recursion below a type mismatch.
    if !left.same_variant(right) {
        records.push(DivergenceRecord::TypeMismatch {
            path: path.to_string(),
            left: left.clone(),
            right: right.clone(),
        });
        return;
    }

    match (left, right) {
        (Value::Null, Value::Null) => {}
        (Value::Scalar(_), Value::Scalar(_)) => {
            if left != right {
                records.push(DivergenceRecord::ScalarMismatch {
                    path: path.to_string(),
                    left: left.clone(),
                    right: right.clone(),
                });
            }
        }
        (Value::Mapping(left_map), Value::Mapping(right_map)) => {
            for key in left_map.keys().filter(|k| !right_map.contains_key(*k)) {
                records.push(DivergenceRecord::KeyAdded {
                    path: path.to_string(),
                    key: key.clone(),
                });
            }
            for key in right_map.keys().filter(|k| !left_map.contains_key(*k)) {
                records.push(DivergenceRecord::KeyRemoved {
                    path: path.to_string(),
                    key: key.clone(),
                });
            }

            // Shared keys are all visited; a conflict under one key never
            // aborts its siblings.
            for (key, left_val) in left_map {
                let Some(right_val) = right_map.get(key) else {
                    continue;
                };
                if left_val == right_val {
                    continue;
                }
                let child = format!("{}/{}", path, key);
                if !left_val.is_container() || !right_val.is_container() {
                    records.push(DivergenceRecord::ScalarMismatch {
                        path: child,
                        left: left_val.clone(),
                        right: right_val.clone(),
                    });
                } else {
                    walk_into(left_val, right_val, &child, records);
                }
            }
        }
        (Value::Sequence(left_seq), Value::Sequence(right_seq)) => {
            let (left_res, right_res) = residuals(left_seq, right_seq);

            if left_res.len() != right_res.len() {
                records.push(DivergenceRecord::ListLengthMismatch {
                    path: path.to_string(),
                    left_len: left_res.len(),
                    right_len: right_res.len(),
                });
                return;
            }

            for (index, (left_val, right_val)) in
                left_res.iter().zip(right_res.iter()).enumerate()
            {
                let child = format!("{}/[{}]", path, index);
                if !left_val.same_variant(right_val) {
                    records.push(DivergenceRecord::TypeMismatch {
                        path: child,
                        left: (*left_val).clone(),
                        right: (*right_val).clone(),
                    });
                } else if !left_val.is_container() || !right_val.is_container() {
                    records.push(DivergenceRecord::ListItemMismatch {
                        path: child,
                        index,
                        left: (*left_val).clone(),
                        right: (*right_val).clone(),
                    });
                } else {
                    walk_into(left_val, right_val, &child, records);
                }
            }
        }
        // same_variant already matched above; the arms are exhaustive.
        _ => unreachable!("variant tags agree"),
    }
}

/// Remove the multiset intersection of two sequences.
///
/// Each left element consumes at most one deep-equal right element. The
/// returned residuals keep their original relative order. The scan is O(n·m);
/// floats keep `Value` out of hash-based matching and configuration-sized
/// documents do not need it.
fn residuals<'a>(left: &'a [Value], right: &'a [Value]) -> (Vec<&'a Value>, Vec<&'a Value>) {
    let mut matched = vec![false; right.len()];
    let mut left_res = Vec::new();

    for left_val in left {
        let found = right
            .iter()
            .enumerate()
            .find(|(i, right_val)| !matched[*i] && *right_val == left_val);
        match found {
            Some((i, _)) => matched[i] = true,
            None => left_res.push(left_val),
        }
    }

    let right_res = right
        .iter()
        .enumerate()
        .filter(|(i, _)| !matched[*i])
        .map(|(_, v)| v)
        .collect();

    (left_res, right_res)
}
