//! The document value model.
//!
//! A parsed document is a tree of [`Value`] nodes: null, scalar, sequence, or
//! mapping. Mappings use `BTreeMap` so key iteration — and therefore the
//! emission order of divergence records — is deterministic.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in a parsed document tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An explicit null.
    Null,
    /// A leaf scalar.
    Scalar(Scalar),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// A map from unique string keys to values.
    Mapping(BTreeMap<String, Value>),
}

/// A leaf scalar: boolean, number, or string.
///
/// Equality is exact within a type; a number never equals a string or a
/// boolean. `Int` and `Float` are both numbers and compare numerically, so
/// `Int(1) == Float(1.0)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::Int(a), Scalar::Float(b)) | (Scalar::Float(b), Scalar::Int(a)) => {
                int_float_cmp(*a, *b) == Ordering::Equal
            }
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// The variant name, for error messages and type-mismatch reporting.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Scalar(_) => "scalar",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Returns `true` for sequences and mappings.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    /// Returns the mapping entries if this value is a mapping.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns `true` if the variant tags of `self` and `other` agree.
    ///
    /// Tags are compared at the `Value` level only: two scalars always share
    /// a tag, even when one is a string and the other a number.
    pub fn same_variant(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// A deterministic total order over values.
    ///
    /// Used to sort root-level sequences before classification. Variants rank
    /// `Null < Scalar < Sequence < Mapping`; scalars rank booleans before
    /// numbers before strings, with numbers compared numerically across the
    /// `Int`/`Float` representations; containers compare lexicographically.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Scalar(a), Value::Scalar(b)) => a.total_cmp(b),
            (Value::Sequence(a), Value::Sequence(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    let ord = x.total_cmp(y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            (Value::Mapping(a), Value::Mapping(b)) => {
                for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
                    let ord = ka.cmp(kb).then_with(|| va.total_cmp(vb));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Scalar(_) => 1,
            Value::Sequence(_) => 2,
            Value::Mapping(_) => 3,
        }
    }
}

impl Scalar {
    fn total_cmp(&self, other: &Scalar) -> Ordering {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a.cmp(b),
            (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
            (Scalar::Float(a), Scalar::Float(b)) => a.total_cmp(b),
            (Scalar::Int(a), Scalar::Float(b)) => int_float_cmp(*a, *b),
            (Scalar::Float(a), Scalar::Int(b)) => int_float_cmp(*b, *a).reverse(),
            (Scalar::Str(a), Scalar::Str(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Scalar::Bool(_) => 0,
            Scalar::Int(_) | Scalar::Float(_) => 1,
            Scalar::Str(_) => 2,
        }
    }
}

/// Exact comparison of an integer against a float.
///
/// `a as f64` rounds integers above 2^53, so a bare cast would compare
/// `Int(2^53 + 1)` equal to `Float(2^53)`. When the cast lands exactly on
/// `b`, the tie is broken by the exact integer values: `b` is then integral,
/// and either exceeds every `i64` (the cast rounded up to 2^63) or converts
/// back losslessly for an exact `i64` comparison.
fn int_float_cmp(a: i64, b: f64) -> Ordering {
    let approx = (a as f64).total_cmp(&b);
    if approx != Ordering::Equal {
        return approx;
    }
    if b >= i64::MAX as f64 {
        return Ordering::Less;
    }
    a.cmp(&(b as i64))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Int(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::Float(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::Str(s))
    }
}
