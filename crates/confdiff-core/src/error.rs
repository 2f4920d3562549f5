//! Error types for the core comparison engine.

use thiserror::Error;

/// A root document handed to classification was not a mapping.
///
/// Classification only makes sense over two key sets; anything else is a
/// caller error, not a divergence. The comparator itself never fails on
/// well-formed [`Value`](crate::Value) trees — every difference it finds is
/// reported as data.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{side} root document is not a mapping (got {variant})")]
pub struct InvalidRootError {
    /// Which input was malformed: `"current"` or `"past"`.
    pub side: &'static str,
    /// The variant name the root actually had.
    pub variant: &'static str,
}
