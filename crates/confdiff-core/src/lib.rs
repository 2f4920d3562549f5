//! Core comparison engine for confdiff.
//!
//! Compares two hierarchical documents (mappings, sequences, scalars — the
//! shape produced by parsing YAML, JSON, or TOML) and reports which root keys
//! were added, removed, unchanged, or changed, with a path-annotated record
//! for every divergence inside a changed key.
//!
//! This crate is pure: no I/O, no rendering. Loading files into [`Value`]
//! trees and printing a [`DiffReport`] live in the `confdiff-loader` and
//! `confdiff-render` crates.
//!
//! # Key Types
//!
//! - [`Value`] / [`Scalar`] -- The document tree model
//! - [`RootClassification`] / [`classify`] -- Root-level key partition
//! - [`DivergenceRecord`] / [`walk`] -- The recursive comparator
//! - [`DiffReport`] -- Classification plus per-key walk records

pub mod classify;
pub mod error;
pub mod report;
pub mod value;
pub mod walk;

pub use classify::{classify, RootClassification};
pub use error::InvalidRootError;
pub use report::DiffReport;
pub use value::{Scalar, Value};
pub use walk::{walk, DivergenceRecord};
