//! Error types for document loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a document from disk.
///
/// All of them are fatal to the comparison: a diff over a document that could
/// not be read or parsed is meaningless, so no partial recovery is attempted.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid for its format.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The file parsed but contains constructs with no document-tree
    /// representation (e.g. YAML tags or non-scalar mapping keys).
    #[error("unsupported document structure in {path}: {message}")]
    InvalidDocument { path: PathBuf, message: String },
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;
