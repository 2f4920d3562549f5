//! Error types for report rendering.

use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON serialization of the report failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
