//! Planner error types.
//!
//! Every failure mode has a named variant. The computation core cannot
//! fail; errors only arise at the input-loading boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid inputs JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
