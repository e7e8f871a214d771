//! Engine error types.
//!
//! Only boundary contract violations are errors. Recoverable conditions met
//! during analysis are reported as diagnostics on the result.

use stance_core::CoreError;
use stance_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Input text is not JSON.
    #[error("Snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input JSON does not have the form snapshot shape.
    #[error("Malformed snapshot: {}", errors.join("; "))]
    InvalidSnapshot { errors: Vec<String> },

    /// Observations contradict each other.
    #[error(transparent)]
    Observation(#[from] CoreError),

    /// Schema lookup or compilation failed.
    #[error(transparent)]
    Schema(SchemaError),
}

impl From<SchemaError> for EngineError {
    fn from(error: SchemaError) -> Self {
        match error {
            SchemaError::ValidationFailed { errors } => Self::InvalidSnapshot { errors },
            other => Self::Schema(other),
        }
    }
}
