//! Cross-cutting error types for Stance.
//!
//! Domain-specific errors (`RulesError`, `SchemaError`, `EngineError`) live in
//! their own crates. The CLI converges everything on `anyhow`.

use thiserror::Error;

/// Errors raised while building or converting observation data.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A category name is not one of the known assessments.
    #[error("Unknown assessment category: {0}")]
    UnknownCategory(String),

    /// The same checkpoint flag was recorded twice with different states.
    #[error(
        "Conflicting observation for {compensation_id} at {category}/{view}/{checkpoint}: \
         recorded both present and absent"
    )]
    ConflictingObservation {
        category: String,
        view: String,
        checkpoint: String,
        compensation_id: String,
    },
}
