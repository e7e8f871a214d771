//! Rule document error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    /// The rule document is not valid TOML or does not match the document shape.
    #[error("Rule document parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The rule document file could not be read.
    #[error("Failed to read rule document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document parsed but its content breaks a table invariant.
    #[error("Invalid rule document: {0}")]
    Invalid(String),
}
