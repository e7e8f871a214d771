//! Analysis behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Treat unrecognized compensations as a failure instead of a diagnostic.
    #[serde(default)]
    pub strict: bool,
}
