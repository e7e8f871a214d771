//! Rule document selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Replacement rule document. Empty means the bundled rules.
    #[serde(default)]
    pub path: String,
}

impl RulesConfig {
    /// The configured rule document, if one replaces the bundled rules.
    #[must_use]
    pub fn document_path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
