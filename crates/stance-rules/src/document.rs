//! Serialized form of a rule document.
//!
//! A document carries a `version`, one `[[compensations]]` table per
//! compensation id and one `[[syndromes]]` table per syndrome rule. It is
//! validated and indexed by [`RuleSet::from_document`](crate::RuleSet::from_document).

use serde::{Deserialize, Serialize};
use stance_core::{PriorityArea, Syndrome};

use crate::error::RulesError;

/// Top-level rule document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDocument {
    pub version: u32,
    #[serde(default)]
    pub compensations: Vec<CompensationEntry>,
    #[serde(default)]
    pub syndromes: Vec<SyndromeEntry>,
}

/// Muscles and recommendation text for one compensation id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompensationEntry {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub overactive: Vec<MuscleEntry>,
    #[serde(default)]
    pub underactive: Vec<MuscleEntry>,
    pub priority: PriorityArea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MuscleEntry {
    pub muscle: String,
    pub rationale: String,
}

/// A syndrome and the compensations that indicate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyndromeEntry {
    pub syndrome: Syndrome,
    pub indicators: Vec<String>,
    pub minimum_matches: usize,
}

impl RuleDocument {
    /// Parse a TOML rule document.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::Parse` if the text is not a valid document.
    pub fn from_toml_str(text: &str) -> Result<Self, RulesError> {
        Ok(toml::from_str(text)?)
    }
}
