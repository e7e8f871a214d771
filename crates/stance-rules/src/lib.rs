//! # stance-rules
//!
//! The hand-authored rule data behind the Stance analysis engine:
//! - `RuleTable`: compensation id → overactive / underactive muscles and the
//!   recommendation text for its priority entry
//! - `SyndromeRules`: which combinations of compensations name a syndrome
//!
//! The bundled tables live in `data/rules.toml` and are parsed once per process
//! ([`RuleSet::builtin`]). A replacement document can be loaded with
//! [`RuleSet::from_toml_str`] or [`RuleSet::load`] to recalibrate without a
//! rebuild.

mod document;
mod error;
mod syndromes;
mod table;

pub use document::{CompensationEntry, MuscleEntry, RuleDocument, SyndromeEntry};
pub use error::RulesError;
pub use syndromes::{SyndromeRule, SyndromeRules};
pub use table::{CompensationRule, RuleTable};

use std::path::Path;
use std::sync::LazyLock;

const BUNDLED_RULES: &str = include_str!("../data/rules.toml");

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::from_toml_str(BUNDLED_RULES).unwrap_or_else(|e| panic!("bundled rules.toml: {e}"))
});

/// A validated rule table together with its syndrome rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub version: u32,
    pub table: RuleTable,
    pub syndromes: SyndromeRules,
}

impl RuleSet {
    /// The bundled rule set, parsed on first use.
    ///
    /// # Panics
    ///
    /// Panics if the bundled document is invalid. The document is compiled
    /// into the crate and covered by tests, so this does not happen in a
    /// released build.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Validate and index a parsed document.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::Invalid` if a table invariant is broken.
    pub fn from_document(document: RuleDocument) -> Result<Self, RulesError> {
        let table = RuleTable::from_entries(document.compensations)?;
        let syndromes = SyndromeRules::from_entries(document.syndromes)?;

        for rule in syndromes.rules() {
            for indicator in &rule.indicators {
                if !table.contains(indicator.as_str()) {
                    tracing::debug!(
                        syndrome = %rule.syndrome,
                        %indicator,
                        "syndrome indicator has no compensation rule"
                    );
                }
            }
        }

        tracing::debug!(
            version = document.version,
            compensations = table.len(),
            syndromes = syndromes.len(),
            "rule set loaded"
        );

        Ok(Self {
            version: document.version,
            table,
            syndromes,
        })
    }

    /// Parse and validate a TOML rule document.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::Parse` for malformed TOML or `RulesError::Invalid`
    /// for content that breaks a table invariant.
    pub fn from_toml_str(text: &str) -> Result<Self, RulesError> {
        Self::from_document(RuleDocument::from_toml_str(text)?)
    }

    /// Read, parse and validate a rule document file.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::Io` if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let text = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
