//! # stance-engine
//!
//! Deterministic compensation → muscle-imbalance inference.
//!
//! Data flows one way:
//!
//! ```text
//! ObservationSnapshot → Analyzer::scan (rule table + syndrome rules)
//!                     → consolidate → AnalysisResult
//! ```
//!
//! The engine is pure: no I/O, no state across calls, fresh result per call.
//!
//! ```
//! use stance_core::{AssessmentCategory, ObservationSnapshot};
//!
//! let snapshot = ObservationSnapshot::new()
//!     .flag(AssessmentCategory::OverheadSquat, "frontView", "knees", "knee-valgus", true)
//!     .expect("no conflicting flags");
//! let result = stance_engine::analyze(&snapshot);
//! assert_eq!(result.total_compensations, 1);
//! ```

mod analyzer;
mod boundary;
mod consolidate;
mod error;

pub use analyzer::{Analyzer, RawAnalysis};
pub use boundary::{snapshot_from_str, snapshot_from_value};
pub use consolidate::consolidate;
pub use error::EngineError;

use stance_core::{AnalysisResult, ObservationSnapshot};

/// Analyze a snapshot with the bundled rule set.
#[must_use]
pub fn analyze(snapshot: &ObservationSnapshot) -> AnalysisResult {
    Analyzer::builtin().analyze(snapshot)
}

/// Validate a form snapshot JSON value and analyze it with the bundled rules.
///
/// # Errors
///
/// Returns `EngineError` if the value violates the form snapshot contract; no
/// rule is evaluated in that case.
pub fn analyze_value(value: &serde_json::Value) -> Result<AnalysisResult, EngineError> {
    Analyzer::builtin().analyze_value(value)
}

/// Parse, validate and analyze form snapshot JSON text with the bundled rules.
///
/// # Errors
///
/// As [`analyze_value`], plus `EngineError::Json` for text that is not JSON.
pub fn analyze_json(text: &str) -> Result<AnalysisResult, EngineError> {
    Analyzer::builtin().analyze_json(text)
}

impl Analyzer<'_> {
    /// Validate a form snapshot JSON value and analyze it.
    ///
    /// # Errors
    ///
    /// As [`snapshot_from_value`].
    pub fn analyze_value(&self, value: &serde_json::Value) -> Result<AnalysisResult, EngineError> {
        let snapshot = snapshot_from_value(value)?;
        Ok(self.analyze(&snapshot))
    }

    /// Parse, validate and analyze form snapshot JSON text.
    ///
    /// # Errors
    ///
    /// As [`snapshot_from_str`].
    pub fn analyze_json(&self, text: &str) -> Result<AnalysisResult, EngineError> {
        let snapshot = snapshot_from_str(text)?;
        Ok(self.analyze(&snapshot))
    }
}
