//! Result types produced by the analysis engine.
//!
//! These structs define the JSON shape rendered by a results view or handed to
//! an external store. Field names are `camelCase`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AssessmentCategory, MuscleRole, Syndrome};
use crate::observation::CompensationId;

/// A muscle implicated by a compensation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MuscleFinding {
    pub muscle: String,
    pub rationale: String,
    pub role: MuscleRole,
}

impl MuscleFinding {
    #[must_use]
    pub fn new(muscle: impl Into<String>, rationale: impl Into<String>, role: MuscleRole) -> Self {
        Self {
            muscle: muscle.into(),
            rationale: rationale.into(),
            role,
        }
    }
}

/// Corrective-action bucket contributed by one triggering compensation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PriorityArea {
    pub area: String,
    pub issue: String,
    pub action: String,
}

/// Kind of non-fatal condition met during analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A present observation has no entry in the rule table.
    UnrecognizedCompensation,
}

/// Non-fatal diagnostic returned alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub category: AssessmentCategory,
    pub compensation_id: CompensationId,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn unrecognized(category: AssessmentCategory, compensation_id: &CompensationId) -> Self {
        Self {
            kind: DiagnosticKind::UnrecognizedCompensation,
            category,
            compensation_id: compensation_id.clone(),
            message: format!(
                "unrecognized compensation '{compensation_id}' in {category}; no rule table entry"
            ),
        }
    }
}

/// Immutable outcome of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overactive: Vec<MuscleFinding>,
    pub underactive: Vec<MuscleFinding>,
    pub priority: Vec<PriorityArea>,
    pub syndromes: Vec<Syndrome>,
    pub total_compensations: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    /// Whether any recoverable condition was reported.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
