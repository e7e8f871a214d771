//! Turns raw accumulations into the public result.

use std::collections::HashSet;

use stance_core::{AnalysisResult, MuscleFinding};

use crate::analyzer::RawAnalysis;

/// Deduplicate muscles (first rationale wins), pass priority areas and
/// syndromes through unchanged.
#[must_use]
pub fn consolidate(raw: RawAnalysis) -> AnalysisResult {
    let total_compensations = raw.raw_priority.len();

    AnalysisResult {
        overactive: dedupe_by_muscle(raw.raw_overactive),
        underactive: dedupe_by_muscle(raw.raw_underactive),
        priority: raw.raw_priority,
        syndromes: raw.syndromes,
        total_compensations,
        diagnostics: raw.diagnostics,
    }
}

fn dedupe_by_muscle(findings: Vec<MuscleFinding>) -> Vec<MuscleFinding> {
    let mut seen: HashSet<String> = HashSet::with_capacity(findings.len());
    findings
        .into_iter()
        .filter(|f| seen.insert(f.muscle.clone()))
        .collect()
}
