//! Single pass over a snapshot producing raw, non-deduplicated accumulations.

use std::collections::HashSet;

use stance_core::{
    AssessmentCategory, CompensationId, Diagnostic, MuscleFinding, ObservationSnapshot,
    PriorityArea, Syndrome,
};
use stance_rules::{RuleSet, RuleTable, SyndromeRules};

use crate::consolidate::consolidate;

/// Accumulated hits before consolidation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAnalysis {
    pub raw_overactive: Vec<MuscleFinding>,
    pub raw_underactive: Vec<MuscleFinding>,
    pub raw_priority: Vec<PriorityArea>,
    pub syndromes: Vec<Syndrome>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Evaluates snapshots against an injected rule table and syndrome rules.
///
/// Holds only shared references; one analyzer can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'r> {
    table: &'r RuleTable,
    syndromes: &'r SyndromeRules,
}

impl<'r> Analyzer<'r> {
    #[must_use]
    pub const fn new(table: &'r RuleTable, syndromes: &'r SyndromeRules) -> Self {
        Self { table, syndromes }
    }

    #[must_use]
    pub const fn from_rules(rules: &'r RuleSet) -> Self {
        Self::new(&rules.table, &rules.syndromes)
    }

    #[must_use]
    pub const fn table(&self) -> &'r RuleTable {
        self.table
    }

    /// Walk the snapshot in canonical category order.
    ///
    /// A compensation id triggers at most once per category: left and right
    /// legs of the single-leg squat flagging the same pattern contribute one
    /// set of findings and one priority entry.
    #[must_use]
    pub fn scan(&self, snapshot: &ObservationSnapshot) -> RawAnalysis {
        let mut raw = RawAnalysis::default();

        for category in AssessmentCategory::ALL {
            let mut triggered: HashSet<&CompensationId> = HashSet::new();

            for observation in snapshot.observations(category) {
                if !observation.present || !triggered.insert(&observation.compensation_id) {
                    continue;
                }

                let Some(rule) = self.table.lookup(observation.compensation_id.as_str()) else {
                    tracing::warn!(
                        %category,
                        compensation = %observation.compensation_id,
                        "unrecognized compensation; skipping"
                    );
                    raw.diagnostics
                        .push(Diagnostic::unrecognized(category, &observation.compensation_id));
                    continue;
                };

                raw.raw_overactive.extend(rule.overactive.iter().cloned());
                raw.raw_underactive.extend(rule.underactive.iter().cloned());
                raw.raw_priority.push(rule.priority.clone());
            }
        }

        raw.syndromes = self.syndromes.evaluate(snapshot);
        raw
    }

    /// Scan and consolidate into the public result.
    #[must_use]
    pub fn analyze(&self, snapshot: &ObservationSnapshot) -> stance_core::AnalysisResult {
        let result = consolidate(self.scan(snapshot));
        tracing::debug!(
            total_compensations = result.total_compensations,
            overactive = result.overactive.len(),
            underactive = result.underactive.len(),
            syndromes = result.syndromes.len(),
            diagnostics = result.diagnostics.len(),
            "analysis complete"
        );
        result
    }
}

impl Analyzer<'static> {
    /// Analyzer over the bundled rule set.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_rules(RuleSet::builtin())
    }
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}
