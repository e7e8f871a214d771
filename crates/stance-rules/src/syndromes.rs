//! Second-order syndrome rules.
//!
//! A syndrome is emitted when at least `minimum_matches` of its distinct
//! indicator compensations are present anywhere in the snapshot.

use std::collections::HashSet;

use serde::Serialize;
use stance_core::{CompensationId, ObservationSnapshot, Syndrome};

use crate::document::SyndromeEntry;
use crate::error::RulesError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyndromeRule {
    pub syndrome: Syndrome,
    /// Distinct indicator ids, authored order.
    pub indicators: Vec<CompensationId>,
    pub minimum_matches: usize,
}

impl SyndromeRule {
    /// Number of distinct indicators present in `snapshot`.
    #[must_use]
    pub fn matches(&self, snapshot: &ObservationSnapshot) -> usize {
        self.indicators
            .iter()
            .filter(|id| snapshot.is_present(id.as_str()))
            .count()
    }

    #[must_use]
    pub fn is_met(&self, snapshot: &ObservationSnapshot) -> bool {
        self.matches(snapshot) >= self.minimum_matches
    }
}

/// Syndrome rules in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SyndromeRules {
    rules: Vec<SyndromeRule>,
}

impl SyndromeRules {
    /// Build the rule set from document entries.
    ///
    /// Repeated indicators within one rule are collapsed.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::Invalid` for a syndrome declared twice, a
    /// malformed indicator id, a rule with no indicators, or a threshold
    /// outside `1..=indicators`.
    pub fn from_entries(entries: Vec<SyndromeEntry>) -> Result<Self, RulesError> {
        let mut rules: Vec<SyndromeRule> = Vec::with_capacity(entries.len());

        for entry in entries {
            if rules.iter().any(|r| r.syndrome == entry.syndrome) {
                return Err(RulesError::Invalid(format!(
                    "{} is declared more than once",
                    entry.syndrome
                )));
            }

            let mut seen = HashSet::new();
            let indicators: Vec<CompensationId> = entry
                .indicators
                .iter()
                .map(|id| id.trim())
                .filter(|id| !id.is_empty() && seen.insert(*id))
                .map(CompensationId::from)
                .collect();

            let malformed = indicators
                .iter()
                .find(|id| !CompensationId::is_rule_id(id.as_str()));
            if let Some(bad) = malformed {
                return Err(RulesError::Invalid(format!(
                    "{} has malformed indicator '{bad}'",
                    entry.syndrome
                )));
            }
            if indicators.is_empty() {
                return Err(RulesError::Invalid(format!(
                    "{} has no indicators",
                    entry.syndrome
                )));
            }
            if entry.minimum_matches == 0 || entry.minimum_matches > indicators.len() {
                return Err(RulesError::Invalid(format!(
                    "{} requires {} matches but has {} distinct indicators",
                    entry.syndrome,
                    entry.minimum_matches,
                    indicators.len()
                )));
            }

            rules.push(SyndromeRule {
                syndrome: entry.syndrome,
                indicators,
                minimum_matches: entry.minimum_matches,
            });
        }

        Ok(Self { rules })
    }

    /// Syndromes whose threshold is met, in declaration order.
    #[must_use]
    pub fn evaluate(&self, snapshot: &ObservationSnapshot) -> Vec<Syndrome> {
        self.rules
            .iter()
            .filter(|rule| rule.is_met(snapshot))
            .map(|rule| rule.syndrome)
            .collect()
    }

    pub fn rules(&self) -> impl Iterator<Item = &SyndromeRule> + '_ {
        self.rules.iter()
    }

    #[must_use]
    pub fn get(&self, syndrome: Syndrome) -> Option<&SyndromeRule> {
        self.rules.iter().find(|r| r.syndrome == syndrome)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
