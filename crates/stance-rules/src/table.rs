//! The compensation rule table.
//!
//! Read-only lookup from a compensation id to the muscles it implicates and the
//! corrective-action text it contributes. Entries keep their authored order.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use stance_core::{CompensationId, MuscleFinding, MuscleRole, PriorityArea};

use crate::document::{CompensationEntry, MuscleEntry};
use crate::error::RulesError;

/// Everything the rule table knows about one compensation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompensationRule {
    pub id: CompensationId,
    pub label: String,
    pub overactive: Vec<MuscleFinding>,
    pub underactive: Vec<MuscleFinding>,
    pub priority: PriorityArea,
}

impl CompensationRule {
    /// Findings for one role.
    #[must_use]
    pub fn findings(&self, role: MuscleRole) -> &[MuscleFinding] {
        match role {
            MuscleRole::Overactive => &self.overactive,
            MuscleRole::Underactive => &self.underactive,
        }
    }
}

/// Compensation id → rule, in authored order.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<CompensationRule>,
    index: HashMap<CompensationId, usize>,
}

impl RuleTable {
    /// Build a table from document entries.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::Invalid` for a malformed or duplicate id, an
    /// empty muscle name, or an empty priority area. Ids are lowercase ascii
    /// alphanumerics and `-` (see [`CompensationId::is_rule_id`]).
    pub fn from_entries(entries: Vec<CompensationEntry>) -> Result<Self, RulesError> {
        let mut table = Self::default();

        for entry in entries {
            let id = entry.id.trim();
            if id.is_empty() {
                return Err(RulesError::Invalid("compensation with empty id".into()));
            }
            if !CompensationId::is_rule_id(id) {
                return Err(RulesError::Invalid(format!(
                    "compensation id '{id}' must be lowercase letters, digits and '-'"
                )));
            }
            if entry.priority.area.trim().is_empty() {
                return Err(RulesError::Invalid(format!(
                    "compensation '{id}' has an empty priority area"
                )));
            }

            let id = CompensationId::from(id);
            if table.index.contains_key(&id) {
                return Err(RulesError::Invalid(format!(
                    "compensation '{id}' is declared more than once"
                )));
            }

            let rule = CompensationRule {
                overactive: to_findings(&id, entry.overactive, MuscleRole::Overactive)?,
                underactive: to_findings(&id, entry.underactive, MuscleRole::Underactive)?,
                label: entry.label,
                priority: entry.priority,
                id: id.clone(),
            };

            table.index.insert(id, table.rules.len());
            table.rules.push(rule);
        }

        Ok(table)
    }

    /// Look up a compensation. Unknown ids return `None`.
    #[must_use]
    pub fn lookup(&self, compensation_id: &str) -> Option<&CompensationRule> {
        self.index.get(compensation_id).map(|&i| &self.rules[i])
    }

    #[must_use]
    pub fn contains(&self, compensation_id: &str) -> bool {
        self.index.contains_key(compensation_id)
    }

    /// Rules in authored order.
    pub fn rules(&self) -> impl Iterator<Item = &CompensationRule> + '_ {
        self.rules.iter()
    }

    /// Compensation ids in authored order.
    pub fn ids(&self) -> impl Iterator<Item = &CompensationId> + '_ {
        self.rules.iter().map(|r| &r.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every muscle declared for `role`, first occurrence kept, authored order.
    #[must_use]
    pub fn muscle_union(&self, role: MuscleRole) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rules
            .iter()
            .flat_map(|r| r.findings(role))
            .map(|f| f.muscle.as_str())
            .filter(|m| seen.insert(*m))
            .collect()
    }
}

fn to_findings(
    id: &CompensationId,
    entries: Vec<MuscleEntry>,
    role: MuscleRole,
) -> Result<Vec<MuscleFinding>, RulesError> {
    entries
        .into_iter()
        .map(|entry| {
            let muscle = entry.muscle.trim();
            if muscle.is_empty() {
                return Err(RulesError::Invalid(format!(
                    "compensation '{id}' lists an {role} muscle with no name"
                )));
            }
            Ok(MuscleFinding::new(muscle, entry.rationale, role))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(id: &str, over: &[&str], under: &[&str]) -> CompensationEntry {
        let muscles = |names: &[&str]| {
            names
                .iter()
                .map(|m| MuscleEntry {
                    muscle: (*m).to_string(),
                    rationale: format!("{m} via {id}"),
                })
                .collect()
        };
        CompensationEntry {
            id: id.to_string(),
            label: String::new(),
            overactive: muscles(over),
            underactive: muscles(under),
            priority: PriorityArea {
                area: format!("{id} area"),
                issue: format!("{id} issue"),
                action: format!("{id} action"),
            },
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let table = RuleTable::from_entries(vec![entry("a", &["M1"], &["M2"])]).unwrap();

        let rule = table.lookup("a").unwrap();
        assert_eq!(rule.overactive[0].muscle, "M1");
        assert_eq!(rule.overactive[0].role, MuscleRole::Overactive);
        assert_eq!(rule.underactive[0].role, MuscleRole::Underactive);
        assert!(table.lookup("b").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = RuleTable::from_entries(vec![entry("a", &[], &[]), entry("a", &[], &[])]);
        assert!(matches!(result, Err(RulesError::Invalid(_))));
    }

    #[test]
    fn id_outside_rule_namespace_is_rejected() {
        for id in ["push.elbows.kneeValgus", "Knee-Valgus", "knee valgus"] {
            let result = RuleTable::from_entries(vec![entry(id, &["M1"], &[])]);
            assert!(matches!(result, Err(RulesError::Invalid(_))), "{id} accepted");
        }
    }

    #[test]
    fn empty_muscle_name_is_rejected() {
        let result = RuleTable::from_entries(vec![entry("a", &["  "], &[])]);
        assert!(matches!(result, Err(RulesError::Invalid(_))));
    }

    #[test]
    fn empty_id_is_rejected() {
        let result = RuleTable::from_entries(vec![entry(" ", &["M1"], &[])]);
        assert!(matches!(result, Err(RulesError::Invalid(_))));
    }

    #[test]
    fn muscle_union_keeps_first_occurrence_order() {
        let table = RuleTable::from_entries(vec![
            entry("a", &["M1", "M2"], &[]),
            entry("b", &["M3", "M1"], &[]),
        ])
        .unwrap();
        assert_eq!(
            table.muscle_union(MuscleRole::Overactive),
            vec!["M1", "M2", "M3"]
        );
        assert!(table.muscle_union(MuscleRole::Underactive).is_empty());
    }

    #[test]
    fn ids_follow_authored_order() {
        let table = RuleTable::from_entries(vec![
            entry("z", &[], &[]),
            entry("a", &[], &[]),
        ])
        .unwrap();
        let ids: Vec<&str> = table.ids().map(CompensationId::as_str).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }
}
