//! The observation model: single compensation flags and the snapshot that
//! groups them by assessment category.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AssessmentCategory;
use crate::errors::CoreError;

/// Stable key of a compensation pattern (e.g. `knee-valgus`, `forward-head`).
///
/// The same id is shared across categories when the same physiological
/// pattern can be observed during different assessments.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CompensationId(String);

impl CompensationId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id for a form field the checklist does not know: `{view}.{checkpoint}.{field}`.
    ///
    /// The `.` separators keep these ids out of the rule id space, so an
    /// unknown field never matches a rule or conflicts with a catalogued flag.
    #[must_use]
    pub fn uncatalogued(view: &str, checkpoint: &str, field: &str) -> Self {
        Self(format!("{view}.{checkpoint}.{field}"))
    }

    /// Whether `id` is usable as a rule id: non-empty lowercase ascii
    /// alphanumerics and `-`.
    #[must_use]
    pub fn is_rule_id(id: &str) -> bool {
        !id.is_empty()
            && id
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    }
}

impl From<&str> for CompensationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CompensationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for CompensationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompensationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One checkbox of the assessment: was `compensation_id` seen at this
/// checkpoint?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompensationObservation {
    pub category: AssessmentCategory,
    pub view: String,
    pub checkpoint: String,
    pub compensation_id: CompensationId,
    pub present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CompensationObservation {
    #[must_use]
    pub fn new(
        category: AssessmentCategory,
        view: impl Into<String>,
        checkpoint: impl Into<String>,
        compensation_id: impl Into<CompensationId>,
        present: bool,
    ) -> Self {
        Self {
            category,
            view: view.into(),
            checkpoint: checkpoint.into(),
            compensation_id: compensation_id.into(),
            present,
            note: None,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether `other` records the same flag (category, view, checkpoint, id).
    fn same_flag(&self, other: &Self) -> bool {
        self.category == other.category
            && self.view == other.view
            && self.checkpoint == other.checkpoint
            && self.compensation_id == other.compensation_id
    }
}

/// All observations captured at analysis time, grouped by category.
///
/// Categories iterate in canonical order; observations within a category keep
/// the order they were recorded in. A category that was never recorded holds
/// no observations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ObservationSnapshot {
    #[serde(default)]
    categories: BTreeMap<AssessmentCategory, Vec<CompensationObservation>>,
}

impl ObservationSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation.
    ///
    /// Recording the same flag twice with the same state is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ConflictingObservation` if the flag was already
    /// recorded with the opposite state.
    pub fn record(&mut self, observation: CompensationObservation) -> Result<(), CoreError> {
        let entries = self.categories.entry(observation.category).or_default();

        if let Some(existing) = entries.iter().find(|e| e.same_flag(&observation)) {
            if existing.present == observation.present {
                return Ok(());
            }
            return Err(CoreError::ConflictingObservation {
                category: observation.category.to_string(),
                view: observation.view,
                checkpoint: observation.checkpoint,
                compensation_id: observation.compensation_id.to_string(),
            });
        }

        entries.push(observation);
        Ok(())
    }

    /// Builder form of [`record`](Self::record) for a bare flag.
    ///
    /// # Errors
    ///
    /// Same as [`record`](Self::record).
    pub fn flag(
        mut self,
        category: AssessmentCategory,
        view: &str,
        checkpoint: &str,
        compensation_id: &str,
        present: bool,
    ) -> Result<Self, CoreError> {
        self.record(CompensationObservation::new(
            category,
            view,
            checkpoint,
            compensation_id,
            present,
        ))?;
        Ok(self)
    }

    /// Observations for one category; empty if the category is absent.
    #[must_use]
    pub fn observations(&self, category: AssessmentCategory) -> &[CompensationObservation] {
        self.categories.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Recorded categories in canonical order.
    pub fn categories(&self) -> impl Iterator<Item = AssessmentCategory> + '_ {
        self.categories.keys().copied()
    }

    /// All observations, categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &CompensationObservation> + '_ {
        self.categories.values().flatten()
    }

    /// Whether `compensation_id` is present in any category or checkpoint.
    #[must_use]
    pub fn is_present(&self, compensation_id: &str) -> bool {
        self.iter()
            .any(|o| o.present && o.compensation_id.as_str() == compensation_id)
    }

    /// Number of observations flagged present.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.iter().filter(|o| o.present).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_category_has_no_observations() {
        let snapshot = ObservationSnapshot::new();
        assert!(snapshot.observations(AssessmentCategory::Push).is_empty());
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.categories().count(), 0);
    }

    #[test]
    fn identical_duplicate_is_ignored() {
        let snapshot = ObservationSnapshot::new()
            .flag(AssessmentCategory::Pull, "sideView", "head", "forward-head", true)
            .unwrap()
            .flag(AssessmentCategory::Pull, "sideView", "head", "forward-head", true)
            .unwrap();
        assert_eq!(snapshot.observations(AssessmentCategory::Pull).len(), 1);
    }

    #[test]
    fn conflicting_duplicate_is_rejected() {
        let result = ObservationSnapshot::new()
            .flag(AssessmentCategory::Pull, "sideView", "head", "forward-head", true)
            .unwrap()
            .flag(AssessmentCategory::Pull, "sideView", "head", "forward-head", false);
        assert!(matches!(
            result,
            Err(CoreError::ConflictingObservation { .. })
        ));
    }

    #[test]
    fn same_id_at_different_views_is_two_observations() {
        let snapshot = ObservationSnapshot::new()
            .flag(AssessmentCategory::SingleLegSquat, "leftLeg", "knee", "knee-valgus", true)
            .unwrap()
            .flag(AssessmentCategory::SingleLegSquat, "rightLeg", "knee", "knee-valgus", false)
            .unwrap();
        assert_eq!(
            snapshot.observations(AssessmentCategory::SingleLegSquat).len(),
            2
        );
        assert_eq!(snapshot.present_count(), 1);
    }

    #[test]
    fn categories_iterate_in_canonical_order() {
        let snapshot = ObservationSnapshot::new()
            .flag(AssessmentCategory::StaticPosture, "sideView", "head", "forward-head", true)
            .unwrap()
            .flag(AssessmentCategory::OverheadSquat, "frontView", "knees", "knee-valgus", true)
            .unwrap();
        let order: Vec<_> = snapshot.categories().collect();
        assert_eq!(
            order,
            vec![
                AssessmentCategory::OverheadSquat,
                AssessmentCategory::StaticPosture
            ]
        );
    }

    #[test]
    fn uncatalogued_ids_are_never_rule_ids() {
        let id = CompensationId::uncatalogued("frontView", "knees", "knee-valgus");
        assert_eq!(id.as_str(), "frontView.knees.knee-valgus");
        assert!(!CompensationId::is_rule_id(id.as_str()));
        assert!(CompensationId::is_rule_id("knee-valgus"));
        assert!(!CompensationId::is_rule_id(""));
    }

    #[test]
    fn is_present_looks_across_categories() {
        let snapshot = ObservationSnapshot::new()
            .flag(AssessmentCategory::Push, "sideView", "lphc", "low-back-arches", false)
            .unwrap()
            .flag(AssessmentCategory::Pull, "sideView", "lphc", "low-back-arches", true)
            .unwrap();
        assert!(snapshot.is_present("low-back-arches"));
        assert!(!snapshot.is_present("forward-head"));
    }

    #[test]
    fn snapshot_json_roundtrip() {
        let snapshot = ObservationSnapshot::new()
            .flag(AssessmentCategory::Push, "sideView", "shoulders", "shoulder-elevation", true)
            .unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"push\""));
        let back: ObservationSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
