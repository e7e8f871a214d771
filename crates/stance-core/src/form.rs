//! Wire format of the wizard's form state.
//!
//! ```json
//! { "overheadSquat": { "frontView": { "knees": { "kneesMoveinward": true } } } }
//! ```
//!
//! Below each category the nesting is `view → checkpoint → field → flag`. A
//! flag is a bare boolean or `{ "present": bool, "note": "..." }`. Categories
//! are optional; unknown top-level keys are rejected.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::checklist;
use crate::enums::AssessmentCategory;
use crate::errors::CoreError;
use crate::observation::{CompensationId, CompensationObservation, ObservationSnapshot};

/// `view → checkpoint → field → flag` for one assessment.
pub type AssessmentForm = BTreeMap<String, BTreeMap<String, BTreeMap<String, FormFlag>>>;

/// A checkbox value as stored by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FormFlag {
    Checked(bool),
    Detailed(DetailedFlag),
}

/// Checkbox value with the examiner's free-text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DetailedFlag {
    pub present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl FormFlag {
    #[must_use]
    pub const fn present(&self) -> bool {
        match self {
            Self::Checked(present) => *present,
            Self::Detailed(flag) => flag.present,
        }
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        match self {
            Self::Checked(_) => None,
            Self::Detailed(flag) => flag.note.as_deref(),
        }
    }
}

/// The complete form state handed over by the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormSnapshot {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overhead_squat: AssessmentForm,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub single_leg_squat: AssessmentForm,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub push: AssessmentForm,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pull: AssessmentForm,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub static_posture: AssessmentForm,
}

impl FormSnapshot {
    #[must_use]
    pub const fn category(&self, category: AssessmentCategory) -> &AssessmentForm {
        match category {
            AssessmentCategory::OverheadSquat => &self.overhead_squat,
            AssessmentCategory::SingleLegSquat => &self.single_leg_squat,
            AssessmentCategory::Push => &self.push,
            AssessmentCategory::Pull => &self.pull,
            AssessmentCategory::StaticPosture => &self.static_posture,
        }
    }

    pub fn category_mut(&mut self, category: AssessmentCategory) -> &mut AssessmentForm {
        match category {
            AssessmentCategory::OverheadSquat => &mut self.overhead_squat,
            AssessmentCategory::SingleLegSquat => &mut self.single_leg_squat,
            AssessmentCategory::Push => &mut self.push,
            AssessmentCategory::Pull => &mut self.pull,
            AssessmentCategory::StaticPosture => &mut self.static_posture,
        }
    }

    /// Set a single flag, creating the intermediate levels as needed.
    pub fn set(
        &mut self,
        category: AssessmentCategory,
        view: &str,
        checkpoint: &str,
        field: &str,
        flag: FormFlag,
    ) {
        self.category_mut(category)
            .entry(view.to_string())
            .or_default()
            .entry(checkpoint.to_string())
            .or_default()
            .insert(field.to_string(), flag);
    }

    /// Form with every catalogued checkbox ticked.
    #[must_use]
    pub fn all_checked() -> Self {
        let mut form = Self::default();
        for item in checklist::items() {
            form.set(
                item.category,
                item.view,
                item.checkpoint,
                item.field,
                FormFlag::Checked(true),
            );
        }
        form
    }

    /// Convert to an observation snapshot.
    ///
    /// Catalogued fields resolve to their compensation id and keep catalog
    /// order. Uncatalogued fields follow in lexicographic order under
    /// [`CompensationId::uncatalogued`], which no rule can match.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ConflictingObservation` if two fields resolve to
    /// the same flag with different states.
    pub fn to_snapshot(&self) -> Result<ObservationSnapshot, CoreError> {
        let mut snapshot = ObservationSnapshot::new();

        for category in AssessmentCategory::ALL {
            let mut pending: Vec<(usize, CompensationObservation)> = Vec::new();

            for (view, checkpoints) in self.category(category) {
                for (checkpoint, fields) in checkpoints {
                    for (field, flag) in fields {
                        let resolved = checklist::resolve(category, view, checkpoint, field);
                        let (position, id) = match resolved {
                            Some((pos, item)) => (pos, CompensationId::from(item.compensation_id)),
                            None => (
                                usize::MAX,
                                CompensationId::uncatalogued(view, checkpoint, field),
                            ),
                        };

                        let mut observation = CompensationObservation::new(
                            category,
                            view.as_str(),
                            checkpoint.as_str(),
                            id,
                            flag.present(),
                        );
                        observation.note = flag.note().map(str::to_string);
                        pending.push((position, observation));
                    }
                }
            }

            pending.sort_by_key(|(position, _)| *position);
            for (_, observation) in pending {
                snapshot.record(observation)?;
            }
        }

        Ok(snapshot)
    }

    /// Rebuild the form state from a snapshot.
    ///
    /// Observations whose id matches a catalog item at the same checkpoint are
    /// written under that item's field. Uncatalogued ids get their original
    /// field key back; any other id is used as the field key.
    #[must_use]
    pub fn from_snapshot(snapshot: &ObservationSnapshot) -> Self {
        let mut form = Self::default();

        for observation in snapshot.iter() {
            let id = observation.compensation_id.as_str();
            let prefix = format!("{}.{}.", observation.view, observation.checkpoint);
            let field = checklist::for_category(observation.category)
                .find(|item| {
                    item.view == observation.view
                        && item.checkpoint == observation.checkpoint
                        && item.compensation_id == id
                })
                .map_or_else(
                    || id.strip_prefix(prefix.as_str()).unwrap_or(id),
                    |item| item.field,
                );

            let flag = match &observation.note {
                Some(note) => FormFlag::Detailed(DetailedFlag {
                    present: observation.present,
                    note: Some(note.clone()),
                }),
                None => FormFlag::Checked(observation.present),
            };

            form.set(
                observation.category,
                &observation.view,
                &observation.checkpoint,
                field,
                flag,
            );
        }

        form
    }
}
