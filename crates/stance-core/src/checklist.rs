//! Catalog of every checklist item the intake wizard can record.
//!
//! Each item names the form path (`category.view.checkpoint.field`) and the
//! compensation id the flag stands for. Catalog order is the evaluation order
//! within a category.

use serde::Serialize;

use crate::enums::AssessmentCategory;
use crate::enums::AssessmentCategory::{OverheadSquat, Pull, Push, SingleLegSquat, StaticPosture};

/// One checkbox in the assessment forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub category: AssessmentCategory,
    pub view: &'static str,
    pub checkpoint: &'static str,
    pub field: &'static str,
    pub compensation_id: &'static str,
    pub label: &'static str,
}

const fn item(
    category: AssessmentCategory,
    view: &'static str,
    checkpoint: &'static str,
    field: &'static str,
    compensation_id: &'static str,
    label: &'static str,
) -> ChecklistItem {
    ChecklistItem {
        category,
        view,
        checkpoint,
        field,
        compensation_id,
        label,
    }
}

static CHECKLIST: &[ChecklistItem] = &[
    // Overhead squat, anterior view
    item(OverheadSquat, "frontView", "feet", "feetTurnOut", "feet-turn-out", "Feet turn out"),
    item(OverheadSquat, "frontView", "feet", "feetFlatten", "feet-flatten", "Feet flatten"),
    item(OverheadSquat, "frontView", "knees", "kneesMoveinward", "knee-valgus", "Knees move inward"),
    item(OverheadSquat, "frontView", "knees", "kneesMoveOutward", "knee-varus", "Knees move outward"),
    item(
        OverheadSquat,
        "frontView",
        "lphc",
        "asymmetricWeightShift",
        "asymmetric-weight-shift",
        "Asymmetric weight shift",
    ),
    // Overhead squat, lateral view
    item(
        OverheadSquat,
        "sideView",
        "lphc",
        "excessiveForwardLean",
        "excessive-forward-lean",
        "Excessive forward lean",
    ),
    item(OverheadSquat, "sideView", "lphc", "lowBackArches", "low-back-arches", "Low back arches"),
    item(OverheadSquat, "sideView", "lphc", "lowBackRounds", "low-back-rounds", "Low back rounds"),
    item(
        OverheadSquat,
        "sideView",
        "shoulders",
        "armsFallForward",
        "arms-fall-forward",
        "Arms fall forward",
    ),
    // Single-leg squat, each leg from the front
    item(SingleLegSquat, "leftLeg", "knee", "kneeValgus", "knee-valgus", "Knee moves inward"),
    item(SingleLegSquat, "leftLeg", "lphc", "hipHike", "hip-hike", "Hip hikes"),
    item(SingleLegSquat, "leftLeg", "lphc", "hipDrop", "hip-drop", "Hip drops"),
    item(SingleLegSquat, "leftLeg", "lphc", "trunkRotatesInward", "trunk-rotation", "Trunk rotates inward"),
    item(SingleLegSquat, "rightLeg", "knee", "kneeValgus", "knee-valgus", "Knee moves inward"),
    item(SingleLegSquat, "rightLeg", "lphc", "hipHike", "hip-hike", "Hip hikes"),
    item(SingleLegSquat, "rightLeg", "lphc", "hipDrop", "hip-drop", "Hip drops"),
    item(SingleLegSquat, "rightLeg", "lphc", "trunkRotatesInward", "trunk-rotation", "Trunk rotates inward"),
    // Pushing
    item(Push, "sideView", "lphc", "lowBackArches", "low-back-arches", "Low back arches"),
    item(Push, "sideView", "shoulders", "shouldersElevate", "shoulder-elevation", "Shoulders elevate"),
    item(Push, "sideView", "head", "headMigratesForward", "forward-head", "Head migrates forward"),
    // Pulling
    item(Pull, "sideView", "lphc", "lowBackArches", "low-back-arches", "Low back arches"),
    item(Pull, "sideView", "shoulders", "shouldersElevate", "shoulder-elevation", "Shoulders elevate"),
    item(Pull, "sideView", "head", "headMigratesForward", "forward-head", "Head protrudes forward"),
    // Static posture
    item(StaticPosture, "frontView", "feet", "feetPronated", "feet-flatten", "Feet flattened / pronated"),
    item(StaticPosture, "frontView", "knees", "kneesIn", "knee-valgus", "Knees adducted and internally rotated"),
    item(
        StaticPosture,
        "sideView",
        "lphc",
        "anteriorPelvicTilt",
        "anterior-pelvic-tilt",
        "Anterior pelvic tilt",
    ),
    item(
        StaticPosture,
        "sideView",
        "shoulders",
        "roundedShoulders",
        "rounded-shoulders",
        "Rounded shoulders",
    ),
    item(StaticPosture, "sideView", "head", "forwardHead", "forward-head", "Forward head"),
];

/// Every checklist item, in catalog order.
#[must_use]
pub fn items() -> &'static [ChecklistItem] {
    CHECKLIST
}

/// Checklist items belonging to one category, in catalog order.
pub fn for_category(category: AssessmentCategory) -> impl Iterator<Item = &'static ChecklistItem> {
    CHECKLIST.iter().filter(move |i| i.category == category)
}

/// Find the catalog position and item for a form path.
#[must_use]
pub fn resolve(
    category: AssessmentCategory,
    view: &str,
    checkpoint: &str,
    field: &str,
) -> Option<(usize, &'static ChecklistItem)> {
    CHECKLIST.iter().enumerate().find(|(_, i)| {
        i.category == category && i.view == view && i.checkpoint == checkpoint && i.field == field
    })
}

/// Distinct compensation ids referenced by the catalog, first-seen order.
#[must_use]
pub fn compensation_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = Vec::new();
    for item in CHECKLIST {
        if !ids.contains(&item.compensation_id) {
            ids.push(item.compensation_id);
        }
    }
    ids
}
