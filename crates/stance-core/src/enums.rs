//! Assessment categories, muscle roles, and postural syndromes.
//!
//! `AssessmentCategory` and `MuscleRole` serialize as `kebab-case` /
//! `snake_case` ids. `Syndrome` serializes as its human-readable label so
//! results can be rendered directly; rule data may refer to it by kebab id.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// AssessmentCategory
// ---------------------------------------------------------------------------

/// A movement or posture assessment performed by the intake wizard.
///
/// Declaration order is the canonical evaluation order; `Ord` follows it.
///
/// ```text
/// overhead-squat → single-leg-squat → push → pull → static-posture
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentCategory {
    OverheadSquat,
    SingleLegSquat,
    Push,
    Pull,
    StaticPosture,
}

impl AssessmentCategory {
    /// Every category, in canonical evaluation order.
    pub const ALL: [Self; 5] = [
        Self::OverheadSquat,
        Self::SingleLegSquat,
        Self::Push,
        Self::Pull,
        Self::StaticPosture,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OverheadSquat => "overhead-squat",
            Self::SingleLegSquat => "single-leg-squat",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::StaticPosture => "static-posture",
        }
    }

    /// Key used for this category in the wizard's form state.
    #[must_use]
    pub const fn form_key(self) -> &'static str {
        match self {
            Self::OverheadSquat => "overheadSquat",
            Self::SingleLegSquat => "singleLegSquat",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::StaticPosture => "staticPosture",
        }
    }
}

impl fmt::Display for AssessmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentCategory {
    type Err = CoreError;

    /// Accepts either the kebab id (`overhead-squat`) or the form key (`overheadSquat`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s || category.form_key() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// MuscleRole
// ---------------------------------------------------------------------------

/// Predicted state of a muscle implicated by a compensation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MuscleRole {
    /// Chronically shortened or dominant; inhibit and lengthen.
    Overactive,
    /// Inhibited or weak; activate and strengthen.
    Underactive,
}

impl MuscleRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overactive => "overactive",
            Self::Underactive => "underactive",
        }
    }
}

impl fmt::Display for MuscleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Syndrome
// ---------------------------------------------------------------------------

/// Named composite postural pattern inferred from co-occurring compensations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Syndrome {
    #[serde(rename = "Upper Crossed Syndrome", alias = "upper-crossed")]
    UpperCrossed,
    #[serde(rename = "Lower Crossed Syndrome", alias = "lower-crossed")]
    LowerCrossed,
    #[serde(rename = "Pronation Distortion Syndrome", alias = "pronation-distortion")]
    PronationDistortion,
}

impl Syndrome {
    /// Short id used in rule documents.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::UpperCrossed => "upper-crossed",
            Self::LowerCrossed => "lower-crossed",
            Self::PronationDistortion => "pronation-distortion",
        }
    }

    /// Display label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpperCrossed => "Upper Crossed Syndrome",
            Self::LowerCrossed => "Lower Crossed Syndrome",
            Self::PronationDistortion => "Pronation Distortion Syndrome",
        }
    }
}

impl fmt::Display for Syndrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
