//! Input validation for form snapshots arriving as JSON.
//!
//! Shape violations are rejected here, before any rule is evaluated.

use std::sync::LazyLock;

use stance_core::{FormSnapshot, ObservationSnapshot};
use stance_schema::{CompiledSchema, FORM_SNAPSHOT, SchemaRegistry};

use crate::error::EngineError;

static FORM_VALIDATOR: LazyLock<CompiledSchema> = LazyLock::new(|| {
    SchemaRegistry::new()
        .compile(FORM_SNAPSHOT)
        .unwrap_or_else(|e| panic!("form_snapshot schema: {e}"))
});

/// Validate and convert a form snapshot JSON value.
///
/// # Errors
///
/// Returns `EngineError::InvalidSnapshot` if the value does not match the form
/// schema, or `EngineError::Observation` if two fields contradict each other.
///
/// # Panics
///
/// Panics on first use if the generated form schema does not compile.
pub fn snapshot_from_value(value: &serde_json::Value) -> Result<ObservationSnapshot, EngineError> {
    FORM_VALIDATOR.validate(value)?;

    let form: FormSnapshot =
        serde_json::from_value(value.clone()).map_err(|e| EngineError::InvalidSnapshot {
            errors: vec![e.to_string()],
        })?;
    Ok(form.to_snapshot()?)
}

/// Parse JSON text, then as [`snapshot_from_value`].
///
/// # Errors
///
/// Returns `EngineError::Json` if the text is not JSON, otherwise as
/// [`snapshot_from_value`].
pub fn snapshot_from_str(text: &str) -> Result<ObservationSnapshot, EngineError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    snapshot_from_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stance_core::AssessmentCategory;

    #[test]
    fn accepts_wizard_form() {
        let snapshot = snapshot_from_str(
            r#"{ "singleLegSquat": { "leftLeg": { "knee": { "kneeValgus": true } } } }"#,
        )
        .unwrap();
        assert_eq!(
            snapshot.observations(AssessmentCategory::SingleLegSquat)[0]
                .compensation_id
                .as_str(),
            "knee-valgus"
        );
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            snapshot_from_str("{ overheadSquat: "),
            Err(EngineError::Json(_))
        ));
    }

    #[test]
    fn rejects_wrong_shape() {
        let value = serde_json::json!({ "overheadSquat": { "frontView": true } });
        match snapshot_from_value(&value) {
            Err(EngineError::InvalidSnapshot { errors }) => assert!(!errors.is_empty()),
            other => panic!("expected InvalidSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn shared_validator_serves_successive_calls() {
        let bad = serde_json::json!({ "deadlift": {} });
        let good = serde_json::json!({ "push": { "sideView": { "lphc": { "lowBackArches": true } } } });
        for _ in 0..3 {
            assert!(snapshot_from_value(&bad).is_err());
            assert_eq!(snapshot_from_value(&good).unwrap().present_count(), 1);
        }
        assert_eq!(FORM_VALIDATOR.name(), FORM_SNAPSHOT);
    }

    #[test]
    fn rejects_top_level_array() {
        let value = serde_json::json!([{ "overheadSquat": {} }]);
        assert!(matches!(
            snapshot_from_value(&value),
            Err(EngineError::InvalidSnapshot { .. })
        ));
    }
}
