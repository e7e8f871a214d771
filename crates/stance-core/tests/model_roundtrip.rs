//! Serde roundtrip and JsonSchema validation tests for the model types.

use schemars::schema_for;
use stance_core::enums::*;
use stance_core::findings::*;
use stance_core::form::{DetailedFlag, FormFlag, FormSnapshot};
use stance_core::observation::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    observation_roundtrip,
    CompensationObservation,
    CompensationObservation::new(
        AssessmentCategory::OverheadSquat,
        "sideView",
        "lphc",
        "low-back-arches",
        true,
    )
    .with_note("only under load")
);

roundtrip_and_validate!(
    snapshot_roundtrip,
    ObservationSnapshot,
    ObservationSnapshot::new()
        .flag(AssessmentCategory::SingleLegSquat, "leftLeg", "knee", "knee-valgus", true)
        .unwrap()
        .flag(AssessmentCategory::StaticPosture, "sideView", "head", "forward-head", false)
        .unwrap()
);

roundtrip_and_validate!(
    form_roundtrip,
    FormSnapshot,
    {
        let mut form = FormSnapshot::default();
        form.set(
            AssessmentCategory::OverheadSquat,
            "frontView",
            "knees",
            "kneesMoveinward",
            FormFlag::Checked(true),
        );
        form.set(
            AssessmentCategory::Pull,
            "sideView",
            "shoulders",
            "shouldersElevate",
            FormFlag::Detailed(DetailedFlag {
                present: true,
                note: Some("left side only".into()),
            }),
        );
        form
    }
);

roundtrip_and_validate!(
    result_roundtrip,
    AnalysisResult,
    AnalysisResult {
        overactive: vec![MuscleFinding::new(
            "Adductor Complex",
            "Pulls the femur into adduction",
            MuscleRole::Overactive,
        )],
        underactive: vec![MuscleFinding::new(
            "Gluteus Medius",
            "Fails to control femoral adduction",
            MuscleRole::Underactive,
        )],
        priority: vec![PriorityArea {
            area: "Hip Stability & Glute Activation".into(),
            issue: "Knees cave inward".into(),
            action: "Activate glutes, release adductors".into(),
        }],
        syndromes: vec![Syndrome::PronationDistortion],
        total_compensations: 1,
        diagnostics: vec![Diagnostic::unrecognized(
            AssessmentCategory::Push,
            &CompensationId::from("elbow-flare"),
        )],
    }
);

#[test]
fn form_schema_rejects_unknown_category() {
    let schema = serde_json::to_value(schema_for!(FormSnapshot)).unwrap();
    let errors = validate_against_schema(&schema, &serde_json::json!({ "deadlift": {} }));
    assert!(!errors.is_empty());
}

#[test]
fn form_schema_rejects_string_flag() {
    let schema = serde_json::to_value(schema_for!(FormSnapshot)).unwrap();
    let errors = validate_against_schema(
        &schema,
        &serde_json::json!({ "push": { "sideView": { "head": { "headMigratesForward": "true" } } } }),
    );
    assert!(!errors.is_empty());
}
