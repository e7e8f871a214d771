//! Central schema registry for the Stance boundary types.
//!
//! The `SchemaRegistry` builds JSON Schemas from stance-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;
use std::fmt;

use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the schema the wizard's form state must satisfy.
pub const FORM_SNAPSHOT: &str = "form_snapshot";

/// Store of every JSON Schema exposed by Stance.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).expect("schemars output is valid JSON"),
        );
    };
}

impl SchemaRegistry {
    /// Build a registry containing the input, model, and result schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema, which `schemars` output does not do.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Input ---
        register!(schemas, FORM_SNAPSHOT, stance_core::form::FormSnapshot);
        register!(
            schemas,
            "observation_snapshot",
            stance_core::observation::ObservationSnapshot
        );
        register!(
            schemas,
            "compensation_observation",
            stance_core::observation::CompensationObservation
        );

        // --- Output ---
        register!(
            schemas,
            "analysis_result",
            stance_core::findings::AnalysisResult
        );
        register!(
            schemas,
            "muscle_finding",
            stance_core::findings::MuscleFinding
        );
        register!(schemas, "priority_area", stance_core::findings::PriorityArea);
        register!(schemas, "diagnostic", stance_core::findings::Diagnostic);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        self.compile(name)?.validate(instance)
    }

    /// Compile a named schema once for repeated validation.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::Generation` if the schema does not compile.
    pub fn compile(&self, name: &str) -> Result<CompiledSchema, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        Ok(CompiledSchema {
            name: name.to_string(),
            validator,
        })
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

/// A compiled validator for one registered schema.
pub struct CompiledSchema {
    name: String,
    validator: jsonschema::Validator,
}

impl CompiledSchema {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate a JSON value, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
