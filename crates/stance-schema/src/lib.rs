//! # stance-schema
//!
//! JSON Schema generation, validation, and registry for Stance.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the JSON Schemas for the boundary types
//! - Validation of incoming form snapshots before any rule evaluation
//! - Schema export for external tooling (`stance schema`)
//!
//! Model types are defined in `stance-core` with `#[derive(JsonSchema)]`.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{CompiledSchema, FORM_SNAPSHOT, SchemaRegistry};
