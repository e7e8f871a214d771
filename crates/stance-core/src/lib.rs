//! # stance-core
//!
//! Observation model and result types for Stance.
//!
//! This crate provides the foundational types shared across all Stance crates:
//! - Assessment categories, muscle roles and syndrome labels
//! - Compensation observations and the snapshot that groups them
//! - The checklist catalog mapping form fields to compensation ids
//! - The wizard's form wire format and its conversion to a snapshot
//! - Analysis result types
//! - Cross-cutting error types

pub mod checklist;
pub mod enums;
pub mod errors;
pub mod findings;
pub mod form;
pub mod observation;

pub use enums::{AssessmentCategory, MuscleRole, Syndrome};
pub use errors::CoreError;
pub use findings::{AnalysisResult, Diagnostic, DiagnosticKind, MuscleFinding, PriorityArea};
pub use form::{FormFlag, FormSnapshot};
pub use observation::{CompensationId, CompensationObservation, ObservationSnapshot};
