pub mod analyze;
pub mod checklist;
pub mod dispatch;
pub mod rules;
pub mod schema;
pub mod syndromes;
