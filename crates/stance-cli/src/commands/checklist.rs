use anyhow::Context;
use serde::Serialize;
use stance_core::{AssessmentCategory, checklist};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChecklistArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChecklistRow {
    category: AssessmentCategory,
    view: &'static str,
    checkpoint: &'static str,
    field: &'static str,
    compensation_id: &'static str,
    label: &'static str,
    /// Whether the active rule table knows this compensation.
    has_rule: bool,
}

/// Handle `stance checklist`.
pub fn handle(args: &ChecklistArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let category = args
        .category
        .as_deref()
        .map(str::parse::<AssessmentCategory>)
        .transpose()
        .context("invalid --category")?;

    output(&rows(category, ctx), flags.format)
}

fn rows(category: Option<AssessmentCategory>, ctx: &AppContext) -> Vec<ChecklistRow> {
    checklist::items()
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .map(|item| ChecklistRow {
            category: item.category,
            view: item.view,
            checkpoint: item.checkpoint,
            field: item.field,
            compensation_id: item.compensation_id,
            label: item.label,
            has_rule: ctx.rules.table.contains(item.compensation_id),
        })
        .collect()
}
