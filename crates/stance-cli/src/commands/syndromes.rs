use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SyndromeView<'a> {
    id: &'static str,
    syndrome: &'static str,
    indicators: Vec<&'a str>,
    minimum_matches: usize,
}

/// Handle `stance syndromes`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&views(ctx), flags.format)
}

fn views(ctx: &AppContext) -> Vec<SyndromeView<'_>> {
    ctx.rules
        .syndromes
        .rules()
        .map(|rule| SyndromeView {
            id: rule.syndrome.id(),
            syndrome: rule.syndrome.label(),
            indicators: rule.indicators.iter().map(|id| id.as_str()).collect(),
            minimum_matches: rule.minimum_matches,
        })
        .collect()
}
