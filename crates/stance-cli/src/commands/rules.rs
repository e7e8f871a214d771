use anyhow::Context;
use serde::Serialize;
use stance_rules::CompensationRule;

use crate::cli::{GlobalFlags, OutputFormat, RulesCommands};
use crate::context::AppContext;
use crate::output::{self, table::TableOptions};

#[derive(Debug, Serialize)]
struct RuleSummary<'a> {
    id: &'a str,
    label: &'a str,
    area: &'a str,
    issue: &'a str,
}

/// Handle `stance rules`.
pub fn handle(action: &RulesCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RulesCommands::List => {
            let summaries = ctx
                .rules
                .table
                .rules()
                .map(|rule| RuleSummary {
                    id: rule.id.as_str(),
                    label: &rule.label,
                    area: &rule.priority.area,
                    issue: &rule.priority.issue,
                })
                .collect::<Vec<_>>();
            output::output(&summaries, flags.format)
        }
        RulesCommands::Show { id } => {
            let rule = ctx.rules.table.lookup(id).with_context(|| {
                format!("unknown compensation '{id}'; see `stance rules list`")
            })?;
            if flags.format == OutputFormat::Table {
                println!("{}", render_rule(rule, output::table_options()));
                Ok(())
            } else {
                output::output(rule, flags.format)
            }
        }
    }
}

fn render_rule(rule: &CompensationRule, options: TableOptions) -> String {
    let title = if rule.label.is_empty() {
        rule.id.to_string()
    } else {
        format!("{} ({})", rule.label, rule.id)
    };
    let muscles = output::findings_rows(&rule.overactive, &rule.underactive);

    format!(
        "{title}\n\nArea:   {}\nIssue:  {}\nAction: {}\n\n{}",
        rule.priority.area,
        rule.priority.issue,
        rule.priority.action,
        output::table::render_table(&["role", "muscle", "rationale"], &muscles, options)
    )
}
