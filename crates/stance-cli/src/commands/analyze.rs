use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};
use stance_core::AnalysisResult;
use stance_engine::Analyzer;

use crate::cli::root_commands::AnalyzeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{self, table::TableOptions};

/// Handle `stance analyze`.
pub fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;
    let result = Analyzer::from_rules(&ctx.rules)
        .analyze_json(&text)
        .with_context(|| format!("failed to analyze {}", args.input.display()))?;

    if flags.format == OutputFormat::Table {
        println!("{}", render_result_table(&result, output::table_options()));
    } else {
        output::output(&result, flags.format)?;
    }

    let strict = args.strict || ctx.config.analysis.strict;
    if strict && result.has_diagnostics() {
        let ids = result
            .diagnostics
            .iter()
            .map(|d| format!("{}/{}", d.category, d.compensation_id))
            .collect::<Vec<_>>();
        bail!("unrecognized compensations in strict mode: {}", ids.join(", "));
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read form snapshot from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form snapshot {}", path.display()))
}

/// Human-readable report: muscles, priority areas, syndromes, diagnostics.
pub fn render_result_table(result: &AnalysisResult, options: TableOptions) -> String {
    let mut sections = Vec::new();

    let muscles = output::findings_rows(&result.overactive, &result.underactive);
    sections.push(if muscles.is_empty() {
        String::from("No compensations observed.")
    } else {
        output::table::render_table(&["role", "muscle", "rationale"], &muscles, options)
    });

    if !result.priority.is_empty() {
        let rows = result
            .priority
            .iter()
            .enumerate()
            .map(|(index, p)| {
                vec![
                    (index + 1).to_string(),
                    p.area.clone(),
                    p.issue.clone(),
                    p.action.clone(),
                ]
            })
            .collect::<Vec<_>>();
        sections.push(output::table::render_table(
            &["#", "area", "issue", "action"],
            &rows,
            options,
        ));
    }

    let syndromes = if result.syndromes.is_empty() {
        String::from("none")
    } else {
        result
            .syndromes
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    sections.push(format!(
        "Syndromes: {syndromes}\nTotal compensations: {}",
        result.total_compensations
    ));

    if result.has_diagnostics() {
        sections.push(
            result
                .diagnostics
                .iter()
                .map(|d| format!("warning: {}", d.message))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn empty_result_reads_clean() {
        let out = render_result_table(&AnalysisResult::default(), PLAIN);
        assert_eq!(
            out,
            "No compensations observed.\n\nSyndromes: none\nTotal compensations: 0"
        );
    }

    #[test]
    fn report_lists_muscles_priority_and_syndromes() {
        let result = stance_engine::analyze_json(
            r#"{ "staticPosture": { "sideView": {
                "head": { "forwardHead": true },
                "shoulders": { "roundedShoulders": true }
            } } }"#,
        )
        .expect("valid snapshot");

        let out = render_result_table(&result, PLAIN);
        assert!(out.starts_with("role"));
        assert!(out.contains("overactive"));
        assert!(out.contains("underactive"));
        assert!(out.contains("Syndromes: Upper Crossed Syndrome"));
        assert!(out.contains("Total compensations: 2"));
        assert!(!out.contains("warning:"));
    }

    #[test]
    fn diagnostics_are_listed_as_warnings() {
        let result = stance_engine::analyze_json(
            r#"{ "push": { "sideView": { "elbows": { "elbowsFlare": true } } } }"#,
        )
        .expect("valid snapshot");

        let out = render_result_table(&result, PLAIN);
        assert!(out.contains("warning:"));
        assert!(out.contains("elbowsFlare"));
    }

    #[test]
    fn reads_snapshot_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("form.json");
        std::fs::write(&path, "{}").expect("write");
        assert_eq!(read_input(&path).expect("readable"), "{}");
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = read_input(Path::new("/nonexistent/form.json")).expect_err("should fail");
        assert!(format!("{error:#}").contains("/nonexistent/form.json"));
    }
}
