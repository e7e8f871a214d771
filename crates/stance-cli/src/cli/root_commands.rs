use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze a form snapshot and report muscle imbalances.
    Analyze(AnalyzeArgs),
    /// Inspect the compensation rule table.
    Rules {
        #[command(subcommand)]
        action: RulesCommands,
    },
    /// List syndrome rules with their indicators and thresholds.
    Syndromes,
    /// List the assessment checklist.
    Checklist(ChecklistArgs),
    /// Dump a registered JSON schema, or list the registered names.
    Schema(SchemaArgs),
}

/// Arguments for `stance analyze`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Form snapshot JSON file, or `-` for stdin.
    pub input: PathBuf,
    /// Fail when the snapshot contains unrecognized compensations.
    #[arg(long)]
    pub strict: bool,
}

/// Rule table commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RulesCommands {
    /// List compensation ids with their priority area.
    List,
    /// Show one compensation rule in full.
    Show { id: String },
}

/// Arguments for `stance checklist`.
#[derive(Clone, Debug, Args)]
pub struct ChecklistArgs {
    /// Restrict to one assessment (e.g. `overhead-squat` or `overheadSquat`).
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `stance schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub name: Option<String>,
}
