use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stance_config::StanceConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, RulesCommands};

/// Top-level CLI parser for the `stance` binary.
#[derive(Debug, Parser)]
#[command(
    name = "stance",
    version,
    about = "Stance - movement assessment to muscle imbalance analysis"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `output.format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above the project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolve global flags, falling back to the configured output format.
    pub fn global_flags(&self, config: &StanceConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.format, true).map_err(|error| {
                anyhow::anyhow!("invalid output.format '{}': {error}", config.output.format)
            })?,
        };

        Ok(GlobalFlags {
            format,
            quiet: self.quiet,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use stance_config::StanceConfig;

    use super::{Cli, Commands, OutputFormat, RulesCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["stance", "--format", "table", "--verbose", "syndromes"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Syndromes));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stance", "rules", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Rules {
                action: RulesCommands::List
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["stance", "--format", "xml", "syndromes"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn analyze_takes_path_and_strict() {
        let cli = Cli::try_parse_from(["stance", "analyze", "-", "--strict"])
            .expect("cli should parse");
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.input.to_str(), Some("-"));
                assert!(args.strict);
            }
            other => panic!("expected analyze, got {other:?}"),
        }
    }

    #[test]
    fn analyze_requires_input() {
        assert!(Cli::try_parse_from(["stance", "analyze"]).is_err());
    }

    #[test]
    fn rules_show_takes_id() {
        let cli = Cli::try_parse_from(["stance", "rules", "show", "knee-valgus"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Rules { action: RulesCommands::Show { ref id } } if id == "knee-valgus"
        ));
    }

    #[test]
    fn format_falls_back_to_config() {
        let cli = Cli::try_parse_from(["stance", "syndromes"]).expect("cli should parse");
        let mut config = StanceConfig::default();
        config.output.format = "table".to_string();

        let flags = cli.global_flags(&config).expect("flags resolve");
        assert_eq!(flags.format, OutputFormat::Table);
    }

    #[test]
    fn explicit_format_beats_config() {
        let cli = Cli::try_parse_from(["stance", "-f", "raw", "syndromes"])
            .expect("cli should parse");
        let mut config = StanceConfig::default();
        config.output.format = "table".to_string();

        let flags = cli.global_flags(&config).expect("flags resolve");
        assert_eq!(flags.format, OutputFormat::Raw);
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["stance", "checklist", "--config", "/tmp/stance.toml"])
            .expect("cli should parse");
        assert_eq!(
            cli.config.as_deref().and_then(|p| p.to_str()),
            Some("/tmp/stance.toml")
        );
    }
}
