//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use schemapath_core::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Schemapath CLI - Typed, schema-validated paths into data models
///
/// Check candidate paths against a JSON Schema document, render segment
/// lists as path strings, and inspect the active configuration.
#[derive(Parser, Debug)]
#[command(
    name = "schemapath",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SCHEMAPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results [default: from config, else human]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check paths against a schema document
    Check(CheckArgs),

    /// Render a JSON array of segments as a path string
    Format(FormatArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Schema document (JSON or YAML), or a name inside `paths.schemas_dir`
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Paths to check, such as `lines[0].sku`
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// Read each path as a JSON array of segments, such as `["lines", 0]`
    #[arg(long)]
    pub json: bool,

    /// Which diagnostic to report when every `anyOf` alternative fails
    #[arg(short, long, value_enum)]
    pub policy: Option<Policy>,
}

/// Arguments for the format command
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// JSON array of strings and integers
    #[arg(value_name = "SEGMENTS_JSON")]
    pub segments: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration values
    Show(ConfigShowArgs),
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Diagnostic selection when all alternatives fail
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Report the last alternative's diagnostic
    Last,
    /// Report the diagnostic that got furthest into the path
    Deepest,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self, configured: bool) -> bool {
        !self.no_color && configured && std::io::stdout().is_terminal()
    }
}

impl From<Policy> for FailurePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Last => FailurePolicy::Last,
            Policy::Deepest => FailurePolicy::Deepest,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::parse_from([
            "schemapath",
            "check",
            "order.json",
            "lines[0].sku",
            "id",
            "--policy",
            "deepest",
        ]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.schema, PathBuf::from("order.json"));
                assert_eq!(args.paths, vec!["lines[0].sku", "id"]);
                assert!(!args.json);
                assert_eq!(args.policy, Some(Policy::Deepest));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_check_requires_a_path() {
        assert!(Cli::try_parse_from(["schemapath", "check", "order.json"]).is_err());
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["schemapath", "-vv", "format", "[]"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_output_format_names() {
        let cli = Cli::parse_from(["schemapath", "--output", "json-pretty", "format", "[]"]);
        assert_eq!(cli.output, Some(OutputFormat::JsonPretty));
        assert_eq!(
            serde_json::to_value(OutputFormat::JsonPretty).unwrap(),
            serde_json::json!("json-pretty")
        );
    }

    #[test]
    fn test_no_color_wins() {
        let cli = Cli::parse_from(["schemapath", "--no-color", "format", "[]"]);
        assert!(!cli.use_color(true));
    }

    #[test]
    fn test_policy_conversion() {
        assert_eq!(FailurePolicy::from(Policy::Last), FailurePolicy::Last);
        assert_eq!(FailurePolicy::from(Policy::Deepest), FailurePolicy::Deepest);
    }
}
