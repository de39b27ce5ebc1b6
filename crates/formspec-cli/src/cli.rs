//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Formspec CLI - form schema validation and submission checking
///
/// Validate JSON form schemas, compile their validation rules, and check
/// captured submissions against them from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "formspec",
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
    #[arg(short, long, global = true, env = "FORMSPEC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (falls back to the config file, then human)
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
    /// Validate a form schema document
    Validate(ValidateArgs),

    /// Check a submission against a form schema's compiled rules
    Check(CheckArgs),

    /// Write a submissions file using the export naming convention
    Export(ExportArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the form schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Show the parsed schema after a successful validation
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the form schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Path to the submission file (JSON object of field values)
    #[arg(value_name = "SUBMISSION")]
    pub submission: PathBuf,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Path to a JSON array of captured submissions
    #[arg(value_name = "SUBMISSIONS")]
    pub submissions: PathBuf,

    /// Directory to write the export into (current directory if not specified)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
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
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
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
    use clap::Parser;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["formspec", "-vv", "validate", "schema.json"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["formspec", "--quiet", "validate", "schema.json"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_output_flag_is_optional() {
        let cli = Cli::parse_from(["formspec", "validate", "schema.json"]);
        assert_eq!(cli.output, None);

        let cli = Cli::parse_from(["formspec", "-o", "json", "validate", "schema.json"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::parse_from(["formspec", "check", "schema.json", "values.json"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.schema, PathBuf::from("schema.json"));
                assert_eq!(args.submission, PathBuf::from("values.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_export_out_dir() {
        let cli = Cli::parse_from([
            "formspec",
            "export",
            "subs.json",
            "--out-dir",
            "/tmp/exports",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.out_dir, Some(PathBuf::from("/tmp/exports")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
