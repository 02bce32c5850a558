//! CLI argument parsing for patcov.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Patcov: checks that declared regex constraints and curated examples agree.
///
/// Every pattern enforced by the schema must have a corpus entry with
/// positive and negative examples, and every corpus entry must still be
/// enforced somewhere.
#[derive(Parser, Debug)]
#[command(name = "patcov")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (default: ./patcov.yaml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty, global = true)]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for patcov.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconcile declared patterns with corpus patterns.
    ///
    /// Fails when a declared pattern has no examples, or when the corpus
    /// holds examples for a pattern nothing declares.
    Check(CheckArgs),

    /// Check every corpus example against its pattern.
    ///
    /// Positives must fully match; negatives must not.
    VerifyExamples(CorpusArgs),

    /// Show the examples stored for one exact pattern.
    Lookup(LookupArgs),

    /// List every pattern in the corpus, sorted.
    Patterns(CorpusArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Corpus YAML file (overrides config).
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Schema YAML file (overrides config).
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Report format (overrides config).
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments for commands that only read the corpus.
#[derive(Parser, Debug)]
pub struct CorpusArgs {
    /// Corpus YAML file (overrides config).
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Report format (overrides config).
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments for the `lookup` command.
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Exact pattern text.
    pub pattern: String,

    #[command(flatten)]
    pub corpus: CorpusArgs,
}

/// Report format selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

/// Log format selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_with_overrides() {
        let cli = Cli::try_parse_from([
            "patcov", "-vv", "check", "--corpus", "c.yaml", "--schema", "s.yaml", "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.corpus, Some(PathBuf::from("c.yaml")));
        assert_eq!(args.schema, Some(PathBuf::from("s.yaml")));
        assert_eq!(args.format, Some(FormatArg::Json));
    }

    #[test]
    fn parse_lookup_pattern_with_leading_caret() {
        let cli = Cli::try_parse_from(["patcov", "lookup", "^(0|[1-9][0-9]*)$"]).unwrap();
        let Command::Lookup(args) = cli.command else {
            panic!("expected lookup command");
        };
        assert_eq!(args.pattern, "^(0|[1-9][0-9]*)$");
        assert!(args.corpus.corpus.is_none());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["patcov", "verify-examples", "--config", "x/patcov.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x/patcov.yaml")));
        assert!(matches!(cli.command, Command::VerifyExamples(_)));
    }
}
