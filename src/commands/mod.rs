//! Command implementations for patcov.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the config resolution shared by all of them.

mod check;
mod corpus;
mod examples;


use crate::cli::{Command, FormatArg};
use crate::config::{Config, DEFAULT_CONFIG_FILE, ReportFormat};
use crate::error::Result;
use crate::events::{Event, append_event};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use check::{cmd_check, run_check};
pub use corpus::{cmd_lookup, cmd_patterns, run_lookup, run_patterns};
pub use examples::{cmd_verify_examples, run_verify_examples};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_path)?;

    match command {
        Command::Check(args) => cmd_check(&config, args),
        Command::VerifyExamples(args) => cmd_verify_examples(&config, args),
        Command::Lookup(args) => cmd_lookup(&config, args),
        Command::Patterns(args) => cmd_patterns(&config, args),
    }
}

/// Load the config named on the command line, else `./patcov.yaml`, else defaults.
///
/// Relative paths inside a config file resolve against that file's directory.
pub fn resolve_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        }
    };

    let Some(path) = path else {
        debug!("no config file, using defaults");
        return Ok(Config::default());
    };

    let base = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    debug!(path = %path.display(), "loading config");
    Ok(Config::load(&path)?.resolve_paths(&base))
}

/// Apply a command-line path override on top of the config value.
fn override_path(config_value: &str, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(config_value))
}

fn report_format(config: &Config, flag: Option<FormatArg>) -> ReportFormat {
    match flag {
        Some(FormatArg::Text) => ReportFormat::Text,
        Some(FormatArg::Json) => ReportFormat::Json,
        None => config.report_format,
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        crate::error::CoverageError::UserError(format!("failed to serialize report: {}", e))
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

/// Append a run record when the config enables the event log.
///
/// A failure to write the log is a warning, never a check failure.
fn log_run(config: &Config, event: Event) {
    let Some(path) = config.events_log_path() else {
        return;
    };
    if let Err(e) = append_event(&path, &event) {
        warn!("failed to log {} event: {}", event.action, e);
    }
}
