//! Implementation of the `patcov verify-examples` command.

use super::{log_run, override_path, print_json, report_format};
use crate::cli::CorpusArgs;
use crate::config::{Config, ReportFormat};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::verify::{ExampleReport, check_examples};
use serde_json::json;
use std::path::Path;
use tracing::{info, info_span};

/// Load the corpus and check every example against its pattern.
pub fn run_verify_examples(config: &Config, corpus_path: &Path) -> Result<ExampleReport> {
    let _span = info_span!("verify_examples").entered();

    let corpus = Corpus::load(corpus_path)?;
    let report = check_examples(&corpus)?;
    info!(
        patterns = corpus.len(),
        checked = report.checked,
        failures = report.failures.len(),
        "examples verified"
    );

    log_run(
        config,
        Event::new(EventAction::VerifyExamples, report.passed()).with_details(json!({
            "corpus": corpus_path.display().to_string(),
            "patterns": corpus.len(),
            "checked": report.checked,
            "failures": report.failures.len(),
        })),
    );

    Ok(report)
}

/// Execute the `patcov verify-examples` command.
///
/// # Exit Codes
///
/// - 0: Every example agrees with its pattern
/// - 1: User error (unreadable input)
/// - 3: An example disagrees, or a pattern does not compile
/// - 4: Corpus integrity failure
pub fn cmd_verify_examples(config: &Config, args: CorpusArgs) -> Result<()> {
    let corpus_path = override_path(&config.corpus, args.corpus);
    let report = run_verify_examples(config, &corpus_path)?;

    if report_format(config, args.format) == ReportFormat::Json {
        print_json(&report)?;
    }

    let report = report.into_result()?;
    eprintln!("All {} examples agree with their patterns.", report.checked);
    Ok(())
}
