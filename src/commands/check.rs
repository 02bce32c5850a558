//! Implementation of the `patcov check` command.

use super::{log_run, override_path, print_json, report_format};
use crate::cli::CheckArgs;
use crate::config::{Config, ReportFormat};
use crate::constraints::{ConstraintSource, SchemaFile};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::verify::{CoverageReport, check_coverage};
use serde_json::json;
use std::path::Path;
use tracing::{info, info_span};

/// Load both inputs and reconcile them.
///
/// Loading errors (unreadable files, corpus integrity) are returned before
/// any reconciliation happens. A failing report is returned as a value.
pub fn run_check(config: &Config, corpus_path: &Path, schema_path: &Path) -> Result<CoverageReport> {
    let _span = info_span!("check").entered();

    let corpus = Corpus::load(corpus_path)?;
    let schema = SchemaFile::load(schema_path)?;
    let exclusions = config.rule_exclusions()?;

    let required = schema.required_patterns(&exclusions)?;
    let provided = corpus.all_patterns();
    info!(
        required = required.len(),
        provided = provided.len(),
        "reconciling patterns"
    );

    let report = check_coverage(&required, &provided);
    info!(
        missing = report.missing.len(),
        surplus = report.surplus.len(),
        "reconciliation finished"
    );

    log_run(
        config,
        Event::new(EventAction::Check, report.passed()).with_details(json!({
            "corpus": corpus_path.display().to_string(),
            "schema": schema_path.display().to_string(),
            "required": required.len(),
            "provided": provided.len(),
            "missing": report.missing.len(),
            "surplus": report.surplus.len(),
        })),
    );

    Ok(report)
}

/// Execute the `patcov check` command.
///
/// # Exit Codes
///
/// - 0: Every declared pattern is covered and nothing is surplus
/// - 1: User error (unreadable input, invalid config)
/// - 2: Coverage failure
/// - 4: Corpus integrity failure
pub fn cmd_check(config: &Config, args: CheckArgs) -> Result<()> {
    let corpus_path = override_path(&config.corpus, args.corpus);
    let schema_path = override_path(&config.schema, args.schema);

    let report = run_check(config, &corpus_path, &schema_path)?;

    if report_format(config, args.format) == ReportFormat::Json {
        print_json(&report)?;
    }

    report.into_result()?;
    eprintln!("Coverage check passed.");
    Ok(())
}
