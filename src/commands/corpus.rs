//! Read-only corpus commands: `lookup` and `patterns`.

use super::{override_path, print_json, report_format};
use crate::cli::{CorpusArgs, LookupArgs};
use crate::config::{Config, ReportFormat};
use crate::corpus::{Corpus, ExampleSet, Polarity};
use crate::error::{CoverageError, Result};
use crate::pattern::Pattern;
use std::collections::BTreeSet;
use std::path::Path;

/// Load the corpus and return the example set stored under `pattern`.
///
/// Lookup is exact. An absent pattern is a user error.
pub fn run_lookup(corpus_path: &Path, pattern: &str) -> Result<ExampleSet> {
    let corpus = Corpus::load(corpus_path)?;

    corpus.lookup(pattern).cloned().ok_or_else(|| {
        CoverageError::UserError(format!(
            "pattern {:?} not found in corpus '{}'.\n\n\
             Lookup is exact; use `patcov patterns` to list stored patterns.",
            pattern,
            corpus_path.display()
        ))
    })
}

/// Load the corpus and return its patterns in lexicographic order.
pub fn run_patterns(corpus_path: &Path) -> Result<BTreeSet<Pattern>> {
    Ok(Corpus::load(corpus_path)?.all_patterns())
}

/// Execute the `patcov lookup` command.
///
/// Exits with a user error when the exact pattern is not in the corpus.
pub fn cmd_lookup(config: &Config, args: LookupArgs) -> Result<()> {
    let corpus_path = override_path(&config.corpus, args.corpus.corpus);
    let examples = run_lookup(&corpus_path, &args.pattern)?;

    match report_format(config, args.corpus.format) {
        ReportFormat::Json => print_json(&examples)?,
        ReportFormat::Text => print!("{}", render_example_set(&args.pattern, &examples)),
    }
    Ok(())
}

/// Execute the `patcov patterns` command.
pub fn cmd_patterns(config: &Config, args: CorpusArgs) -> Result<()> {
    let corpus_path = override_path(&config.corpus, args.corpus);
    let patterns = run_patterns(&corpus_path)?;

    match report_format(config, args.format) {
        ReportFormat::Json => print_json(&patterns)?,
        ReportFormat::Text => {
            for pattern in &patterns {
                println!("{}", pattern);
            }
        }
    }
    Ok(())
}

/// Render an example set as indented text, positives first.
pub(crate) fn render_example_set(pattern: &str, examples: &ExampleSet) -> String {
    let mut out = format!("Pattern: {:?}\n", pattern);

    for polarity in [Polarity::Positive, Polarity::Negative] {
        let list = examples.examples(polarity);
        out.push_str(&format!("  {} ({}):\n", polarity, list.len()));
        for example in list {
            out.push_str(&format!("    {}: {:?}\n", example.label, example.text));
        }
    }
    out
}
