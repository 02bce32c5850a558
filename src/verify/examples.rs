//! Checking corpus examples against their patterns with the regex engine.

use crate::corpus::{Corpus, Polarity};
use crate::error::{CoverageError, Result};
use crate::pattern::Pattern;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use tracing::trace;

/// An example that disagrees with its pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleFailure {
    pub pattern: Pattern,
    pub polarity: Polarity,
    pub label: String,
    pub text: String,
}

impl fmt::Display for ExampleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.polarity {
            Polarity::Positive => write!(
                f,
                "positive example '{}' {:?} does not match {:?}",
                self.label,
                self.text,
                self.pattern.as_str()
            ),
            Polarity::Negative => write!(
                f,
                "negative example '{}' {:?} unexpectedly matches {:?}",
                self.label,
                self.text,
                self.pattern.as_str()
            ),
        }
    }
}

/// Outcome of checking every example in a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExampleReport {
    /// Number of examples checked.
    pub checked: usize,
    /// Failing examples in corpus order, positives before negatives per pattern.
    pub failures: Vec<ExampleFailure>,
}

impl ExampleReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn a failing report into [`CoverageError::ExampleMismatch`].
    pub fn into_result(self) -> Result<Self> {
        if self.passed() {
            Ok(self)
        } else {
            Err(CoverageError::ExampleMismatch(self))
        }
    }
}

impl fmt::Display for ExampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} of {} examples disagree with their patterns:",
            self.failures.len(),
            self.checked
        )?;
        for failure in &self.failures {
            writeln!(f, "  {}", failure)?;
        }
        Ok(())
    }
}

/// Compile a pattern so that it only matches the whole input.
///
/// # Returns
///
/// * `Ok(Regex)` - The anchored regex
/// * `Err(CoverageError::InvalidPattern)` - The regex engine rejected the pattern
pub fn compile_full_match(pattern: &Pattern) -> Result<Regex> {
    compile(pattern, &format!(r"\A(?:{})\z", pattern.as_str()))
}

/// Compile a pattern as written, matching anywhere in the input.
pub fn compile_search(pattern: &Pattern) -> Result<Regex> {
    compile(pattern, pattern.as_str())
}

fn compile(pattern: &Pattern, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| CoverageError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Check every example in the corpus against its pattern.
///
/// Positives must match the whole string. Negatives must not match any part
/// of it.
pub fn check_examples(corpus: &Corpus) -> Result<ExampleReport> {
    let mut report = ExampleReport::default();

    for (pattern, examples) in corpus.iter() {
        let full_match = compile_full_match(pattern)?;
        let search = compile_search(pattern)?;

        for (polarity, example) in examples.iter() {
            report.checked += 1;
            let matched = match polarity {
                Polarity::Positive => full_match.is_match(&example.text),
                Polarity::Negative => search.is_match(&example.text),
            };
            trace!(%pattern, label = %example.label, %polarity, matched, "checked example");

            let expected = polarity == Polarity::Positive;
            if matched != expected {
                report.failures.push(ExampleFailure {
                    pattern: pattern.clone(),
                    polarity,
                    label: example.label.clone(),
                    text: example.text.clone(),
                });
            }
        }
    }

    Ok(report)
}

/// Like [`check_examples`], but any failing example is an error.
pub fn verify_examples(corpus: &Corpus) -> Result<ExampleReport> {
    check_examples(corpus)?.into_result()
}
