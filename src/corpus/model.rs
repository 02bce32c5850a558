//! Example, ExampleSet and Corpus definitions.

use crate::error::{CoverageError, Result};
use crate::pattern::Pattern;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// Whether an example must match its pattern or must not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
        }
    }
}

/// A labeled example string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    /// Label used for traceability in reports (e.g. `fuzzed_03`).
    pub label: String,
    /// The literal string checked against the pattern.
    pub text: String,
}

impl Example {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Positive and negative examples for a single pattern, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExampleSet {
    positives: Vec<Example>,
    negatives: Vec<Example>,
}

impl ExampleSet {
    pub fn new(positives: Vec<Example>, negatives: Vec<Example>) -> Self {
        Self {
            positives,
            negatives,
        }
    }

    /// Build an example set from `(label, text)` pairs.
    pub fn from_pairs(positives: &[(&str, &str)], negatives: &[(&str, &str)]) -> Self {
        fn collect(pairs: &[(&str, &str)]) -> Vec<Example> {
            pairs
                .iter()
                .map(|(label, text)| Example::new(*label, *text))
                .collect()
        }
        Self::new(collect(positives), collect(negatives))
    }

    pub fn positives(&self) -> &[Example] {
        &self.positives
    }

    pub fn negatives(&self) -> &[Example] {
        &self.negatives
    }

    pub fn examples(&self, polarity: Polarity) -> &[Example] {
        match polarity {
            Polarity::Positive => &self.positives,
            Polarity::Negative => &self.negatives,
        }
    }

    /// Find the text of an example by polarity and label.
    pub fn get(&self, polarity: Polarity, label: &str) -> Option<&str> {
        self.examples(polarity)
            .iter()
            .find(|example| example.label == label)
            .map(|example| example.text.as_str())
    }

    /// Iterate over all examples, positives first.
    pub fn iter(&self) -> impl Iterator<Item = (Polarity, &Example)> {
        self.positives
            .iter()
            .map(|e| (Polarity::Positive, e))
            .chain(self.negatives.iter().map(|e| (Polarity::Negative, e)))
    }

    /// Labels that occur more than once within one polarity, in first-seen order.
    pub fn duplicate_labels(&self) -> Vec<(Polarity, &str)> {
        let mut duplicates = Vec::new();
        for polarity in [Polarity::Positive, Polarity::Negative] {
            let mut seen = HashSet::new();
            let mut reported = HashSet::new();
            for example in self.examples(polarity) {
                let label = example.label.as_str();
                if !seen.insert(label) && reported.insert(label) {
                    duplicates.push((polarity, label));
                }
            }
        }
        duplicates
    }
}

/// Ordered mapping from pattern to its curated examples.
///
/// Built once and read-only afterwards. Construction enforces that pattern
/// keys are unique and that labels are unique within each polarity.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<(Pattern, ExampleSet)>,
    index: HashMap<Pattern, usize>,
}

impl Corpus {
    /// Build a corpus, failing with [`CoverageError::Integrity`] on duplicates.
    ///
    /// Every integrity problem is listed in the error, not only the first.
    pub fn from_entries(entries: Vec<(Pattern, ExampleSet)>) -> Result<Self> {
        let mut problems = Vec::new();
        let mut index = HashMap::with_capacity(entries.len());

        for (position, (pattern, examples)) in entries.iter().enumerate() {
            if index.insert(pattern.clone(), position).is_some() {
                problems.push(format!("duplicate pattern {:?}", pattern.as_str()));
            }
            for (polarity, label) in examples.duplicate_labels() {
                problems.push(format!(
                    "duplicate {} label '{}' for pattern {:?}",
                    polarity,
                    label,
                    pattern.as_str()
                ));
            }
        }

        if !problems.is_empty() {
            return Err(CoverageError::Integrity(problems.join("; ")));
        }

        Ok(Self { entries, index })
    }

    /// Exact-text lookup; no normalization is applied.
    pub fn lookup(&self, pattern: &str) -> Option<&ExampleSet> {
        self.index.get(pattern).map(|&i| &self.entries[i].1)
    }

    /// Every pattern stored in the corpus.
    pub fn all_patterns(&self) -> BTreeSet<Pattern> {
        self.entries.iter().map(|(p, _)| p.clone()).collect()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &ExampleSet)> {
        self.entries.iter().map(|(p, e)| (p, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
