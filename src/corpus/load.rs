//! YAML storage format for the corpus.
//!
//! The file is a sequence of entries:
//!
//! ```yaml
//! - pattern: "^(0|[1-9][0-9]*)$"
//!   positives:
//!     zero: "0"
//!   negatives:
//!     dot: "1.0"
//! ```
//!
//! Label maps are read entry by entry so that order is preserved and
//! duplicate labels reach the integrity check instead of being collapsed.

use super::model::{Corpus, Example, ExampleSet};
use crate::error::{CoverageError, Result};
use crate::pattern::Pattern;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CorpusEntry {
    pattern: String,
    // Absent, empty and `~` all mean no examples.
    #[serde(default)]
    positives: Option<LabeledTexts>,
    #[serde(default)]
    negatives: Option<LabeledTexts>,
}

#[derive(Debug, Default)]
struct LabeledTexts(Vec<Example>);

impl<'de> Deserialize<'de> for LabeledTexts {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabeledTextsVisitor;

        impl<'de> Visitor<'de> for LabeledTextsVisitor {
            type Value = LabeledTexts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping from example labels to example strings")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut examples = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, text)) = map.next_entry::<String, String>()? {
                    examples.push(Example::new(label, text));
                }
                Ok(LabeledTexts(examples))
            }
        }

        deserializer.deserialize_map(LabeledTextsVisitor)
    }
}

impl Corpus {
    /// Load a corpus from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Corpus)` - Parsed corpus that passed the integrity check
    /// * `Err(CoverageError::UserError)` - Unreadable file or malformed YAML
    /// * `Err(CoverageError::Integrity)` - Duplicate patterns or labels
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CoverageError::UserError(format!(
                "failed to read corpus file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let corpus = Self::from_yaml(&content)?;
        debug!(path = %path.display(), patterns = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    /// Parse a corpus from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document is an empty corpus.
        let entries: Option<Vec<CorpusEntry>> = serde_yaml::from_str(yaml)
            .map_err(|e| CoverageError::UserError(format!("failed to parse corpus YAML: {}", e)))?;

        let entries = entries
            .unwrap_or_default()
            .into_iter()
            .map(|entry| {
                (
                    Pattern::new(entry.pattern),
                    ExampleSet::new(
                        entry.positives.unwrap_or_default().0,
                        entry.negatives.unwrap_or_default().0,
                    ),
                )
            })
            .collect();

        Self::from_entries(entries)
    }
}
