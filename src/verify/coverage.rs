//! Reconciliation of declared patterns against corpus patterns.

use crate::constraints::{DeclarationSite, RequiredSet};
use crate::error::{CoverageError, Result};
use crate::pattern::Pattern;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A declared pattern with no corpus entry, with every site that declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCoverage {
    pub pattern: Pattern,
    pub sites: Vec<DeclarationSite>,
}

/// Result of reconciling required patterns with corpus patterns.
///
/// Both lists are sorted by pattern text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Required patterns absent from the corpus.
    pub missing: Vec<MissingCoverage>,
    /// Corpus patterns that nothing declares.
    pub surplus: Vec<Pattern>,
}

impl CoverageReport {
    /// The check passes iff nothing is missing and nothing is surplus.
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.surplus.is_empty()
    }

    /// Turn a failing report into [`CoverageError::Inconsistent`].
    pub fn into_result(self) -> Result<()> {
        if self.passed() {
            Ok(())
        } else {
            Err(CoverageError::Inconsistent(self))
        }
    }
}

impl fmt::Display for CoverageReport {
    /// Missing patterns with their sites, then surplus patterns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.missing.is_empty() {
            writeln!(
                f,
                "The following declared patterns are not covered by the corpus ({}):",
                self.missing.len()
            )?;
            for entry in &self.missing {
                let sites: Vec<String> = entry
                    .sites
                    .iter()
                    .map(|site| format!("{} {}", site.kind(), site.display_name()))
                    .collect();
                writeln!(f, "  {:?} -> [{}]", entry.pattern.as_str(), sites.join(", "))?;
            }
        }

        if !self.surplus.is_empty() {
            writeln!(
                f,
                "The following corpus patterns could not be traced back to any declaration ({}):",
                self.surplus.len()
            )?;
            for pattern in &self.surplus {
                writeln!(f, "  {:?}", pattern.as_str())?;
            }
        }

        Ok(())
    }
}

/// Reconcile `required` against `provided`.
///
/// Pure: no example is matched against any pattern here, and neither input
/// is modified. Pattern identity is exact text equality.
pub fn check_coverage(required: &RequiredSet, provided: &BTreeSet<Pattern>) -> CoverageReport {
    // RequiredSet iterates in pattern order, so `missing` comes out sorted.
    let missing = required
        .iter()
        .filter(|(pattern, _)| !provided.contains(*pattern))
        .map(|(pattern, sites)| MissingCoverage {
            pattern: pattern.clone(),
            sites: sites.to_vec(),
        })
        .collect();

    let surplus = provided
        .iter()
        .filter(|pattern| !required.contains(pattern.as_str()))
        .cloned()
        .collect();

    CoverageReport { missing, surplus }
}
