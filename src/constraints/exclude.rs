//! Rule-name exclusions.
//!
//! Some rules are exercised by a dedicated test suite rather than the
//! corpus. An excluded rule does not make its pattern required, but it is
//! still reported as provenance when the pattern is required elsewhere.

use super::site::DeclarationSite;
use crate::error::{CoverageError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled glob patterns over rule names.
#[derive(Debug, Clone)]
pub struct RuleExclusions {
    globs: GlobSet,
    patterns: Vec<String>,
}

impl RuleExclusions {
    /// Compile the given glob patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(RuleExclusions)` - Successfully compiled globs
    /// * `Err(CoverageError::UserError)` - If any glob is invalid (config error, exit 1)
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                CoverageError::UserError(format!(
                    "invalid glob pattern in exclude_rules: '{}' - {}\n\
                     Fix: edit patcov.yaml and correct or remove this pattern.",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        let globs = builder.build().map_err(|e| {
            CoverageError::UserError(format!("failed to compile exclude_rules globs: {}", e))
        })?;

        Ok(Self {
            globs,
            patterns: patterns.to_vec(),
        })
    }

    /// Exclusions that exclude nothing.
    pub fn none() -> Self {
        Self {
            globs: GlobSet::empty(),
            patterns: Vec::new(),
        }
    }

    /// Returns the first exclusion glob matching this site, if any.
    ///
    /// Property sites are never excluded.
    pub fn matching(&self, site: &DeclarationSite) -> Option<&str> {
        let DeclarationSite::Rule { name } = site else {
            return None;
        };
        self.globs
            .matches(name)
            .first()
            .map(|&i| self.patterns[i].as_str())
    }

    pub fn is_excluded(&self, site: &DeclarationSite) -> bool {
        self.matching(site).is_some()
    }
}

impl Default for RuleExclusions {
    fn default() -> Self {
        Self::none()
    }
}
