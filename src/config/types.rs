//! Configuration types and defaults for patcov.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// Default config file name looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "patcov.yaml";

/// Output format for reports written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Rule-name globs excluded by default.
///
/// `matches_xs_*` rules implement XML Schema value spaces and are tested by
/// their own suite rather than by the corpus.
pub fn default_exclude_rules() -> Vec<String> {
    vec!["matches_xs_*".to_string()]
}

// Default value functions for serde
pub(crate) fn default_corpus() -> String {
    "patterns.yaml".to_string()
}
pub(crate) fn default_schema() -> String {
    "schema.yaml".to_string()
}
