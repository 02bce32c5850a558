//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a patcov run.
///
/// This struct represents the contents of `patcov.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Inputs
    // =========================================================================
    /// Path to the corpus YAML file, relative to the config file.
    #[serde(default = "default_corpus")]
    pub corpus: String,

    /// Path to the schema YAML file, relative to the config file.
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Globs over rule names whose patterns are not required in the corpus.
    #[serde(default = "default_exclude_rules")]
    pub exclude_rules: Vec<String>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Format of reports printed to stdout.
    #[serde(default)]
    pub report_format: ReportFormat,

    /// Append-only NDJSON log of check runs (disabled when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: default_corpus(),
            schema: default_schema(),
            exclude_rules: default_exclude_rules(),
            report_format: ReportFormat::default(),
            events_log: None,
        }
    }
}
