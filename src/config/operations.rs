//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::constraints::RuleExclusions;
use crate::error::{CoverageError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the patcov.yaml file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CoverageError::UserError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CoverageError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CoverageError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `corpus` and `schema` must be non-empty
    /// - `exclude_rules` entries must be non-empty, valid globs
    /// - `events_log`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.corpus.trim().is_empty() {
            return Err(CoverageError::UserError(
                "config validation failed: corpus must not be empty".to_string(),
            ));
        }

        if self.schema.trim().is_empty() {
            return Err(CoverageError::UserError(
                "config validation failed: schema must not be empty".to_string(),
            ));
        }

        if self.exclude_rules.iter().any(|glob| glob.is_empty()) {
            return Err(CoverageError::UserError(
                "config validation failed: exclude_rules entries must be non-empty".to_string(),
            ));
        }
        self.rule_exclusions()?;

        if let Some(log) = &self.events_log
            && log.trim().is_empty()
        {
            return Err(CoverageError::UserError(
                "config validation failed: events_log must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }

    /// Compile `exclude_rules` into matchers.
    pub fn rule_exclusions(&self) -> Result<RuleExclusions> {
        RuleExclusions::new(&self.exclude_rules)
    }

    /// Resolve relative paths against `base` (normally the config file's directory).
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &str| -> String {
            let path = Path::new(p);
            if path.is_absolute() {
                p.to_string()
            } else {
                base.join(path).to_string_lossy().to_string()
            }
        };

        self.corpus = resolve(&self.corpus);
        self.schema = resolve(&self.schema);
        self.events_log = self.events_log.as_deref().map(resolve);
        self
    }

    pub fn corpus_path(&self) -> PathBuf {
        PathBuf::from(&self.corpus)
    }

    pub fn schema_path(&self) -> PathBuf {
        PathBuf::from(&self.schema)
    }

    pub fn events_log_path(&self) -> Option<PathBuf> {
        self.events_log.as_ref().map(PathBuf::from)
    }
}
