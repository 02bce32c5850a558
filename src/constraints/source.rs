//! The constraint-source capability and its schema-file implementation.

use super::exclude::RuleExclusions;
use super::site::{Declaration, DeclarationSite, RequiredSet};
use crate::error::{CoverageError, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, trace};

/// Anything that can enumerate the pattern constraints a schema enforces.
pub trait ConstraintSource {
    /// Every pattern constraint with its site, in declaration order.
    fn declarations(&self) -> Result<Vec<Declaration>>;

    /// Distinct required patterns with provenance.
    ///
    /// A pattern is required when at least one of its sites is not excluded.
    /// All sites of a required pattern are kept, excluded ones included.
    fn required_patterns(&self, exclusions: &RuleExclusions) -> Result<RequiredSet> {
        let declarations = self.declarations()?;

        let enforced: BTreeSet<_> = declarations
            .iter()
            .filter(|d| match exclusions.matching(&d.site) {
                Some(glob) => {
                    trace!(site = %d.site, glob, "site excluded");
                    false
                }
                None => true,
            })
            .map(|d| d.pattern.clone())
            .collect();

        Ok(declarations
            .into_iter()
            .filter(|d| enforced.contains(&d.pattern))
            .collect())
    }
}

/// Declarations held in memory, in the order given.
impl ConstraintSource for [Declaration] {
    fn declarations(&self) -> Result<Vec<Declaration>> {
        Ok(self.to_vec())
    }
}

/// A schema description listing pattern rules and per-property constraints.
///
/// ```yaml
/// rules:
///   - name: matches_version_type
///     pattern: "^(0|[1-9][0-9]*)$"
/// classes:
///   - name: AdministrativeInformation
///     properties:
///       - name: version
///         patterns: ["^(0|[1-9][0-9]*)$"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchemaFile {
    pub rules: Vec<RuleDecl>,
    pub classes: Vec<ClassDecl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleDecl {
    pub name: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl SchemaFile {
    /// Load a schema description from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CoverageError::UserError(format!(
                "failed to read schema file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let schema = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            rules = schema.rules.len(),
            classes = schema.classes.len(),
            "loaded schema"
        );
        Ok(schema)
    }

    /// Parse a schema description from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let schema: Option<SchemaFile> = serde_yaml::from_str(yaml)
            .map_err(|e| CoverageError::UserError(format!("failed to parse schema YAML: {}", e)))?;
        Ok(schema.unwrap_or_default())
    }
}

impl ConstraintSource for SchemaFile {
    /// Rule sites first, then property sites in class, property, constraint order.
    fn declarations(&self) -> Result<Vec<Declaration>> {
        let rules = self
            .rules
            .iter()
            .map(|rule| Declaration::new(rule.pattern.as_str(), DeclarationSite::rule(&rule.name)));

        let properties = self.classes.iter().flat_map(|class| {
            class.properties.iter().flat_map(move |prop| {
                prop.patterns.iter().map(move |pattern| {
                    Declaration::new(
                        pattern.as_str(),
                        DeclarationSite::property(&class.name, &prop.name),
                    )
                })
            })
        });

        Ok(rules.chain(properties).collect())
    }
}
