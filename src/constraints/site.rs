//! Declaration sites and the required-pattern set.

use crate::pattern::Pattern;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Where in a schema a pattern is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeclarationSite {
    /// A standalone named validation rule.
    Rule { name: String },
    /// A constraint on a property of a class.
    Property { class: String, property: String },
}

impl DeclarationSite {
    pub fn rule(name: impl Into<String>) -> Self {
        Self::Rule { name: name.into() }
    }

    pub fn property(class: impl Into<String>, property: impl Into<String>) -> Self {
        Self::Property {
            class: class.into(),
            property: property.into(),
        }
    }

    /// Bare site name: the rule name, or `Class.property`.
    pub fn display_name(&self) -> String {
        self.to_string()
    }

    /// `"rule"` or `"property"`, used to tell sites apart in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            DeclarationSite::Rule { .. } => "rule",
            DeclarationSite::Property { .. } => "property",
        }
    }
}

impl fmt::Display for DeclarationSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationSite::Rule { name } => write!(f, "{}", name),
            DeclarationSite::Property { class, property } => write!(f, "{}.{}", class, property),
        }
    }
}

/// A single pattern enforced at a single site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub pattern: Pattern,
    pub site: DeclarationSite,
}

impl Declaration {
    pub fn new(pattern: impl Into<Pattern>, site: DeclarationSite) -> Self {
        Self {
            pattern: pattern.into(),
            site,
        }
    }
}

/// Distinct required patterns, each with the ordered sites that declare it.
///
/// Entries are only created through [`RequiredSet::declare`], so every
/// pattern carries at least one site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredSet {
    sites: BTreeMap<Pattern, Vec<DeclarationSite>>,
}

impl RequiredSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `site` enforces `pattern`. Sites accumulate in call order.
    pub fn declare(&mut self, pattern: impl Into<Pattern>, site: DeclarationSite) {
        self.sites.entry(pattern.into()).or_default().push(site);
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.sites.contains_key(pattern)
    }

    pub fn sites(&self, pattern: &str) -> Option<&[DeclarationSite]> {
        self.sites.get(pattern).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &[DeclarationSite])> {
        self.sites.iter().map(|(p, s)| (p, s.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl FromIterator<Declaration> for RequiredSet {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        let mut required = Self::new();
        for declaration in iter {
            required.declare(declaration.pattern, declaration.site);
        }
        required
    }
}
