//! Declared pattern constraints.
//!
//! A [`ConstraintSource`] enumerates every pattern a schema enforces together
//! with where it is enforced. The coverage check only sees the resulting
//! [`RequiredSet`], never the schema itself.

mod exclude;
mod site;
mod source;


// Re-export public API
pub use exclude::RuleExclusions;
pub use site::{Declaration, DeclarationSite, RequiredSet};
pub use source::{ClassDecl, ConstraintSource, PropertyDecl, RuleDecl, SchemaFile};
