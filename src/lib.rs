//! Patcov: pattern-coverage consistency checking.
//!
//! A schema declares regular-expression constraints on named rules and on
//! class properties. A curated corpus holds, per pattern, examples known to
//! match and known not to match. Patcov checks that the two agree:
//!
//! - every declared pattern has a corpus entry, and every corpus entry is
//!   still declared ([`verify::check_coverage`]);
//! - every example behaves as labelled under the regex engine
//!   ([`verify::check_examples`]).
//!
//! ```
//! use patcov::constraints::{DeclarationSite, RequiredSet};
//! use patcov::corpus::{Corpus, ExampleSet};
//! use patcov::pattern::Pattern;
//! use patcov::verify::check_coverage;
//!
//! let mut required = RequiredSet::new();
//! required.declare("^[0-9]+$", DeclarationSite::property("Range", "min"));
//!
//! let corpus = Corpus::from_entries(vec![(
//!     Pattern::from("^[0-9]+$"),
//!     ExampleSet::from_pairs(&[("one", "1")], &[("empty", "")]),
//! )])?;
//!
//! assert!(check_coverage(&required, &corpus.all_patterns()).passed());
//! # Ok::<(), patcov::error::CoverageError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constraints;
pub mod corpus;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod logging;
pub mod pattern;
pub mod verify;

#[cfg(test)]
mod test_support;
