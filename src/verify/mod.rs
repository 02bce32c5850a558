//! Verification of the corpus against declared constraints.
//!
//! Two independent checks:
//! - Coverage: every declared pattern has a corpus entry and every corpus
//!   entry is declared somewhere. Pure set reconciliation.
//! - Examples: every positive fully matches its pattern and every negative
//!   does not. Uses the regex engine.

mod coverage;
mod examples;


// Re-export public API
pub use coverage::{CoverageReport, MissingCoverage, check_coverage};
pub use examples::{
    ExampleFailure, ExampleReport, check_examples, compile_full_match, compile_search,
    verify_examples,
};
