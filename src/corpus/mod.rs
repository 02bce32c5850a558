//! Curated example corpus.
//!
//! The corpus maps each pattern text to the examples known to match it
//! (positives) and known not to match it (negatives). It is loaded once per
//! run and never mutated afterwards.

mod load;
mod model;


// Re-export public API
pub use model::{Corpus, Example, ExampleSet, Polarity};
