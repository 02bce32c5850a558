//! Error types for patcov.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::verify::{CoverageReport, ExampleReport};
use thiserror::Error;

/// Main error type for patcov operations.
///
/// Each variant maps to a specific exit code, see [`exit_codes`].
#[derive(Error, Debug)]
pub enum CoverageError {
    /// User provided invalid arguments, or an input file could not be read or parsed.
    #[error("{0}")]
    UserError(String),

    /// The corpus is malformed (duplicate labels or duplicate patterns).
    #[error("Corpus integrity check failed: {0}")]
    Integrity(String),

    /// Declared patterns and corpus patterns disagree.
    #[error("{0}")]
    Inconsistent(CoverageReport),

    /// Examples disagree with their patterns.
    #[error("{0}")]
    ExampleMismatch(ExampleReport),

    /// A corpus pattern could not be compiled by the regex engine.
    #[error("invalid regex pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl CoverageError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoverageError::UserError(_) => exit_codes::USER_ERROR,
            CoverageError::Integrity(_) => exit_codes::INTEGRITY_FAILURE,
            CoverageError::Inconsistent(_) => exit_codes::COVERAGE_FAILURE,
            CoverageError::ExampleMismatch(_) => exit_codes::EXAMPLE_FAILURE,
            CoverageError::InvalidPattern { .. } => exit_codes::EXAMPLE_FAILURE,
        }
    }
}

/// Result type alias for patcov operations.
pub type Result<T> = std::result::Result<T, CoverageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = CoverageError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn integrity_error_has_correct_exit_code() {
        let err = CoverageError::Integrity("duplicate label".to_string());
        assert_eq!(err.exit_code(), exit_codes::INTEGRITY_FAILURE);
    }

    #[test]
    fn inconsistent_error_has_correct_exit_code() {
        let err = CoverageError::Inconsistent(CoverageReport::default());
        assert_eq!(err.exit_code(), exit_codes::COVERAGE_FAILURE);
    }

    #[test]
    fn invalid_pattern_has_correct_exit_code() {
        let err = CoverageError::InvalidPattern {
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::EXAMPLE_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = CoverageError::Integrity("duplicate pattern '^a$'".to_string());
        assert_eq!(
            err.to_string(),
            "Corpus integrity check failed: duplicate pattern '^a$'"
        );

        let err = CoverageError::InvalidPattern {
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        assert_eq!(err.to_string(), "invalid regex pattern \"(\": unclosed group");
    }
}
