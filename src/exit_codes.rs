//! Exit code constants for the patcov CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Coverage failure (missing or surplus patterns)
//! - 3: Example failure (an example disagrees with its pattern)
//! - 4: Corpus integrity failure (duplicate labels or patterns)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable or malformed input, invalid config.
pub const USER_ERROR: i32 = 1;

/// Coverage failure: declared patterns without examples, or examples without a declaration.
pub const COVERAGE_FAILURE: i32 = 2;

/// Example failure: a positive that does not match or a negative that does.
pub const EXAMPLE_FAILURE: i32 = 3;

/// Corpus integrity failure: the corpus itself is malformed.
pub const INTEGRITY_FAILURE: i32 = 4;
