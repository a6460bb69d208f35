//! errors.rs - Custom error types for the logsentinel-core library.
//!
//! Every variant here is a construction-time failure: an invalid pattern
//! definition is a programmer error and must surface immediately, not at
//! redact time. The redaction path itself never returns an error.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `logsentinel-core`
/// library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RedactionError {
    #[error("failed to compile pattern '{0}': {1}")]
    RuleCompilation(String, regex::Error),

    #[error("pattern '{0}': length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error(
        "pattern '{name}': replacement references capture group ${group}, \
         but the matcher defines only {available} group(s)"
    )]
    InvalidCaptureReference {
        name: String,
        group: usize,
        available: usize,
    },

    #[error("a pattern has an empty `name` field")]
    EmptyPatternName,
}
