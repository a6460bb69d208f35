// logsentinel-core/src/lib.rs
//! # Logsentinel Core Library
//!
//! `logsentinel-core` provides the fundamental, platform-independent logic
//! for sanitizing sensitive data (PII, credentials, secrets) out of log text
//! before it is shown to an external consumer such as an AI agent. It defines
//! the pattern-record and compliance-profile abstractions, ships a default
//! US/Global pattern catalog, and implements the [`RedactionEngine`] that
//! orchestrates generic free-text PII detection followed by ordered profile
//! pattern substitution.
//!
//! The library is designed to be pure and stateless at the call boundary:
//! it performs no I/O, persists nothing, and decides nothing about *what*
//! text to fetch. It is also explicitly best-effort: regex detection has
//! known false-negative and false-positive rates and is defense-in-depth,
//! not a security boundary.
//!
//! ## Modules
//!
//! * `pattern`: Defines [`PatternRecord`], the compiled matcher/replacement
//!   unit, with construction-time validation.
//! * `profile`: Defines the [`ComplianceProfile`] trait for extensible,
//!   compliance-domain rule bundles.
//! * `profiles`: Built-in profiles; currently the default [`UsGlobalProfile`].
//! * `validators`: Programmatic structural checks for data types whose
//!   reserved ranges regexes alone cannot express.
//! * `engine`: The [`RedactionEngine`] orchestrator.
//! * `logging`: PII-safe helpers for diagnostics output.
//! * `errors`: The [`RedactionError`] type for construction-time failures.
//!
//! ## Usage Example
//!
//! ```rust
//! use logsentinel_core::RedactionEngine;
//!
//! fn main() -> Result<(), logsentinel_core::RedactionError> {
//!     // An engine with the built-in US/Global profile loaded.
//!     let engine = RedactionEngine::new()?;
//!
//!     let (sanitized, changed) =
//!         engine.redact("User email: john@example.com, SSN: 123-45-6789");
//!     assert_eq!(sanitized, "User email: {{EMAIL}}, SSN: {{SSN}}");
//!     assert!(changed);
//!
//!     // Batch form: order and length are preserved.
//!     let (sanitized, any_changed) =
//!         engine.redact_batch(&["password=hunter22", "normal line"]);
//!     assert_eq!(sanitized[0], "password={{REDACTED_PASSWORD}}");
//!     assert_eq!(sanitized[1], "normal line");
//!     assert!(any_changed);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Construction of patterns, profiles, and engines is fallible and returns
//! [`RedactionError`], since an invalid matcher is a programmer error that must
//! surface immediately. Redaction itself never fails: per-stage defects are
//! recovered locally and logged as warnings, so the hosting log pipeline is
//! never blocked. Operators must be aware that under-redaction after a
//! recovered failure is silent at the call level and visible only in logs.
//!
//! ## Design Principles
//!
//! * **Extensible:** New categories of sensitive data are added by
//!   implementing [`ComplianceProfile`], never by touching the engine.
//! * **Deterministic ordering:** Profiles apply in load order, patterns in
//!   catalog order; reloading a profile keeps its position.
//! * **Compile once:** Every matcher is compiled at construction time and
//!   reused across calls.
//! * **Availability first:** Sanitization always produces output, degrading
//!   gracefully when a detection stage fails.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod engine;
pub mod errors;
pub mod logging;
pub mod pattern;
pub mod profile;
pub mod profiles;
pub mod validators;

/// Re-exports the core engine type.
pub use engine::RedactionEngine;

/// Re-exports the error type for construction-time failures.
pub use errors::RedactionError;

/// Re-exports the pattern-record type and its pattern-length cap.
pub use pattern::{PatternRecord, MAX_PATTERN_LENGTH};

/// Re-exports the compliance-profile capability trait.
pub use profile::ComplianceProfile;

/// Re-exports the built-in default profile.
pub use profiles::UsGlobalProfile;

/// Re-exports PII-safe logging helpers.
pub use logging::redact_sensitive;

/// Re-exports the generic-detection types from `logsentinel-scrub` so
/// downstream crates can define supplemental detectors and inject custom
/// scrubbers without depending on the scrub crate directly.
pub use logsentinel_scrub::{Detector, Entity, RegexDetector, ScrubError, Scrubber};
