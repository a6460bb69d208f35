// logsentinel-scrub/src/lib.rs
//! # Logsentinel Scrub
//!
//! `logsentinel-scrub` is the generic free-text PII detection engine used by
//! `logsentinel-core`. It recognizes common personally-identifiable data that
//! needs no per-project configuration (email addresses, phone numbers, IPv4
//! addresses, URLs) and replaces each detected span with a bracketed category
//! tag such as `{{EMAIL}}`.
//!
//! The crate is deliberately narrow: it knows nothing about compliance
//! profiles, pattern catalogs, or the redaction engine built on top of it.
//! Its extension point is the [`Detector`] trait: additional detectors can
//! be registered on a [`Scrubber`] at runtime, which is how compliance
//! profiles contribute supplemental detection rules.
//!
//! ## Modules
//!
//! * `detectors`: The [`Detector`] trait, the [`Entity`] span type, the
//!   built-in detector set, and the reusable [`RegexDetector`].
//! * `scrubber`: The [`Scrubber`] registry that runs detectors, resolves
//!   overlapping spans, and splices replacement tags into the text.
//!
//! License: MIT OR Apache-2.0

pub mod detectors;
pub mod scrubber;

pub use detectors::{builtin_detectors, Detector, Entity, RegexDetector};
pub use scrubber::{Scrubber, ScrubError};
