//! The compliance-profile capability trait.
//!
//! A profile is a named, self-contained bundle of redaction rules for one
//! compliance or data-sensitivity domain. Implement this trait to add
//! regional or industry-specific rules without modifying the core
//! [`RedactionEngine`](crate::engine::RedactionEngine), e.g. a PCI-DSS
//! profile for payment data, a HIPAA profile for healthcare identifiers, or
//! an India profile for PAN/Aadhaar numbers.
//!
//! License: MIT OR Apache-2.0

use std::sync::Arc;

use logsentinel_scrub::Detector;

use crate::pattern::PatternRecord;

/// A named bundle of redaction rules for one compliance domain.
///
/// Profiles are constructed once, validated at construction time, and then
/// treated as immutable: `patterns` must return the same records in the same
/// order on every call. Pattern order matters: later patterns see the
/// output of earlier ones, so overlapping patterns belong most-specific
/// first.
///
/// # Example
///
/// ```
/// use logsentinel_core::{ComplianceProfile, PatternRecord, RedactionError};
///
/// struct IndiaProfile {
///     patterns: Vec<PatternRecord>,
/// }
///
/// impl IndiaProfile {
///     fn new() -> Result<Self, RedactionError> {
///         Ok(Self {
///             patterns: vec![PatternRecord::new(
///                 "pan_card",
///                 r"\b[A-Z]{5}[0-9]{4}[A-Z]\b",
///                 "{{PAN_CARD}}",
///                 "Indian PAN card number",
///             )?],
///         })
///     }
/// }
///
/// impl ComplianceProfile for IndiaProfile {
///     fn name(&self) -> &str {
///         "india"
///     }
///
///     fn description(&self) -> &str {
///         "Indian PII patterns (PAN, Aadhaar, etc.)"
///     }
///
///     fn patterns(&self) -> &[PatternRecord] {
///         &self.patterns
///     }
/// }
///
/// # let profile = IndiaProfile::new().unwrap();
/// # assert_eq!(profile.patterns().len(), 1);
/// ```
pub trait ComplianceProfile: Send + Sync {
    /// Globally unique profile key, used for load/unload/listing
    /// (e.g. "us_global", "eu", "india").
    fn name(&self) -> &str;

    /// Human-readable description of what this profile covers.
    fn description(&self) -> &str;

    /// The profile's redaction patterns, in application order.
    fn patterns(&self) -> &[PatternRecord];

    /// Supplemental free-text detectors this profile contributes to the
    /// generic detection stage. Most profiles have none.
    fn supplemental_detectors(&self) -> Vec<Arc<dyn Detector>> {
        Vec::new()
    }
}
