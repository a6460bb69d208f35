// logsentinel-core/src/engine.rs
//! The redaction engine: orchestrates generic detection and profile patterns.
//!
//! The engine applies a layered approach:
//!
//! 1. First, the generic detection stage (a [`Scrubber`]) tags free-text PII
//!    such as emails and phone numbers.
//! 2. Then, the patterns of every loaded compliance profile run in load
//!    order, each profile's patterns in catalog order.
//!
//! Per-stage failures are recovered locally: a failing detector degrades the
//! call to pattern-only redaction and a warning is logged. Sanitization
//! always produces output; availability is prioritized over completeness,
//! and under-redaction is visible only via logs. Operators should treat this
//! as best-effort defense-in-depth, not a security boundary.
//!
//! # Thread safety
//!
//! `redact`, `redact_batch`, and `list_profiles` take `&self` and are safe to
//! call from many threads at once. `load_profile` and `unload_profile` take
//! `&mut self` and belong in single-threaded setup; callers that need
//! concurrent reconfiguration must add their own synchronization (e.g. an
//! `RwLock` around the engine).
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use std::borrow::Cow;

use logsentinel_scrub::Scrubber;

use crate::errors::RedactionError;
use crate::logging::{loggable_content, redact_sensitive};
use crate::profile::ComplianceProfile;
use crate::profiles::UsGlobalProfile;

/// A profile plus the names of the supplemental detectors it registered,
/// kept so unloading the profile can deregister them again.
struct LoadedProfile {
    profile: Box<dyn ComplianceProfile>,
    detector_names: Vec<String>,
}

/// Engine for sanitizing sensitive data from text.
///
/// # Example
///
/// ```
/// use logsentinel_core::RedactionEngine;
///
/// # fn main() -> Result<(), logsentinel_core::RedactionError> {
/// let engine = RedactionEngine::new()?;
///
/// let (safe, changed) = engine.redact("User email: john@example.com");
/// assert_eq!(safe, "User email: {{EMAIL}}");
/// assert!(changed);
///
/// let (safe, changed) = engine.redact("password=mysecretpass123");
/// assert_eq!(safe, "password={{REDACTED_PASSWORD}}");
/// assert!(changed);
/// # Ok(())
/// # }
/// ```
pub struct RedactionEngine {
    /// Loaded profiles in load order. Application order is load order, and
    /// replacing a profile keeps its original slot, so the pipeline never
    /// silently reorders.
    profiles: Vec<LoadedProfile>,
    scrubber: Scrubber,
}

impl RedactionEngine {
    /// An engine with the default scrubber and the built-in
    /// [`UsGlobalProfile`] loaded.
    pub fn new() -> Result<Self, RedactionError> {
        let mut engine = Self::empty();
        engine.load_profile(UsGlobalProfile::new()?);
        Ok(engine)
    }

    /// A clean slate: the default scrubber, no profiles. Redaction then
    /// consists of the generic detection stage only.
    pub fn empty() -> Self {
        Self { profiles: Vec::new(), scrubber: Scrubber::new() }
    }

    /// An engine using a caller-supplied scrubber, with no profiles loaded.
    ///
    /// This is the injection point for a custom generic-detection capability;
    /// there is no process-wide shared engine, callers construct one at
    /// startup and pass it to every call site.
    pub fn with_scrubber(scrubber: Scrubber) -> Self {
        Self { profiles: Vec::new(), scrubber }
    }

    /// Loads a compliance profile into the engine.
    ///
    /// If a profile with the same name is already loaded it is replaced in
    /// place: its supplemental detectors are deregistered and the new
    /// profile's detectors registered. Not safe to call concurrently with
    /// in-flight `redact` calls.
    pub fn load_profile<P: ComplianceProfile + 'static>(&mut self, profile: P) {
        let name = profile.name().to_string();
        if let Some(pos) = self.profiles.iter().position(|p| p.profile.name() == name) {
            let previous = self.profiles.remove(pos);
            for detector_name in &previous.detector_names {
                self.scrubber.remove_detector(detector_name);
            }
            let loaded = self.register(profile);
            self.profiles.insert(pos, loaded);
            info!("Replaced compliance profile: {name}");
        } else {
            let loaded = self.register(profile);
            self.profiles.push(loaded);
            info!("Loaded compliance profile: {name}");
        }
    }

    fn register<P: ComplianceProfile + 'static>(&mut self, profile: P) -> LoadedProfile {
        let detectors = profile.supplemental_detectors();
        let mut detector_names = Vec::with_capacity(detectors.len());
        for detector in detectors {
            debug!(
                "Profile '{}' contributes supplemental detector '{}'",
                profile.name(),
                detector.name()
            );
            detector_names.push(detector.name().to_string());
            self.scrubber.add_detector(detector);
        }
        LoadedProfile { profile: Box::new(profile), detector_names }
    }

    /// Removes the named profile, returning whether removal occurred.
    ///
    /// Supplemental detectors the profile contributed are deregistered as
    /// well. Unknown names are not an error.
    pub fn unload_profile(&mut self, profile_name: &str) -> bool {
        let Some(pos) = self.profiles.iter().position(|p| p.profile.name() == profile_name)
        else {
            return false;
        };
        let removed = self.profiles.remove(pos);
        for detector_name in &removed.detector_names {
            self.scrubber.remove_detector(detector_name);
        }
        info!("Unloaded compliance profile: {profile_name}");
        true
    }

    /// Names of the loaded profiles, in load order.
    pub fn list_profiles(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.profile.name().to_string()).collect()
    }

    /// Redacts sensitive data from `text`.
    ///
    /// Returns the sanitized text and whether any redaction occurred. Never
    /// fails: stage failures are logged and the stage skipped, so a log
    /// pipeline is never blocked on a detector defect.
    pub fn redact(&self, text: &str) -> (String, bool) {
        if text.is_empty() {
            return (String::new(), false);
        }

        // Stage 1: generic free-text detection. On failure, fall back to the
        // original text for this call.
        let mut current = match self.scrubber.scrub(text) {
            Ok(scrubbed) => scrubbed,
            Err(e) => {
                warn!(
                    "Generic detector failed on input {}; continuing with pattern-only \
                     redaction: {e}",
                    redact_sensitive(text)
                );
                debug!("Generic detector failure input: {}", loggable_content(text));
                text.to_string()
            }
        };

        // Stage 2: profile patterns, load order then catalog order.
        for loaded in &self.profiles {
            for pattern in loaded.profile.patterns() {
                let substituted = match pattern.apply(&current) {
                    Cow::Owned(substituted) => Some(substituted),
                    Cow::Borrowed(_) => None,
                };
                if let Some(substituted) = substituted {
                    debug!(
                        "Profile '{}': pattern '{}' redacted content",
                        loaded.profile.name(),
                        pattern.name
                    );
                    current = substituted;
                }
            }
        }

        let changed = current != text;
        (current, changed)
    }

    /// [`redact`](Self::redact) with an absent-input pass-through: `None` in,
    /// `None` out, no redaction reported.
    pub fn redact_opt(&self, text: Option<&str>) -> (Option<String>, bool) {
        match text {
            None => (None, false),
            Some(text) => {
                let (sanitized, changed) = self.redact(text);
                (Some(sanitized), changed)
            }
        }
    }

    /// Redacts each element of `texts`, preserving order and length.
    ///
    /// The flag is true if any element changed.
    pub fn redact_batch<S: AsRef<str>>(&self, texts: &[S]) -> (Vec<String>, bool) {
        let mut sanitized = Vec::with_capacity(texts.len());
        let mut any_changed = false;
        for text in texts {
            let (redacted, changed) = self.redact(text.as_ref());
            sanitized.push(redacted);
            any_changed |= changed;
        }
        (sanitized, any_changed)
    }
}
