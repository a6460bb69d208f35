// logsentinel-scrub/src/scrubber.rs
//! The detector registry and span-splicing logic.
//!
//! A [`Scrubber`] owns an ordered set of [`Detector`]s. `scrub` runs every
//! detector over the input, validates the reported spans, resolves overlaps
//! (earliest start wins, longest span breaks ties), and replaces each
//! surviving span with its `{{LABEL}}` tag.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::sync::Arc;
use thiserror::Error;

use crate::detectors::{builtin_detectors, Detector, Entity};

/// Errors surfaced by [`Scrubber::scrub`].
///
/// A scrub failure is always attributable to a single detector; callers that
/// prefer availability over completeness can log the error and fall back to
/// the unscrubbed input.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    #[error("detector '{detector}' failed: {error:#}")]
    Detector { detector: String, error: anyhow::Error },

    #[error(
        "detector '{detector}' produced invalid span {start}..{end} for input of {len} bytes"
    )]
    InvalidSpan {
        detector: String,
        start: usize,
        end: usize,
        len: usize,
    },
}

/// An ordered registry of detectors with tag-splicing application.
pub struct Scrubber {
    detectors: Vec<Arc<dyn Detector>>,
}

impl Scrubber {
    /// A scrubber seeded with the built-in detector set.
    pub fn new() -> Self {
        Self { detectors: builtin_detectors() }
    }

    /// A scrubber with no detectors at all. `scrub` is then the identity.
    pub fn empty() -> Self {
        Self { detectors: Vec::new() }
    }

    /// Appends a detector to the registry.
    ///
    /// Duplicate names are allowed; overlapping detections collapse to a
    /// single tag during span resolution, and `remove_detector` removes every
    /// detector carrying the name.
    pub fn add_detector(&mut self, detector: Arc<dyn Detector>) {
        debug!("Registering detector '{}'", detector.name());
        self.detectors.push(detector);
    }

    /// Removes every detector with the given name, returning whether any was
    /// removed.
    pub fn remove_detector(&mut self, name: &str) -> bool {
        let before = self.detectors.len();
        self.detectors.retain(|d| d.name() != name);
        let removed = self.detectors.len() != before;
        if removed {
            debug!("Deregistered detector '{name}'");
        }
        removed
    }

    /// Names of the registered detectors, in registration order.
    pub fn detector_names(&self) -> Vec<String> {
        self.detectors.iter().map(|d| d.name().to_string()).collect()
    }

    /// Replaces every detected span in `text` with its `{{LABEL}}` tag.
    ///
    /// Fails if any detector errors or reports a span that is out of bounds,
    /// zero-width, or not aligned to character boundaries. On failure the
    /// input is untouched; no partial output is produced.
    pub fn scrub(&self, text: &str) -> Result<String, ScrubError> {
        let mut entities: Vec<Entity> = Vec::new();
        for detector in &self.detectors {
            let found = detector.detect(text).map_err(|error| ScrubError::Detector {
                detector: detector.name().to_string(),
                error,
            })?;
            for entity in found {
                let valid = entity.start < entity.end
                    && entity.end <= text.len()
                    && text.is_char_boundary(entity.start)
                    && text.is_char_boundary(entity.end);
                if !valid {
                    return Err(ScrubError::InvalidSpan {
                        detector: detector.name().to_string(),
                        start: entity.start,
                        end: entity.end,
                        len: text.len(),
                    });
                }
                entities.push(entity);
            }
        }

        if entities.is_empty() {
            return Ok(text.to_string());
        }

        // Earliest start first; for equal starts prefer the longest span.
        entities.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut scrubbed = String::with_capacity(text.len());
        let mut last_end = 0usize;
        for entity in &entities {
            if entity.start < last_end {
                continue;
            }
            scrubbed.push_str(&text[last_end..entity.start]);
            scrubbed.push_str("{{");
            scrubbed.push_str(&entity.label);
            scrubbed.push_str("}}");
            last_end = entity.end;
        }
        scrubbed.push_str(&text[last_end..]);
        Ok(scrubbed)
    }
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use test_log::test;
    use crate::detectors::RegexDetector;

    struct FailingDetector;

    impl Detector for FailingDetector {
        fn name(&self) -> &str {
            "failing"
        }

        fn detect(&self, _text: &str) -> Result<Vec<Entity>> {
            Err(anyhow!("deliberately broken"))
        }
    }

    struct BadSpanDetector;

    impl Detector for BadSpanDetector {
        fn name(&self) -> &str {
            "bad_span"
        }

        fn detect(&self, text: &str) -> Result<Vec<Entity>> {
            Ok(vec![Entity::new("BAD", 0, text.len() + 10)])
        }
    }

    #[test]
    fn scrub_replaces_email_with_tag() {
        let scrubber = Scrubber::new();
        let scrubbed = scrubber.scrub("User email: john@example.com").unwrap();
        assert_eq!(scrubbed, "User email: {{EMAIL}}");
    }

    #[test]
    fn scrub_is_identity_on_clean_text() {
        let scrubber = Scrubber::new();
        let text = "nothing sensitive here";
        assert_eq!(scrubber.scrub(text).unwrap(), text);
    }

    #[test]
    fn scrub_prefers_longer_span_on_overlap() {
        // The URL contains a mailbox-shaped substring; the URL span starts
        // earlier and must win.
        let scrubber = Scrubber::new();
        let scrubbed = scrubber.scrub("fetch https://x.example.com/u@example.com now").unwrap();
        assert_eq!(scrubbed, "fetch {{URL}} now");
    }

    #[test]
    fn scrub_handles_multiple_categories() {
        let scrubber = Scrubber::new();
        let scrubbed = scrubber
            .scrub("mail a@b.io from 10.0.0.1, call 555-123-4567")
            .unwrap();
        assert_eq!(scrubbed, "mail {{EMAIL}} from {{IP_ADDRESS}}, call {{PHONE}}");
    }

    #[test]
    fn add_and_remove_detector_round_trip() {
        let mut scrubber = Scrubber::empty();
        let detector = RegexDetector::new("ticket", "TICKET_ID", r"TKT-\d{6}").unwrap();
        scrubber.add_detector(Arc::new(detector));
        assert_eq!(scrubber.detector_names(), vec!["ticket".to_string()]);
        assert_eq!(scrubber.scrub("see TKT-000042").unwrap(), "see {{TICKET_ID}}");

        assert!(scrubber.remove_detector("ticket"));
        assert!(!scrubber.remove_detector("ticket"));
        assert_eq!(scrubber.scrub("see TKT-000042").unwrap(), "see TKT-000042");
    }

    #[test]
    fn failing_detector_fails_the_call() {
        let mut scrubber = Scrubber::empty();
        scrubber.add_detector(Arc::new(FailingDetector));
        let err = scrubber.scrub("anything").unwrap_err();
        assert!(matches!(err, ScrubError::Detector { .. }));
        assert!(err.to_string().contains("failing"));
    }

    #[test]
    fn out_of_bounds_span_is_rejected() {
        let mut scrubber = Scrubber::empty();
        scrubber.add_detector(Arc::new(BadSpanDetector));
        let err = scrubber.scrub("short").unwrap_err();
        assert!(matches!(err, ScrubError::InvalidSpan { .. }));
    }

    #[test]
    fn empty_registry_is_identity() {
        let scrubber = Scrubber::empty();
        assert_eq!(scrubber.scrub("a@b.io").unwrap(), "a@b.io");
    }
}
