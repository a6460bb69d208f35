// logsentinel-scrub/src/detectors/mod.rs
//! Detector trait, detected-entity type, and the built-in detector set.
//!
//! Built-in detectors cover the free-text PII categories that regex pattern
//! catalogs upstream do not own: mailbox addresses, separator-formatted phone
//! numbers, IPv4 addresses, and URLs. Each detector reports spans; the
//! [`Scrubber`](crate::scrubber::Scrubber) decides what to do with them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// A single detected span of sensitive text.
///
/// `label` is an uppercase category name; the scrubber renders it as a
/// `{{LABEL}}` tag in place of the matched span. `start`/`end` are byte
/// offsets into the input and must lie on character boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: String,
    pub start: usize,
    pub end: usize,
}

impl Entity {
    pub fn new(label: impl Into<String>, start: usize, end: usize) -> Self {
        Self { label: label.into(), start, end }
    }
}

/// A pluggable detection rule for free-text PII.
///
/// Detectors are fallible by contract: a defective detector returns an error
/// instead of panicking, and the caller decides how to degrade. Implementors
/// must be cheap to call repeatedly; compile any regexes once, at
/// construction time.
pub trait Detector: Send + Sync {
    /// Stable identifier, used for registration and deregistration.
    fn name(&self) -> &str;

    /// Return every detected span in `text`.
    fn detect(&self, text: &str) -> Result<Vec<Entity>>;
}

// Built-in patterns, compiled once and shared across scrubber instances.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});
// Phone numbers must carry at least one separator between digit groups, so a
// raw 10/16-digit run (card or account number territory) is never split here.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-.\s])?(?:\(\d{3}\)\s?|\d{3}[-.\s])\d{3}[-.\s]\d{4}\b").unwrap()
});
static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b")
        .unwrap()
});
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"https?://[^\s<>"']+"#).unwrap());

/// One built-in detector: a shared precompiled regex plus its category label.
struct BuiltinDetector {
    name: &'static str,
    label: &'static str,
    regex: &'static Lazy<Regex>,
}

impl Detector for BuiltinDetector {
    fn name(&self) -> &str {
        self.name
    }

    fn detect(&self, text: &str) -> Result<Vec<Entity>> {
        Ok(self
            .regex
            .find_iter(text)
            .map(|m| Entity::new(self.label, m.start(), m.end()))
            .collect())
    }
}

/// Returns the default detector set, in application order.
pub fn builtin_detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(BuiltinDetector { name: "email", label: "EMAIL", regex: &EMAIL_RE }),
        Arc::new(BuiltinDetector { name: "phone", label: "PHONE", regex: &PHONE_RE }),
        Arc::new(BuiltinDetector { name: "ipv4", label: "IP_ADDRESS", regex: &IPV4_RE }),
        Arc::new(BuiltinDetector { name: "url", label: "URL", regex: &URL_RE }),
    ]
}

/// A reusable regex-backed detector for supplemental detection rules.
///
/// This is the simplest way for a caller to contribute a detector: one
/// pattern, one label. The pattern is compiled exactly once, here.
pub struct RegexDetector {
    name: String,
    label: String,
    regex: Regex,
}

impl RegexDetector {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        pattern: &str,
    ) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(pattern)
            .with_context(|| format!("failed to compile pattern for detector '{name}'"))?;
        Ok(Self { name, label: label.into(), regex })
    }
}

impl Detector for RegexDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn detect(&self, text: &str) -> Result<Vec<Entity>> {
        Ok(self
            .regex
            .find_iter(text)
            .map(|m| Entity::new(self.label.clone(), m.start(), m.end()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_with(name: &str, text: &str) -> Vec<Entity> {
        let detector = builtin_detectors()
            .into_iter()
            .find(|d| d.name() == name)
            .expect("unknown builtin detector");
        detector.detect(text).unwrap()
    }

    #[test]
    fn email_detector_finds_mailbox() {
        let entities = detect_with("email", "Contact: john.doe@example.com today");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "EMAIL");
        assert_eq!(&"Contact: john.doe@example.com today"[entities[0].start..entities[0].end],
                   "john.doe@example.com");
    }

    #[test]
    fn phone_detector_requires_separators() {
        assert_eq!(detect_with("phone", "Call 555-123-4567 now").len(), 1);
        assert_eq!(detect_with("phone", "Call (555) 123-4567 now").len(), 1);
        // Unpunctuated digit runs are left for upstream pattern catalogs.
        assert!(detect_with("phone", "card 4111111111111111").is_empty());
        assert!(detect_with("phone", "card 4111-1111-1111-1111").is_empty());
    }

    #[test]
    fn phone_detector_ignores_dashed_ssn() {
        assert!(detect_with("phone", "SSN: 123-45-6789").is_empty());
    }

    #[test]
    fn ipv4_detector_checks_octet_ranges() {
        assert_eq!(detect_with("ipv4", "host 192.168.1.100 down").len(), 1);
        assert!(detect_with("ipv4", "version 999.1.2.3").is_empty());
    }

    #[test]
    fn url_detector_finds_https_span() {
        let text = "see https://internal.example.com/path?q=1 for details";
        let entities = detect_with("url", text);
        assert_eq!(entities.len(), 1);
        assert_eq!(&text[entities[0].start..entities[0].end],
                   "https://internal.example.com/path?q=1");
    }

    #[test]
    fn regex_detector_compiles_once_and_detects() {
        let detector = RegexDetector::new("ticket", "TICKET_ID", r"TKT-\d{6}").unwrap();
        let entities = detector.detect("ref TKT-123456 closed").unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "TICKET_ID");
    }

    #[test]
    fn regex_detector_rejects_invalid_pattern() {
        assert!(RegexDetector::new("broken", "X", r"(unclosed").is_err());
    }
}
