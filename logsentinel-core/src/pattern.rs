//! Pattern records: the atomic unit of rule-based redaction.
//!
//! A [`PatternRecord`] pairs a precompiled matcher with a replacement
//! template and optional programmatic validation. Compilation and template
//! validation happen exactly once, in the constructor; applying a record to
//! text is infallible after that point.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;

use crate::errors::RedactionError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Matches `$1` / `${1}` capture references inside a replacement template.
static CAPTURE_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{?(\d+)\}?").unwrap());

/// A single redaction pattern definition.
///
/// Immutable after construction. The matcher is compiled once and reused
/// across every `apply` call, which keeps redaction allocation-light and
/// safe to run from multiple threads.
#[derive(Debug, Clone)]
pub struct PatternRecord {
    /// Unique identifier for the pattern within its profile (e.g., "credit_card").
    pub name: String,
    /// The compiled matcher.
    pub regex: Regex,
    /// Replacement template; may reference capture groups as `${1}`.
    pub replacement: String,
    /// Human-readable description of what the pattern targets. Not used at
    /// runtime.
    pub description: String,
    /// Optional structural check applied to each match before substitution.
    validator: Option<fn(&str) -> bool>,
}

impl PatternRecord {
    /// Compiles and validates a new pattern record.
    ///
    /// Fails if the name is empty, the pattern exceeds
    /// [`MAX_PATTERN_LENGTH`], the pattern does not compile, or the
    /// replacement template references a capture group the matcher does not
    /// define.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, RedactionError> {
        Self::build(name, pattern, replacement, description, None)
    }

    /// Like [`PatternRecord::new`], with a programmatic validator.
    ///
    /// The validator sees the whole matched text and returns whether the
    /// match should be redacted. Used where a format has reserved ranges the
    /// matcher alone cannot express (e.g., SSN area numbers).
    pub fn with_validator(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
        description: impl Into<String>,
        validator: fn(&str) -> bool,
    ) -> Result<Self, RedactionError> {
        Self::build(name, pattern, replacement, description, Some(validator))
    }

    fn build(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
        description: impl Into<String>,
        validator: Option<fn(&str) -> bool>,
    ) -> Result<Self, RedactionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RedactionError::EmptyPatternName);
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(RedactionError::PatternLengthExceeded(
                name,
                pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
        }

        let regex = RegexBuilder::new(pattern)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build()
            .map_err(|e| RedactionError::RuleCompilation(name.clone(), e))?;

        let replacement = replacement.into();
        validate_replacement(&name, &regex, &replacement)?;

        Ok(Self {
            name,
            regex,
            replacement,
            description: description.into(),
            validator,
        })
    }

    /// Substitutes every match of the pattern in `text`.
    ///
    /// Returns `Cow::Borrowed` when nothing matched, so a miss costs no
    /// allocation. Matches rejected by the validator are passed through
    /// verbatim.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.validator {
            None => self.regex.replace_all(text, self.replacement.as_str()),
            Some(validator) => self.regex.replace_all(text, |caps: &Captures<'_>| {
                let matched = caps.get(0).map_or("", |m| m.as_str());
                if validator(matched) {
                    let mut expanded = String::new();
                    caps.expand(&self.replacement, &mut expanded);
                    expanded
                } else {
                    matched.to_string()
                }
            }),
        }
    }
}

/// Rejects replacement templates that reference capture groups the matcher
/// does not define. `captures_len` counts the implicit whole-match group 0.
fn validate_replacement(
    name: &str,
    regex: &Regex,
    replacement: &str,
) -> Result<(), RedactionError> {
    let available = regex.captures_len() - 1;
    for cap in CAPTURE_REF_RE.captures_iter(replacement) {
        if let Some(group_ref) = cap.get(1) {
            if let Ok(group) = group_ref.as_str().parse::<usize>() {
                if group > available {
                    return Err(RedactionError::InvalidCaptureReference {
                        name: name.to_string(),
                        group,
                        available,
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_substitutes_all_matches() {
        let record =
            PatternRecord::new("digits", r"\d+", "{{N}}", "digit runs").unwrap();
        assert_eq!(record.apply("a1b22c333"), "a{{N}}b{{N}}c{{N}}");
    }

    #[test]
    fn apply_borrows_on_miss() {
        let record = PatternRecord::new("digits", r"\d+", "{{N}}", "").unwrap();
        assert!(matches!(record.apply("no numbers"), Cow::Borrowed(_)));
    }

    #[test]
    fn capture_groups_expand_in_replacement() {
        let record = PatternRecord::new(
            "kv",
            r"(?i)(token)\s*=\s*(\w+)",
            "${1}={{HIDDEN}}",
            "",
        )
        .unwrap();
        assert_eq!(record.apply("Token = abc123"), "Token={{HIDDEN}}");
    }

    #[test]
    fn validator_rejects_matches() {
        fn only_even_length(s: &str) -> bool {
            s.len() % 2 == 0
        }
        let record = PatternRecord::with_validator(
            "even_digits",
            r"\d+",
            "{{N}}",
            "",
            only_even_length,
        )
        .unwrap();
        assert_eq!(record.apply("12 345 6789 0"), "{{N}} 345 {{N}} 0");
    }

    #[test]
    fn empty_name_is_fatal() {
        let err = PatternRecord::new("", r"x", "y", "").unwrap_err();
        assert!(matches!(err, RedactionError::EmptyPatternName));
    }

    #[test]
    fn invalid_pattern_is_fatal() {
        let err = PatternRecord::new("broken", r"(unclosed", "y", "").unwrap_err();
        assert!(matches!(err, RedactionError::RuleCompilation(name, _) if name == "broken"));
    }

    #[test]
    fn oversized_pattern_is_fatal() {
        let pattern = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = PatternRecord::new("huge", &pattern, "y", "").unwrap_err();
        assert!(matches!(err, RedactionError::PatternLengthExceeded(_, _, _)));
    }

    #[test]
    fn replacement_referencing_missing_group_is_fatal() {
        let err = PatternRecord::new("kv", r"(\w+)=\w+", "${2}", "").unwrap_err();
        assert!(matches!(
            err,
            RedactionError::InvalidCaptureReference { group: 2, available: 1, .. }
        ));
    }

    #[test]
    fn braced_and_bare_references_both_validate() {
        assert!(PatternRecord::new("a", r"(\w)", "$1", "").is_ok());
        assert!(PatternRecord::new("b", r"(\w)", "${1}", "").is_ok());
        assert!(PatternRecord::new("c", r"\w", "$1", "").is_err());
    }
}
