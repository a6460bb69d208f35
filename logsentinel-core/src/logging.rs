// logsentinel-core/src/logging.rs
//! PII-safe diagnostics helpers.
//!
//! Warnings and debug traces emitted while sanitizing must not themselves
//! leak the text being sanitized. By default only lengths are logged; the
//! raw content can be opted into for local debugging via the
//! `LOGSENTINEL_ALLOW_DEBUG_PII` environment variable.

use once_cell::sync::Lazy;

/// Initialized once to determine whether raw PII is allowed in debug logs.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("LOGSENTINEL_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// A log-safe stand-in for sensitive content: only the length is revealed.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

/// Content suitable for debug logging: raw only when explicitly opted in.
pub fn loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }
}
