// File: logsentinel-core/src/validators.rs
//! Programmatic validation functions for specific sensitive data types.
//!
//! These functions provide structural checks beyond what the regex crate can
//! express without lookaround, and are wired into pattern records via
//! [`PatternRecord::with_validator`](crate::pattern::PatternRecord::with_validator).
//! They help reduce false positives by rejecting values in reserved ranges.
//!
//! License: MIT OR Apache-2.0

/// Validates a US Social Security Number in "AAA-GG-SSSS" form.
///
/// Rejects the ranges the Social Security Administration never issues:
/// area 000, area 666, areas 900-999, group 00, and serial 0000.
///
/// # Arguments
///
/// * `ssn` - The SSN string slice to validate. Expected format "XXX-XX-XXXX".
pub fn is_valid_ssn(ssn: &str) -> bool {
    let mut parts = ssn.split('-');

    let (Some(area), Some(group), Some(serial), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if area.len() != 3 || group.len() != 2 || serial.len() != 4 {
        return false;
    }

    is_issuable(area, group, serial)
}

/// Validates a bare nine-digit US SSN (no separators), split 3/2/4.
///
/// Same reserved-range rules as [`is_valid_ssn`].
pub fn is_valid_ssn_digits(ssn: &str) -> bool {
    if ssn.len() != 9 || !ssn.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    is_issuable(&ssn[0..3], &ssn[3..5], &ssn[5..9])
}

fn is_issuable(area: &str, group: &str, serial: &str) -> bool {
    let Ok(area_num) = area.parse::<u16>() else { return false };
    let Ok(group_num) = group.parse::<u8>() else { return false };
    let Ok(serial_num) = serial.parse::<u16>() else { return false };

    let invalid_area = area_num == 0 || area_num == 666 || area_num >= 900;
    let invalid_group = group_num == 0;
    let invalid_serial = serial_num == 0;

    !(invalid_area || invalid_group || invalid_serial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_ssn() {
        assert!(is_valid_ssn("123-45-6789"));
        assert!(is_valid_ssn_digits("123456789"));
    }

    #[test]
    fn rejects_reserved_areas() {
        assert!(!is_valid_ssn("000-45-6789"));
        assert!(!is_valid_ssn("666-45-6789"));
        assert!(!is_valid_ssn("900-45-6789"));
        assert!(!is_valid_ssn("999-45-6789"));
        assert!(!is_valid_ssn_digits("666456789"));
    }

    #[test]
    fn rejects_reserved_group_and_serial() {
        assert!(!is_valid_ssn("123-00-6789"));
        assert!(!is_valid_ssn("123-45-0000"));
        assert!(!is_valid_ssn_digits("123006789"));
        assert!(!is_valid_ssn_digits("123450000"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!is_valid_ssn("12-345-6789"));
        assert!(!is_valid_ssn("123-45-678"));
        assert!(!is_valid_ssn("123-45-6789-0"));
        assert!(!is_valid_ssn("abc-de-fghi"));
        assert!(!is_valid_ssn_digits("12345678"));
        assert!(!is_valid_ssn_digits("12345678a"));
    }
}
