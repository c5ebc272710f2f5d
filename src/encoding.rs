//! Decimal digit encoding for the azimuth and elevation fields.
//!
//! The controller expects each angle as three ASCII digits, most significant
//! first, holding the integer part of the angle in degrees (`275.9` becomes
//! `"275"`). Fractions are truncated, never rounded.
//!
//! ## Functions
//!
//! - [`truncate_degrees`]: turns a floating point angle into a field value
//! - [`encode_digits`]: writes a field value as three ASCII digits
//! - [`decode_digits`]: parses three ASCII digits back into a field value
//!
//! ## Limits
//!
//! A three digit field cannot carry values above 999. Decomposing such a value
//! digit by digit would silently drop the thousands, so [`truncate_degrees`]
//! saturates instead: anything at or above 999 becomes 999 and negative or NaN
//! angles become 0.

use crate::consts::{MAX_FIELD_VALUE, POSITION_DIGITS};

/// Truncates an angle in degrees to the integer value stored in a digit field.
///
/// # Returns
/// The integer part of `degrees`, saturated to `0..=999`.
pub fn truncate_degrees(degrees: f64) -> u16 {
    if degrees.is_nan() || degrees <= 0.0 {
        return 0;
    }
    let whole = libm::trunc(degrees);
    if whole >= MAX_FIELD_VALUE as f64 {
        MAX_FIELD_VALUE
    } else {
        whole as u16
    }
}

/// Encodes `value` into three ASCII digits, most significant first.
///
/// Digits are extracted least significant first with `% 10` and `/ 10`.
/// Only the three lowest digits are kept; callers pass values produced by
/// [`truncate_degrees`], which never exceed 999.
pub fn encode_digits(value: u16) -> [u8; POSITION_DIGITS] {
    let mut out = [b'0'; POSITION_DIGITS];
    let mut rest = value;
    for i in 0..POSITION_DIGITS {
        out[POSITION_DIGITS - 1 - i] = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
    out
}

/// Decodes three ASCII digits back into an integer.
///
/// Returns `None` if the slice is not exactly three bytes long or holds a
/// byte outside `'0'..='9'`.
pub fn decode_digits(field: &[u8]) -> Option<u16> {
    if field.len() != POSITION_DIGITS {
        return None;
    }
    field.iter().try_fold(0u16, |acc, &b| {
        if b.is_ascii_digit() {
            Some(acc * 10 + u16::from(b - b'0'))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_does_not_round() {
        assert_eq!(truncate_degrees(275.9), 275);
        assert_eq!(truncate_degrees(42.3), 42);
        assert_eq!(truncate_degrees(179.999), 179);
        assert_eq!(truncate_degrees(0.99), 0);
    }

    #[test]
    fn test_truncate_saturates_out_of_range() {
        assert_eq!(truncate_degrees(-12.5), 0);
        assert_eq!(truncate_degrees(f64::NAN), 0);
        assert_eq!(truncate_degrees(1234.0), 999);
        assert_eq!(truncate_degrees(f64::INFINITY), 999);
    }

    #[test]
    fn test_encode_zero_pads() {
        assert_eq!(&encode_digits(0), b"000");
        assert_eq!(&encode_digits(7), b"007");
        assert_eq!(&encode_digits(42), b"042");
        assert_eq!(&encode_digits(360), b"360");
    }

    #[test]
    fn test_decode_rejects_non_digits() {
        assert_eq!(decode_digits(b"275"), Some(275));
        assert_eq!(decode_digits(b"2 5"), None);
        assert_eq!(decode_digits(b"27"), None);
        assert_eq!(decode_digits(b"2750"), None);
    }

    #[test]
    fn test_whole_domain_round_trips_up_to_truncation() {
        // Quarter degree steps over [0, 360) exercise both whole and fractional inputs.
        for step in 0..(360 * 4) {
            let degrees = step as f64 * 0.25;
            let digits = encode_digits(truncate_degrees(degrees));
            assert_eq!(decode_digits(&digits), Some(libm::trunc(degrees) as u16));
        }
    }
}
