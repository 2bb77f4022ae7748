//! Permissive input coercion and the small arithmetic helpers shared by the
//! calculator and the reference oracle.
//! Policy: never reject input. Anything that is not a number becomes 0.

use super::types::{Grams, Percent};

pub const PERCENT_SCALE: f64 = 100.0;

/// Parses the longest numeric prefix of `text`, or returns 0.
///
/// Leading whitespace and byte-order marks are skipped, trailing garbage is
/// ignored (`"12abc"` is 12). Empty text, text without a numeric prefix, NaN
/// and `-0` all give `0.0`.
pub fn coerce_number(text: &str) -> f64 {
    let text = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let prefix = numeric_prefix(text);
    if prefix.is_empty() {
        return 0.0;
    }
    match prefix.parse::<f64>() {
        Ok(v) if v.is_nan() || v == 0.0 => 0.0,
        Ok(v) => v,
        Err(_) => 0.0,
    }
}

/// `[+-]?(Infinity | digits[.digits] | .digits)([eE][+-]?digits)?`
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return &s[..i + "Infinity".len()];
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    // exponent only counts when at least one digit follows
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    &s[..i]
}

/// Weight bought outside the scheme: `max(0, total - reserved)`.
#[inline]
pub fn regular_grams(total: Grams, reserved: Grams) -> Grams {
    (total - reserved).max(0.0)
}

/// `(percent / 100) * base`, in that operand order.
#[inline]
pub fn percent_of(percent: Percent, base: f64) -> f64 {
    (percent / PERCENT_SCALE) * base
}

// -------------------------
// TESTS
// -------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_coerce_plain_numbers() {
        assert_eq!(coerce_number("6000"), 6000.0);
        assert_eq!(coerce_number("7.5"), 7.5);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number("+2.25"), 2.25);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("5."), 5.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("2.5E-1"), 0.25);
    }

    #[test]
    fn t_coerce_invalid_is_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("."), 0.0);
        assert_eq!(coerce_number("-"), 0.0);
        assert_eq!(coerce_number("e5"), 0.0);
    }

    #[test]
    fn t_coerce_prefix_and_whitespace() {
        assert_eq!(coerce_number("  7.5"), 7.5);
        assert_eq!(coerce_number("12abc"), 12.0);
        assert_eq!(coerce_number("10g"), 10.0);
        assert_eq!(coerce_number("3e"), 3.0);
        assert_eq!(coerce_number("3e+"), 3.0);
        assert_eq!(coerce_number("1,000"), 1.0);
    }

    #[test]
    fn t_coerce_skips_byte_order_mark() {
        assert_eq!(coerce_number("\u{feff}7"), 7.0);
        assert_eq!(coerce_number(" \u{feff} 7.5kg"), 7.5);
        assert_eq!(coerce_number("\u{feff}"), 0.0);
        assert_eq!(coerce_number("\u{a0}12"), 12.0);
    }

    #[test]
    fn t_coerce_negative_zero_and_infinity() {
        let z = coerce_number("-0");
        assert_eq!(z, 0.0);
        assert!(z.is_sign_positive());
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinityx"), f64::NEG_INFINITY);
        assert_eq!(coerce_number("inf"), 0.0);
    }

    #[test]
    fn t_regular_grams_clamp() {
        assert_eq!(regular_grams(10.0, 4.0), 6.0);
        assert_eq!(regular_grams(4.0, 10.0), 0.0);
        assert_eq!(regular_grams(5.0, -1.0), 6.0);
        assert_eq!(regular_grams(0.0, 0.0), 0.0);
    }

    #[test]
    fn t_percent_of() {
        assert_eq!(percent_of(10.0, 6000.0), 600.0);
        assert_eq!(percent_of(0.0, 6000.0), 0.0);
        assert_eq!(percent_of(100.0, 42.0), 42.0);
    }
}
