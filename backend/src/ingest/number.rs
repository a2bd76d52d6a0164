//! Lenient numeric coercion for uploaded cells.

/// Read a cell as a number, never failing.
///
/// Surrounding whitespace is ignored and the longest leading decimal literal
/// is used (`"12kg"` reads as `12`, `"3.5e2 h"` as `350`). Cells with no
/// leading number, empty cells and values that overflow to infinity all read
/// as `0`.
pub fn parse_lenient_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return 0.0;
    }
    match trimmed[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Byte length of the decimal literal at the start of `s`, or 0 if none.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // exponent only counts when followed by at least one digit
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
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

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_lenient_number("42"), 42.0);
        assert_eq!(parse_lenient_number("-3"), -3.0);
        assert_eq!(parse_lenient_number("+7.25"), 7.25);
        assert_eq!(parse_lenient_number("0.5"), 0.5);
        assert_eq!(parse_lenient_number(".5"), 0.5);
        assert_eq!(parse_lenient_number("5."), 5.0);
        assert_eq!(parse_lenient_number("1e3"), 1000.0);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse_lenient_number("  42.5 \t"), 42.5);
        assert_eq!(parse_lenient_number("\n12\r"), 12.0);
    }

    #[test]
    fn test_invalid_input_reads_as_zero() {
        assert_eq!(parse_lenient_number("abc"), 0.0);
        assert_eq!(parse_lenient_number(""), 0.0);
        assert_eq!(parse_lenient_number("   "), 0.0);
        assert_eq!(parse_lenient_number("-"), 0.0);
        assert_eq!(parse_lenient_number("."), 0.0);
        assert_eq!(parse_lenient_number("NaN"), 0.0);
        assert_eq!(parse_lenient_number("inf"), 0.0);
        assert_eq!(parse_lenient_number("1e999"), 0.0);
    }

    #[test]
    fn test_leading_number_is_kept() {
        assert_eq!(parse_lenient_number("12kg"), 12.0);
        assert_eq!(parse_lenient_number("3.5e2 hours"), 350.0);
        assert_eq!(parse_lenient_number("8e"), 8.0);
        assert_eq!(parse_lenient_number("1,000"), 1.0);
    }

    proptest! {
        #[test]
        fn prop_never_panics_and_is_finite(s in ".*") {
            let value = parse_lenient_number(&s);
            prop_assert!(value.is_finite());
        }

        #[test]
        fn prop_display_roundtrip(v in -1.0e12f64..1.0e12f64) {
            prop_assert_eq!(parse_lenient_number(&v.to_string()), v);
        }
    }
}
