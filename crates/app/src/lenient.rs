//! Forgiving numeric parsing for loosely typed client input.
//!
//! Browser clients send query strings and JSON payloads where numbers may show
//! up as strings, floats, or junk. These helpers read the leading integer the
//! way a browser `parseInt` would and leave the fallback policy to the caller.

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Returns `None` when no digits are present or the value
/// does not fit in an `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..)?),
        Some(b'+') => (false, trimmed.get(1..)?),
        _ => (false, trimmed),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(index, _)| index);

    let magnitude = digits.get(..end).filter(|d| !d.is_empty())?;
    let value = magnitude.parse::<i64>().ok()?;

    Some(if negative { -value } else { value })
}

/// Truncate a JSON number toward zero, as integer parsing of its decimal
/// rendering would.
pub fn truncate_float(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }

    parse_int_prefix(&format!("{value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_int_prefix("12"), Some(12));
        assert_eq!(parse_int_prefix("  7"), Some(7));
        assert_eq!(parse_int_prefix("+3"), Some(3));
        assert_eq!(parse_int_prefix("-5"), Some(-5));
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_int_prefix("2abc"), Some(2));
        assert_eq!(parse_int_prefix("2.9"), Some(2));
        assert_eq!(parse_int_prefix("10 items"), Some(10));
    }

    #[test]
    fn rejects_input_without_leading_digits() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(".5"), None);
    }

    #[test]
    fn rejects_overflowing_values() {
        assert_eq!(parse_int_prefix("99999999999999999999"), None);
    }

    #[test]
    fn truncates_floats_toward_zero() {
        assert_eq!(truncate_float(2.9), Some(2));
        assert_eq!(truncate_float(-1.5), Some(-1));
        assert_eq!(truncate_float(0.4), Some(0));
        assert_eq!(truncate_float(f64::NAN), None);
        assert_eq!(truncate_float(f64::INFINITY), None);
    }
}
