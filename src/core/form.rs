// src/core/form.rs
//
// Text-field front end for the two engines: fields are converted the way a browser form's
// `Number(...)` would, the engine runs, and the outcome or the error message is rendered as text.

use log::debug;

use crate::core::error::InvalidArgument;
use crate::integer_math::gcd::{GcdOutcome, GCD};
use crate::lamps::{simulate, LampArray};

/// Rendered in place of a value when the GCD has no result.
pub const NO_RESULT: &str = "undefined";

/// Converts one text field to a number.
///
/// Surrounding whitespace is ignored, an empty field is 0, `Infinity` and `0x`/`0o`/`0b`
/// prefixed literals are understood, and anything else that is not a decimal literal is NaN.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix_literal = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .iter()
        .find_map(|&(prefix, radix)| trimmed.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_literal {
        return u64::from_str_radix(digits, radix)
            .map(|value| value as f64)
            .unwrap_or(f64::NAN);
    }

    // `f64::from_str` also takes "inf" and "nan" spellings; a form field does not.
    if !trimmed.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Trims the field, splits it on commas and converts every piece.
pub fn parse_number_list(text: &str) -> Vec<f64> {
    text.trim().split(',').map(parse_number).collect()
}

pub fn run_gcd(count_text: &str, array_text: &str) -> Result<GcdOutcome, InvalidArgument> {
    let sequence = parse_number_list(array_text);
    let count = parse_number(count_text);
    debug!("GCD form submitted: count={}, sequence={:?}", count, sequence);
    GCD::find_gcd(count, &sequence)
}

pub fn run_lamps(array_text: &str, days_text: &str) -> Result<LampArray, InvalidArgument> {
    let lamps = parse_number_list(array_text);
    let days = parse_number(days_text);
    debug!("Lamps form submitted: lamps={:?}, days={}", lamps, days);
    simulate(&lamps, days)
}

pub fn render_gcd(outcome: &GcdOutcome) -> String {
    match outcome {
        Some(value) => value.to_string(),
        None => NO_RESULT.to_string(),
    }
}

/// The text shown after submitting the GCD form: the result, or the error's message.
pub fn submit_gcd(count_text: &str, array_text: &str) -> String {
    match run_gcd(count_text, array_text) {
        Ok(outcome) => render_gcd(&outcome),
        Err(e) => e.message,
    }
}

/// The text shown after submitting the lamps form: lamps joined with ", ", or the error's message.
pub fn submit_lamps(array_text: &str, days_text: &str) -> String {
    match run_lamps(array_text, days_text) {
        Ok(lamps) => lamps.to_string(),
        Err(e) => e.message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_decimal() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("  -7 "), -7.0);
        assert_eq!(parse_number("+3"), 3.0);
        assert_eq!(parse_number("2.5"), 2.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_number_empty_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
    }

    #[test]
    fn test_parse_number_special_forms() {
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_number_garbage_is_nan() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("12abc").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("0xZZ").is_nan());
        assert!(parse_number("1 2").is_nan());
    }

    #[test]
    fn test_parse_number_list() {
        assert_eq!(parse_number_list(" 12, 8 ,30 "), vec![12.0, 8.0, 30.0]);
        assert_eq!(parse_number_list("1,,2"), vec![1.0, 0.0, 2.0]);
        assert_eq!(parse_number_list(""), vec![0.0]);
    }

    #[test]
    fn test_render_gcd() {
        assert_eq!(render_gcd(&Some(4)), "4");
        assert_eq!(render_gcd(&None), NO_RESULT);
    }
}
