/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Parse-and-positivity predicates for raw field values
//!
//! The same predicates back the interactive prompts and the clap value
//! parsers, so a flag value and a typed answer are held to one rule. The
//! one difference: a zero flag parses, and counts as not supplied.

use super::errors::{ValidationError, ValidationResult};
use std::num::{IntErrorKind, ParseIntError};

/// Parse a strictly positive whole number
pub fn parse_positive_int(raw: &str) -> ValidationResult<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if let Some(digits) = trimmed.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotPositive(trimmed.to_string()));
        }
    }

    let value: u64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => ValidationError::OutOfRange(trimmed.to_string()),
        _ => ValidationError::NotAnInteger(trimmed.to_string()),
    })?;
    if value == 0 {
        return Err(ValidationError::NotPositive(trimmed.to_string()));
    }
    Ok(value)
}

/// Parse a strictly positive number of whole years
pub fn parse_years(raw: &str) -> ValidationResult<u32> {
    let value = parse_positive_int(raw)?;
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange(raw.trim().to_string()))
}

/// Parse a strictly positive, finite percentage
pub fn parse_positive_float(raw: &str) -> ValidationResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    check_positive_float(value).map_err(|err| match err {
        ValidationError::NotFinite(_) => ValidationError::NotFinite(trimmed.to_string()),
        _ => ValidationError::NotPositive(trimmed.to_string()),
    })
}

/// Check an already-parsed float: finite and greater than zero
pub fn check_positive_float(value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(value.to_string()));
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive(value.to_string()));
    }
    Ok(value)
}

/// clap value parser for `--salary`
///
/// Zero is accepted and later treated as not supplied.
pub fn salary_arg(raw: &str) -> Result<u64, String> {
    zero_or(raw, parse_positive_int)
}

/// clap value parser for `--years`
pub fn years_arg(raw: &str) -> Result<u32, String> {
    zero_or(raw, parse_years)
}

/// clap value parser for `--match` and `--rate`
pub fn percent_arg(raw: &str) -> Result<f64, String> {
    zero_or(raw, parse_positive_float)
}

/// Run `parse`, letting a literal zero through as `T::default()`
fn zero_or<T, F>(raw: &str, parse: F) -> Result<T, String>
where
    T: Default,
    F: Fn(&str) -> ValidationResult<T>,
{
    match parse(raw) {
        Err(ValidationError::NotPositive(_)) if is_zero(raw) => Ok(T::default()),
        other => other.map_err(|e| e.to_string()),
    }
}

fn is_zero(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(|value| value == 0.0)
}
