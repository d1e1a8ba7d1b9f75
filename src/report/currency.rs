/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! US dollar formatting

use crate::utils::constants::CENTS_PER_DOLLAR;

/// Format `value` as US dollars, e.g. `$1,234.50` or `-$3.00`
///
/// Always exactly two fractional digits. The exact binary value is rounded,
/// so `2.675` (stored just below) gives `$2.67`. Exact half-cent ties round
/// away from zero.
pub fn format_usd(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };
    if value.is_infinite() {
        return format!("{sign}$∞");
    }

    let magnitude = value.abs();
    let digits = fixed_two(magnitude);

    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    if whole == "0" && fraction == "00" {
        return "$0.00".to_string();
    }
    format!("{sign}${}.{fraction}", group_thousands(whole))
}

/// Two-decimal rendering of a non-negative finite value
///
/// `{:.2}` rounds the exact value but sends exact ties to even, so those are
/// bumped up to the next cent first.
fn fixed_two(magnitude: f64) -> String {
    let cents = magnitude * CENTS_PER_DOLLAR;
    let exact = magnitude.mul_add(CENTS_PER_DOLLAR, -cents) == 0.0;
    if exact && cents.fract() == 0.5 {
        format!("{:.2}", (cents + 0.5) / CENTS_PER_DOLLAR)
    } else {
        format!("{magnitude:.2}")
    }
}

/// Insert a comma between every group of three digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
