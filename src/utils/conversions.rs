/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Unit conversion utilities

use super::constants;

/// Convert a percentage (4.0 means 4%) to a fraction (0.04)
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / constants::PERCENT
}
