/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Constants used in benefit calculations

/// Numerator of the rule of 72 doubling-period estimate
pub const RULE_OF_72: f64 = 72.0;

/// Percentage points per whole
pub const PERCENT: f64 = 100.0;

/// Cents per dollar
pub const CENTS_PER_DOLLAR: f64 = 100.0;
