/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions for benefit calculations
//!
//! This module provides the constants and unit conversions shared by the
//! accumulator and the report.

pub mod constants;
pub mod conversions;

pub use conversions::percent_to_fraction;
