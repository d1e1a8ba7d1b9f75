/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # calc-benefits
//!
//! Estimates the cumulative value of an employer's retirement-plan matching
//! contributions over the remaining working years, using the rule of 72 to
//! approximate compounding growth.
//!
//! ```
//! use calc_benefits::{total_benefits, CalculationInput};
//!
//! let input = CalculationInput::new(45000, 1, 4.0, 6.0).unwrap();
//! let total = total_benefits(&input);
//! assert!((total - 1907.03).abs() < 0.01);
//! ```

pub mod benefits;
pub mod cli;
pub mod input;
pub mod report;
pub mod utils;

pub use benefits::{total_benefits, BenefitSummary};
pub use input::{CalculationInput, PartialInput};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_package() {
        assert_eq!(VERSION, "0.0.1");
    }
}
