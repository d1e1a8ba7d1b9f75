/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Rule-of-72 accumulation of employer match contributions
//!
//! Each year's contribution is treated as its own cohort: the contribution
//! made with `y` years left compounds for `y` years, doubling every
//! `72 / rate` years. The total is the discrete sum over all cohorts.

use crate::input::CalculationInput;
use crate::utils::{constants, percent_to_fraction};
use log::{debug, trace};
use serde::Serialize;

/// Future value of a single contribution-year cohort
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyBenefit {
    /// Years this cohort compounds before retirement
    pub years_to_grow: u32,
    /// Nominal employer contribution for the year
    pub contribution: f64,
    /// Estimated value of the contribution at retirement
    pub future_value: f64,
}

/// Nominal annual employer contribution: `salary * match / 100`
pub fn match_amount(input: &CalculationInput) -> f64 {
    input.salary() as f64 * percent_to_fraction(input.match_percent())
}

/// Rule-of-72 doubling period in years for a percentage rate
///
/// A zero rate yields infinity. Validated inputs never carry one.
pub fn years_to_double(annual_rate_percent: f64) -> f64 {
    constants::RULE_OF_72 / annual_rate_percent
}

/// Value of `contribution` after compounding for `years` years
pub fn yearly_benefit(contribution: f64, years_to_double: f64, years: u32) -> f64 {
    let exponent = f64::from(years) / years_to_double;
    contribution * 2f64.powf(exponent)
}

/// Per-cohort terms, from `years_remaining` down to 1
///
/// Terms are produced lazily, one per cohort, so a long horizon costs no
/// memory until the caller collects.
pub fn yearly_benefits(input: &CalculationInput) -> impl Iterator<Item = YearlyBenefit> {
    let contribution = match_amount(input);
    let doubling = years_to_double(input.annual_rate_percent());
    debug!(
        "Match amount {:.2}, doubling every {:.4} years over {} years",
        contribution,
        doubling,
        input.years_remaining()
    );

    (1..=input.years_remaining())
        .rev()
        .map(move |years_to_grow| {
            let future_value = yearly_benefit(contribution, doubling, years_to_grow);
            trace!("Cohort compounding {years_to_grow} years: {future_value:.2}");
            YearlyBenefit {
                years_to_grow,
                contribution,
                future_value,
            }
        })
}

/// Estimated cumulative future value of all matched contributions
pub fn total_benefits(input: &CalculationInput) -> f64 {
    let total = accumulate(
        match_amount(input),
        years_to_double(input.annual_rate_percent()),
        input.years_remaining(),
    );
    debug!("Total benefits {total:.2}");
    total
}

/// Sum the cohort values for `years_remaining` down to 1
///
/// Returns 0 when `years_remaining` is 0.
pub fn accumulate(contribution: f64, years_to_double: f64, years_remaining: u32) -> f64 {
    let mut total = 0.0;
    for years in (1..=years_remaining).rev() {
        total += yearly_benefit(contribution, years_to_double, years);
    }
    total
}
