/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Benefit accumulation
//!
//! This module estimates what an employer's matching contributions are worth
//! at retirement, using the rule of 72 to approximate compounding.

pub mod accumulator;
pub mod summary;

pub use accumulator::{
    accumulate, match_amount, total_benefits, yearly_benefit, yearly_benefits, years_to_double,
    YearlyBenefit,
};
pub use summary::{BenefitSummary, WithBreakdown};
