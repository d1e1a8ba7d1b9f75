/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Result of a single benefit calculation

use super::accumulator::{match_amount, total_benefits, yearly_benefits};
use crate::input::CalculationInput;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Inputs together with the figures computed from them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitSummary {
    pub input: CalculationInput,
    /// Employer contribution per year
    pub match_amount: f64,
    /// Estimated value of all contributions at retirement
    pub total_benefits: f64,
}

impl BenefitSummary {
    /// Compute the summary for `input`
    pub fn compute(input: CalculationInput) -> Self {
        Self {
            input,
            match_amount: match_amount(&input),
            total_benefits: total_benefits(&input),
        }
    }

    /// Serializable view that adds a `yearly` list of cohort terms
    pub fn with_breakdown(&self) -> WithBreakdown<'_> {
        WithBreakdown(self)
    }
}

/// A summary serialized with its per-cohort terms
///
/// Terms are generated while serializing and never held in memory.
#[derive(Debug, Clone, Copy)]
pub struct WithBreakdown<'a>(&'a BenefitSummary);

impl Serialize for WithBreakdown<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let summary = self.0;
        let mut state = serializer.serialize_struct("BenefitSummary", 4)?;
        state.serialize_field("input", &summary.input)?;
        state.serialize_field("match_amount", &summary.match_amount)?;
        state.serialize_field("total_benefits", &summary.total_benefits)?;
        state.serialize_field("yearly", &Cohorts(&summary.input))?;
        state.end()
    }
}

struct Cohorts<'a>(&'a CalculationInput);

impl Serialize for Cohorts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(yearly_benefits(self.0))
    }
}
