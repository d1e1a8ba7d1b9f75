/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Calculation input model representation

use super::errors::{ValidationError, ValidationResult};
use super::validation;
use serde::Serialize;
use std::fmt;

/// The four parameters the calculation needs, in prompting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Salary,
    Years,
    Match,
    Rate,
}

/// How a raw answer for a field is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    PositiveInteger,
    PositiveFloat,
}

impl Field {
    /// All fields in the order they are prompted for
    pub const ALL: [Field; 4] = [Field::Salary, Field::Years, Field::Match, Field::Rate];

    /// Interactive prompt shown when the field was not supplied as a flag
    pub fn prompt(self) -> &'static str {
        match self {
            Field::Salary => "Please enter your annual salary (Numbers Only - ie. 45000): ",
            Field::Years => {
                "Please enter the number of years until your retirement (Numbers Only - ie. 25): "
            }
            Field::Match => {
                "Please enter percentage your employer previously matched (Numbers Only - ie. 4.0): "
            }
            Field::Rate => {
                "Please enter the percentage the expected annual return on your 401k (Numbers Only - ie. 6.0): "
            }
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Salary | Field::Years => FieldKind::PositiveInteger,
            Field::Match | Field::Rate => FieldKind::PositiveFloat,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Salary => "salary",
            Field::Years => "years",
            Field::Match => "match",
            Field::Rate => "rate",
        };
        f.write_str(name)
    }
}

/// Fully validated calculation parameters
///
/// Every field is strictly positive, and the floats are finite. The annual
/// rate is used as a divisor by the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInput {
    salary: u64,
    years_remaining: u32,
    match_percent: f64,
    annual_rate_percent: f64,
}

impl CalculationInput {
    /// Build an input, checking every field against its predicate
    pub fn new(
        salary: u64,
        years_remaining: u32,
        match_percent: f64,
        annual_rate_percent: f64,
    ) -> ValidationResult<Self> {
        if salary == 0 {
            return Err(ValidationError::NotPositive(salary.to_string()));
        }
        if years_remaining == 0 {
            return Err(ValidationError::NotPositive(years_remaining.to_string()));
        }
        validation::check_positive_float(match_percent)?;
        validation::check_positive_float(annual_rate_percent)?;

        Ok(Self {
            salary,
            years_remaining,
            match_percent,
            annual_rate_percent,
        })
    }

    /// Annual gross salary in dollars
    pub fn salary(&self) -> u64 {
        self.salary
    }

    /// Whole years until retirement
    pub fn years_remaining(&self) -> u32 {
        self.years_remaining
    }

    /// Employer match as a percentage of salary (4.0 means 4%)
    pub fn match_percent(&self) -> f64 {
        self.match_percent
    }

    /// Expected annual return as a percentage (6.5 means 6.5%)
    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }
}

/// Parameters known before prompting, typically from command-line flags
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialInput {
    pub salary: Option<u64>,
    pub years_remaining: Option<u32>,
    pub match_percent: Option<f64>,
    pub annual_rate_percent: Option<f64>,
}

impl PartialInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_salary(mut self, salary: u64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_years(mut self, years: u32) -> Self {
        self.years_remaining = Some(years);
        self
    }

    pub fn with_match(mut self, match_percent: f64) -> Self {
        self.match_percent = Some(match_percent);
        self
    }

    pub fn with_rate(mut self, rate_percent: f64) -> Self {
        self.annual_rate_percent = Some(rate_percent);
        self
    }

    pub fn is_set(&self, field: Field) -> bool {
        match field {
            Field::Salary => self.salary.is_some(),
            Field::Years => self.years_remaining.is_some(),
            Field::Match => self.match_percent.is_some(),
            Field::Rate => self.annual_rate_percent.is_some(),
        }
    }

    /// Fields still to be collected, in prompting order
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.is_set(*field))
            .collect()
    }

    /// Convert into a validated input once every field is present
    pub fn into_complete(self) -> ValidationResult<CalculationInput> {
        let salary = self.salary.ok_or(ValidationError::Missing(Field::Salary))?;
        let years = self
            .years_remaining
            .ok_or(ValidationError::Missing(Field::Years))?;
        let match_percent = self
            .match_percent
            .ok_or(ValidationError::Missing(Field::Match))?;
        let rate = self
            .annual_rate_percent
            .ok_or(ValidationError::Missing(Field::Rate))?;
        CalculationInput::new(salary, years, match_percent, rate)
    }
}

impl From<CalculationInput> for PartialInput {
    fn from(input: CalculationInput) -> Self {
        Self {
            salary: Some(input.salary),
            years_remaining: Some(input.years_remaining),
            match_percent: Some(input.match_percent),
            annual_rate_percent: Some(input.annual_rate_percent),
        }
    }
}
