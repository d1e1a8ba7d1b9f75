/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Human-readable presentation of a benefit summary

pub mod currency;

pub use currency::format_usd;

use crate::benefits::{yearly_benefits, BenefitSummary};
use crate::input::CalculationInput;
use console::style;
use std::io::{self, Write};

/// xterm-256 index used for informational lines
const ORANGE: u8 = 208;

/// Renders summaries as the sentences printed to standard output
#[derive(Debug, Clone, Copy)]
pub struct Report {
    colored: bool,
}

impl Report {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Plain-text report, no escape codes
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// The match sentence
    pub fn match_line(summary: &BenefitSummary) -> String {
        format!(
            "With an annual salary of {}, your employer match would have been {} per year.",
            format_usd(summary.input.salary() as f64),
            format_usd(summary.match_amount)
        )
    }

    /// The total sentence
    pub fn total_line(summary: &BenefitSummary) -> String {
        format!(
            "With {} years remaining until retirement, and given a annual return of {}% for your retirment fund, you would have earned an additional {} in retirement savings.",
            summary.input.years_remaining(),
            summary.input.annual_rate_percent(),
            format_usd(summary.total_benefits)
        )
    }

    /// Full report, each sentence surrounded by blank lines
    pub fn render(&self, summary: &BenefitSummary) -> String {
        let mut out = String::from("\n");
        out.push_str(&self.info(&Self::match_line(summary)));
        out.push_str("\n\n");
        out.push_str(&self.info(&Self::total_line(summary)));
        out.push_str("\n\n");
        out
    }

    /// Write one line per contribution year to `writer`
    ///
    /// Rows are formatted as they are written, so the horizon does not bound
    /// memory. Stops at the first write error.
    pub fn write_breakdown<W: Write>(
        &self,
        writer: &mut W,
        input: &CalculationInput,
    ) -> io::Result<()> {
        writeln!(writer, "{}", self.info("Breakdown by contribution year:"))?;
        for benefit in yearly_benefits(input) {
            writeln!(
                writer,
                "  {:>3} years to grow: {} grows to {}",
                benefit.years_to_grow,
                format_usd(benefit.contribution),
                format_usd(benefit.future_value)
            )?;
        }
        writeln!(writer)
    }

    fn info(&self, line: &str) -> String {
        if self.colored {
            style(line).color256(ORANGE).bold().to_string()
        } else {
            line.to_string()
        }
    }
}

/// Bold bright red, for fatal errors on standard error
pub fn error_text(message: &str) -> String {
    if console::colors_enabled_stderr() {
        style(message).red().bright().bold().for_stderr().to_string()
    } else {
        message.to_string()
    }
}

/// Informational text on standard error
pub fn hint_text(message: &str) -> String {
    if console::colors_enabled_stderr() {
        style(message)
            .color256(ORANGE)
            .bold()
            .for_stderr()
            .to_string()
    } else {
        message.to_string()
    }
}
