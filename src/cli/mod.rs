/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Flags are parsed once into an immutable [`PartialInput`] and a
//! [`RunConfig`], then threaded explicitly through resolution, computation
//! and reporting.

use crate::benefits::BenefitSummary;
use crate::input::validation::{percent_arg, salary_arg, years_arg};
use crate::input::{PartialInput, Resolver, ResolverConfig};
use crate::report::Report;
use anyhow::Context;
use clap::{ArgAction, Parser};
use log::info;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Delay before the process exits after a fatal error
pub const DEFAULT_EXIT_DELAY_MS: u64 = 2000;

#[derive(Parser, Debug, Clone)]
#[command(name = "calc-benefits", version, disable_version_flag = true)]
#[command(about = "Estimate what your employer's retirement match is worth at retirement.")]
#[command(override_usage = "calc-benefits [options]")]
pub struct Cli {
    /// annual salary - digits only (ie. 45000)
    #[arg(short, long, value_name = "salary", value_parser = salary_arg)]
    pub salary: Option<u64>,

    /// Years Left Until Retirement - whole years only (ie. 25)
    #[arg(short, long, value_name = "years", value_parser = years_arg)]
    pub years: Option<u32>,

    /// Percentage of income usually matched - digit only (ie. 4)
    #[arg(short, long = "match", value_name = "match", value_parser = percent_arg)]
    pub match_percent: Option<f64>,

    /// Estimated Annual Return Rate of Retirement Fund - numbers only (ie. 6.5)
    #[arg(short, long, value_name = "rate", value_parser = percent_arg)]
    pub rate: Option<f64>,

    /// Print the summary as JSON instead of sentences
    #[arg(long)]
    pub json: bool,

    /// Also list the value of each contribution year
    #[arg(long)]
    pub breakdown: bool,

    /// Milliseconds to wait before exiting after an error
    #[arg(long, value_name = "ms", default_value_t = DEFAULT_EXIT_DELAY_MS)]
    pub exit_delay_ms: u64,

    /// output the version number
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// Output format for the computed summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one program invocation
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub exit_delay: Duration,
    pub format: OutputFormat,
    pub breakdown: bool,
    /// Style the text report with terminal colors
    pub colored: bool,
    pub resolver: ResolverConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            exit_delay: Duration::from_millis(DEFAULT_EXIT_DELAY_MS),
            format: OutputFormat::Text,
            breakdown: false,
            colored: console::colors_enabled(),
            resolver: ResolverConfig::default(),
        }
    }
}

impl Cli {
    /// Values supplied on the command line
    ///
    /// A zero flag counts as not supplied, so that field is prompted for.
    pub fn partial_input(&self) -> PartialInput {
        PartialInput {
            salary: self.salary.filter(|v| *v != 0),
            years_remaining: self.years.filter(|v| *v != 0),
            match_percent: self.match_percent.filter(|v| *v != 0.0),
            annual_rate_percent: self.rate.filter(|v| *v != 0.0),
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            exit_delay: Duration::from_millis(self.exit_delay_ms),
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            breakdown: self.breakdown,
            ..RunConfig::default()
        }
    }
}

/// Resolve missing inputs from `reader`, compute, and write the report to `writer`
///
/// Prompts and the report share `writer`, as they share the terminal.
pub fn run<R: BufRead, W: Write>(
    partial: &PartialInput,
    config: &RunConfig,
    reader: R,
    mut writer: W,
) -> anyhow::Result<BenefitSummary> {
    let input = {
        let mut resolver = Resolver::with_config(reader, &mut writer, config.resolver.clone());
        resolver
            .resolve(partial)
            .context("Could not collect the calculation inputs")?
    };
    info!(
        "Calculating for salary {}, {} years, {}% match, {}% return",
        input.salary(),
        input.years_remaining(),
        input.match_percent(),
        input.annual_rate_percent()
    );

    let summary = BenefitSummary::compute(input);

    match config.format {
        OutputFormat::Text => {
            let report = Report::new(config.colored);
            write!(writer, "{}", report.render(&summary))?;
            if config.breakdown {
                report
                    .write_breakdown(&mut writer, &summary.input)
                    .context("Could not write the breakdown")?;
            }
        }
        OutputFormat::Json => {
            let written = if config.breakdown {
                serde_json::to_writer_pretty(&mut writer, &summary.with_breakdown())
            } else {
                serde_json::to_writer_pretty(&mut writer, &summary)
            };
            written.context("Could not serialize the summary")?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    Ok(summary)
}
