/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Interactive resolution of missing calculation parameters

use super::config::ResolverConfig;
use super::errors::{ResolveError, Result, ValidationError, ValidationResult};
use super::model::{CalculationInput, Field, PartialInput};
use super::validation;
use log::{debug, trace};
use std::io::{BufRead, Write};

/// Prompts on `writer` and reads answers from `reader` for any missing field
pub struct Resolver<R, W> {
    reader: R,
    writer: W,
    config: ResolverConfig,
}

impl<R: BufRead, W: Write> Resolver<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(reader, writer, ResolverConfig::default())
    }

    pub fn with_config(reader: R, writer: W, config: ResolverConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Produce a complete input from `partial`, prompting for each missing field
    ///
    /// Pre-supplied values are used unmodified. Each missing field is asked
    /// once, in order, and re-asked until its answer passes validation.
    pub fn resolve(&mut self, partial: &PartialInput) -> Result<CalculationInput> {
        let mut resolved = *partial;
        for field in partial.missing_fields() {
            debug!("Prompting for {} ({:?})", field, field.kind());
            match field {
                Field::Salary => {
                    resolved.salary = Some(self.ask(field, validation::parse_positive_int)?)
                }
                Field::Years => {
                    resolved.years_remaining = Some(self.ask(field, validation::parse_years)?)
                }
                Field::Match => {
                    resolved.match_percent =
                        Some(self.ask(field, validation::parse_positive_float)?)
                }
                Field::Rate => {
                    resolved.annual_rate_percent =
                        Some(self.ask(field, validation::parse_positive_float)?)
                }
            }
        }

        Ok(resolved.into_complete()?)
    }

    /// Consume the resolver, returning the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn ask<T, F>(&mut self, field: Field, parse: F) -> Result<T>
    where
        F: Fn(&str) -> ValidationResult<T>,
    {
        let mut buf = Vec::new();
        loop {
            write!(self.writer, "{}", field.prompt())?;
            self.writer.flush()?;

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(ResolveError::InputClosed(field));
            }

            let parsed = std::str::from_utf8(&buf)
                .map_err(|_| ValidationError::NotUtf8)
                .and_then(&parse);
            match parsed {
                Ok(value) => {
                    trace!("Accepted {} = {:?}", field, String::from_utf8_lossy(&buf).trim());
                    return Ok(value);
                }
                Err(err) => {
                    debug!("Rejected {} answer: {}", field, err);
                    writeln!(self.writer, "{}", self.config.invalid_message)?;
                }
            }
        }
    }
}
