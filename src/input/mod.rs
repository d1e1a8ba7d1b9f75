/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Calculation input handling
//!
//! Parameters arrive either pre-supplied (command-line flags, collected into a
//! [`PartialInput`]) or interactively. The [`Resolver`] fills in whatever is
//! missing and yields a validated [`CalculationInput`].

pub mod config;
pub mod errors;
pub mod model;
pub mod resolver;
pub mod validation;

pub use config::ResolverConfig;
pub use errors::{ResolveError, ValidationError};
pub use model::{CalculationInput, Field, FieldKind, PartialInput};
pub use resolver::Resolver;
