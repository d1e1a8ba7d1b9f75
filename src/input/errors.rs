/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for input validation and resolution

use super::model::Field;
use std::io;
use thiserror::Error;

/// Reasons a single raw value fails its field predicate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("value is empty")]
    Empty,

    #[error("value is not valid UTF-8")]
    NotUtf8,

    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a finite number")]
    NotFinite(String),

    #[error("'{0}' must be greater than zero")]
    NotPositive(String),

    #[error("'{0}' is out of range")]
    OutOfRange(String),

    #[error("{0} is missing")]
    Missing(Field),
}

/// Errors that end input resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("input closed while prompting for {0}")]
    InputClosed(Field),

    #[error("prompt I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
}

/// Result type for validation
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Result type for input resolution
pub type Result<T> = std::result::Result<T, ResolveError>;
