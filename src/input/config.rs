/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration for the interactive input resolver

/// Interactive resolver configuration
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Message written after an answer fails validation, before re-prompting
    pub invalid_message: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            invalid_message: "Bad Input.".to_string(),
        }
    }
}
