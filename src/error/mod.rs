// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for the Ala Trie crate.
//!
//! Trie operations themselves never fail: a missing sequence is an ordinary
//! `false` or `None`. The errors here come from the surrounding layers, loading
//! configuration and installing the logging subscriber.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the crate.
pub type AlaResult<T> = Result<T, AlaError>;

/// Core error enum for the crate.
#[derive(Error, Debug)]
pub enum AlaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when writing configuration out.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::ser::Error> for AlaError {
    fn from(err: toml::ser::Error) -> Self {
        AlaError::Serialization(err.to_string())
    }
}
