// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration error module.
//!
//! This module defines error types that may occur during configuration loading,
//! parsing, and validation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the configuration file has an extension we cannot parse.
    #[error("Unsupported configuration file format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Error when parsing the configuration sources.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
