// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ala Trie Library
//!
//! A generic, thread-safe prefix tree for indexing sequences of hashable
//! elements, together with the configuration, error, and logging layers used
//! to embed it.
//!
//! # Architecture
//!
//! - [`data_structures::ala_trie`] holds the node graph and the engine that
//!   schedules reads and writes against it
//! - [`config`] loads layered settings for the trie and for logging
//! - [`logging`] installs the `tracing` subscriber
//! - [`error`] defines the errors of the surrounding layers; trie operations
//!   themselves are total

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::ala_trie::{AlaTrie, AlaTrieConfig, WriteMode};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (if any) and `ALA__*` environment
/// variables, installs logging, and returns the loaded configuration.
pub fn init(config_path: Option<&std::path::Path>) -> error::AlaResult<config::AlaConfig> {
    let loader = config::ConfigLoader::new(config_path, config::ENV_PREFIX);
    let config = loader.load()?;

    logging::init_logging(&config.log)?;
    tracing::info!(version = VERSION, write_mode = ?config.trie.write_mode, "ala_trie initialized");

    Ok(config)
}
