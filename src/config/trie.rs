// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie configuration module.
//!
//! File and environment representation of [`AlaTrieConfig`].

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::ala_trie::{AlaTrieConfig, WriteMode};
use crate::error::config::ConfigError;

/// Trie settings as they appear in configuration sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrieSettings {
    /// `immediate` or `deferred`
    pub write_mode: WriteMode,

    /// Number of node slots reserved when a trie is created
    pub initial_capacity: usize,

    /// Deferred queue length that forces a synchronous drain
    pub max_pending_writes: usize,
}

impl Default for TrieSettings {
    fn default() -> Self {
        let defaults = AlaTrieConfig::default();
        Self {
            write_mode: defaults.get_write_mode(),
            initial_capacity: defaults.get_initial_capacity(),
            max_pending_writes: defaults.get_max_pending_writes(),
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_pending_writes == 0 {
            return Err(ConfigError::ValidationError(
                "max_pending_writes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl TryFrom<&TrieSettings> for AlaTrieConfig {
    type Error = ConfigError;

    fn try_from(settings: &TrieSettings) -> ConfigResult<Self> {
        settings.validate()?;

        Ok(AlaTrieConfig::new()
            .with_write_mode(settings.write_mode)
            .with_initial_capacity(settings.initial_capacity)
            .with_max_pending_writes(settings.max_pending_writes))
    }
}
