// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration module for the Ala Trie crate.
//!
//! Settings are layered: built-in defaults, then an optional file (TOML, YAML,
//! JSON), then environment variables. The result is validated before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use crate::error::AlaResult;
use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod trie;

pub use trie::TrieSettings;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "ALA";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AlaConfig {
    /// Trie scheduling and sizing
    pub trie: TrieSettings,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for AlaConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl AlaConfig {
    /// Writes this configuration to `path` as TOML, creating parent directories.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> AlaResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;

        tracing::info!("Configuration written to {:?}", path);
        Ok(())
    }

    /// Writes the default configuration to `path` as TOML.
    pub fn write_default<P: AsRef<Path>>(path: P) -> AlaResult<()> {
        Self::default().write_to(path)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file, and environment variables.
    ///
    /// Environment keys take the form `<PREFIX>__<SECTION>__<KEY>`, for example
    /// `ALA__TRIE__WRITE_MODE=deferred`.
    ///
    /// # Returns
    ///
    /// * `Ok(AlaConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<AlaConfig> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&AlaConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let ala_config: AlaConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        ala_config.validate()?;

        tracing::debug!(
            path = ?self.config_path,
            env_prefix = %self.env_prefix,
            "configuration loaded"
        );

        Ok(ala_config)
    }
}
