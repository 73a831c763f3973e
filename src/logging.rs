// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Logging setup.
//!
//! Installs a global `tracing` subscriber built from [`LogConfig`]. `RUST_LOG`
//! takes precedence over the configured level when set.

use once_cell::sync::OnceCell;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::LogConfig;
use crate::error::{AlaError, AlaResult};

/// Set once the global subscriber is in place.
static LOGGING: OnceCell<()> = OnceCell::new();

/// Builds the filter, preferring `RUST_LOG` over the configured level.
fn env_filter(config: &LogConfig) -> AlaResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AlaError::Logging(format!("Invalid log filter: {e}")))
}

/// Initialize the logging system.
///
/// Later calls are no-ops, so libraries and tests can call this freely.
pub fn init_logging(config: &LogConfig) -> AlaResult<()> {
    LOGGING
        .get_or_try_init(|| {
            let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if config.json {
                fmt::layer()
                    .json()
                    .with_file(config.source_location)
                    .with_line_number(config.source_location)
                    .with_thread_names(true)
                    .boxed()
            } else {
                fmt::layer()
                    .pretty()
                    .with_file(config.source_location)
                    .with_line_number(config.source_location)
                    .with_thread_names(true)
                    .boxed()
            };

            tracing_subscriber::registry()
                .with(fmt_layer)
                .with(env_filter(config)?)
                .with(ErrorLayer::default())
                .try_init()
                .map_err(|e| {
                    AlaError::Logging(format!("Failed to set global tracing subscriber: {e}"))
                })
        })
        .map(|_| ())
}
