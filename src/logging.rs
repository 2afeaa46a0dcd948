// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures tracing-subscriber with env-driven level and format selection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitTrack Contributors

//! Structured logging setup
//!
//! `RUST_LOG` takes precedence when set; otherwise the configured level is
//! used. Format defaults to pretty for interactive use, compact for anything
//! space-constrained (`FITTRACK_LOG_FORMAT=compact`).

use std::env;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line format for development
    Pretty,
    /// Single-line format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Build from `FITTRACK_LOG_LEVEL` / `FITTRACK_LOG_FORMAT` with defaults
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = env::var("FITTRACK_LOG_LEVEL") {
            config.level = level;
        }
        if let Ok(format) = env::var("FITTRACK_LOG_FORMAT") {
            if format.eq_ignore_ascii_case("compact") {
                config.format = LogFormat::Compact;
            }
        }
        config
    }
}

/// Initialize the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the level directive is invalid or a global subscriber
/// is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Pretty => {
            let layer = fmt::layer().with_target(true).with_writer(std::io::stdout);
            registry.with(layer).try_init()?;
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stdout);
            registry.with(layer).try_init()?;
        }
    }

    tracing::debug!(level = %config.level, "logging initialized");
    Ok(())
}
