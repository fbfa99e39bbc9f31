//! Logging utilities for schema_scout
//!
//! This module provides logging setup and configuration.

use std::fs::File;
use std::path::Path;

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Initialize logging based on configuration
///
/// With no logging section the global subscriber is left untouched, so
/// library consumers can install their own.
pub fn init_logging(config: &Option<LoggingConfig>) -> Result<()> {
    let config = match config {
        Some(cfg) => cfg,
        None => return Ok(()),
    };

    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let directive = format!("schema_scout={}", level)
        .parse()
        .map_err(|e| Error::ConfigError(format!("Invalid log directive: {}", e)))?;
    let env_filter = EnvFilter::from_default_env().add_directive(directive);

    let json = config.format.to_lowercase() == "json";

    if let Some(file_path) = &config.file {
        if let Some(parent) = Path::new(file_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(file_path)?;

        if json {
            install(
                fmt::Subscriber::builder()
                    .json()
                    .with_env_filter(env_filter)
                    .with_writer(file)
                    .with_ansi(false)
                    .finish(),
            )
        } else if config.include_timestamps {
            install(
                fmt::Subscriber::builder()
                    .with_env_filter(env_filter)
                    .with_writer(file)
                    .with_ansi(false)
                    .finish(),
            )
        } else {
            install(
                fmt::Subscriber::builder()
                    .without_time()
                    .with_env_filter(env_filter)
                    .with_writer(file)
                    .with_ansi(false)
                    .finish(),
            )
        }
    } else if config.stdout {
        if json {
            install(
                fmt::Subscriber::builder()
                    .json()
                    .with_env_filter(env_filter)
                    .finish(),
            )
        } else if config.include_timestamps {
            install(fmt::Subscriber::builder().with_env_filter(env_filter).finish())
        } else {
            install(
                fmt::Subscriber::builder()
                    .without_time()
                    .with_env_filter(env_filter)
                    .finish(),
            )
        }
    } else {
        Ok(())
    }
}

fn install(subscriber: impl tracing::Subscriber + Send + Sync + 'static) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::ConfigError(format!("Failed to install subscriber: {}", e)))
}
