//! Structured logging with tracing
//!
//! Centralized logging configuration using the tracing ecosystem. The core
//! crates only emit events; installing a subscriber is the embedding
//! application's call, made once through [`init_logging`].

use crate::config::LoggingConfig;
use agf_domain::{Error, Result};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

/// Initialize logging with the provided configuration
///
/// The `AGF_LOG` environment variable overrides the configured level using
/// the usual `EnvFilter` directive syntax.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env("AGF_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = if config.json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    };

    result.map_err(|e| {
        Error::configuration(format!("Failed to install the tracing subscriber: {e}"))
    })?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
