//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use agf_providers::constants::{CACHE_DEFAULT_MAX_ENTRIES, CACHE_DEFAULT_TTL_SECS};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the aggregate factory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FactoryConfig {
    /// Resolution cache configuration
    pub cache: CacheConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Resolution cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache enabled; when false the null provider is wired instead
    pub enabled: bool,

    /// Cache provider name, resolved from the provider registry
    pub provider: String,

    /// Maximum number of cached entries
    pub max_size: usize,

    /// Default TTL in seconds
    pub default_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "moka".to_string(),
            max_size: CACHE_DEFAULT_MAX_ENTRIES,
            default_ttl_secs: CACHE_DEFAULT_TTL_SECS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}
