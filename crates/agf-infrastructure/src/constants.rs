//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "AGF";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "agf.toml";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
