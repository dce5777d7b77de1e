//! Configuration types and loading

/// Configuration loader service
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CacheConfig, FactoryConfig, LoggingConfig};
