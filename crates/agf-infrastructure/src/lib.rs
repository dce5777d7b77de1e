//! # Aggregate Factory - Infrastructure Layer
//!
//! Configuration loading, logging initialization and the wiring entry point
//! that assembles a ready-to-use `CreateEntityFactory` from configuration.
//!
//! Linking this crate pulls in `agf-providers`, which completes the linkme
//! registration of the shipped cache providers.
//!
//! ## Usage
//!
//! ```ignore
//! use agf_infrastructure::config::ConfigLoader;
//! use agf_infrastructure::logging::init_logging;
//! use agf_infrastructure::wiring::build_entity_factory;
//!
//! let config = ConfigLoader::new().load()?;
//! init_logging(&config.logging)?;
//! let factory = build_entity_factory(&config)?;
//! ```

/// Infrastructure constants
pub mod constants;

/// Configuration types and loading
pub mod config;

/// Structured logging with tracing
pub mod logging;

/// Factory assembly from configuration
pub mod wiring;

pub use config::{CacheConfig, ConfigLoader, FactoryConfig, LoggingConfig};
pub use logging::init_logging;
pub use wiring::{build_cache_provider, build_entity_factory};
