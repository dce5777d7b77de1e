//! # Aggregate Factory - Provider Implementations
//!
//! Cache provider implementations behind the `agf-domain` ports. Each
//! provider registers itself into the `agf-application` registry slice via
//! `linkme`, so linking this crate is all it takes to make the providers
//! resolvable by name.
//!
//! | Provider | Name | Backing store |
//! |----------|------|---------------|
//! | [`MokaCacheProvider`] | `moka` | Expiring concurrent in-memory cache |
//! | [`MemoryCacheProvider`] | `memory` | Non-expiring sharded map |
//! | [`NullCacheProvider`] | `null` | Nothing; every lookup misses |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! agf-providers = { version = "0.1", default-features = false, features = ["cache-moka"] }
//! ```
//!
//! [`MokaCacheProvider`]: cache::MokaCacheProvider
//! [`MemoryCacheProvider`]: cache::MemoryCacheProvider
//! [`NullCacheProvider`]: cache::NullCacheProvider

// Re-export agf-domain types commonly used with providers
pub use agf_domain::{CacheProvider, CacheValue, ReadCache};

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
pub mod cache;
