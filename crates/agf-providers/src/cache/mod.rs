//! Cache provider implementations
//!
//! Every provider implements the `agf-domain` cache ports and registers a
//! `CacheProviderEntry` into the application registry. Providers are total:
//! no operation ever fails, and malformed keys yield the absent sentinel.

/// Non-expiring sharded in-memory cache
#[cfg(feature = "cache-memory")]
pub mod memory;
/// Moka expiring in-memory cache
#[cfg(feature = "cache-moka")]
pub mod moka;
/// No-op cache for tests and disabled caching
pub mod null;

#[cfg(feature = "cache-memory")]
pub use memory::MemoryCacheProvider;
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
