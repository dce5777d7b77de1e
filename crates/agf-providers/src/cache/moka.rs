//! Moka in-memory cache provider
//!
//! High-performance, concurrent in-memory cache implementation using Moka.
//! This is the expiring store the resolution cache is expected to live in:
//! entries may be evicted at any time and a later resolution simply re-scans.

use crate::constants::CACHE_DEFAULT_MAX_ENTRIES;
use agf_domain::{CacheProvider, CacheValue, ReadCache};
use moka::sync::Cache;
use std::time::Duration;

/// Moka-based in-memory cache provider
///
/// Supports configurable capacity and TTL. Per-key operations are atomic
/// and operations on distinct keys do not block each other.
#[derive(Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, CacheValue>,
    max_size: usize,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Create a new Moka cache provider with default settings
    pub fn new() -> Self {
        Self::with_capacity(CACHE_DEFAULT_MAX_ENTRIES)
    }

    /// Create a new Moka cache provider with specified capacity
    pub fn with_capacity(max_size: usize) -> Self {
        let cache = Cache::builder().max_capacity(max_size as u64).build();

        Self { cache, max_size }
    }

    /// Create a new Moka cache provider with capacity and TTL
    pub fn with_config(max_size: usize, time_to_live: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_size as u64)
            .time_to_live(time_to_live)
            .build();

        Self { cache, max_size }
    }

    /// Get the maximum capacity of the cache
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl ReadCache for MokaCacheProvider {
    fn get(&self, key: &str) -> Option<CacheValue> {
        if key.is_empty() {
            return None;
        }
        self.cache.get(key)
    }
}

impl CacheProvider for MokaCacheProvider {
    fn insert(&self, key: &str, value: CacheValue) -> Option<CacheValue> {
        if key.is_empty() {
            return None;
        }
        self.cache.insert(key.to_string(), value.clone());
        Some(value)
    }

    fn remove(&self, key: &str) -> bool {
        let existed = self.cache.contains_key(key);
        self.cache.invalidate(key);
        existed
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("max_size", &self.max_size)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use agf_application::registry::cache::{CacheProviderConfig, CacheProviderEntry, CACHE_PROVIDERS};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static MOKA_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "moka",
    description: "Moka expiring in-memory cache",
    factory: |config: &CacheProviderConfig| {
        let max_size = config.max_size.unwrap_or(CACHE_DEFAULT_MAX_ENTRIES);
        tracing::debug!(max_size, ttl_secs = config.ttl_secs, "creating moka cache provider");
        let provider = match config.ttl_secs {
            Some(secs) => MokaCacheProvider::with_config(max_size, Duration::from_secs(secs)),
            None => MokaCacheProvider::with_capacity(max_size),
        };
        Ok(std::sync::Arc::new(provider))
    },
};
