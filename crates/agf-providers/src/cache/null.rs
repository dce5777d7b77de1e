//! Null cache provider for testing
//!
//! A cache provider implementation that doesn't store anything. Useful for
//! tests and for disabling resolution caching: every resolve takes the
//! registry scan path.

use agf_domain::{CacheProvider, CacheValue, ReadCache};

/// Null cache provider that doesn't store anything
///
/// Always misses on gets and accepts inserts without storing the data.
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

impl ReadCache for NullCacheProvider {
    fn get(&self, _key: &str) -> Option<CacheValue> {
        // Always a cache miss
        None
    }
}

impl CacheProvider for NullCacheProvider {
    fn insert(&self, key: &str, value: CacheValue) -> Option<CacheValue> {
        // Accept the insert but don't store anything
        if key.is_empty() {
            return None;
        }
        Some(value)
    }

    fn remove(&self, _key: &str) -> bool {
        // The key never existed
        false
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use agf_application::registry::cache::{CacheProviderConfig, CacheProviderEntry, CACHE_PROVIDERS};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static NULL_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "null",
    description: "No-op cache for tests and disabled caching",
    factory: |_config: &CacheProviderConfig| Ok(std::sync::Arc::new(NullCacheProvider::new())),
};
