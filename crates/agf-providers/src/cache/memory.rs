//! Sharded in-memory cache provider
//!
//! Non-expiring cache backed by a `DashMap`. Entries live until removed or
//! the process exits, which suits resolution handles that are valid for the
//! process lifetime anyway.

use agf_domain::{CacheProvider, CacheValue, ReadCache};
use dashmap::DashMap;

/// DashMap-based in-memory cache provider
///
/// The sharded map gives per-key atomicity without a global lock: readers
/// and writers of distinct keys never block each other, and concurrent
/// writes to the same key are last-writer-wins.
#[derive(Default)]
pub struct MemoryCacheProvider {
    entries: DashMap<String, CacheValue>,
}

impl MemoryCacheProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReadCache for MemoryCacheProvider {
    fn get(&self, key: &str) -> Option<CacheValue> {
        if key.is_empty() {
            return None;
        }
        self.entries.get(key).map(|entry| entry.value().clone())
    }
}

impl CacheProvider for MemoryCacheProvider {
    fn insert(&self, key: &str, value: CacheValue) -> Option<CacheValue> {
        if key.is_empty() {
            return None;
        }
        self.entries.insert(key.to_string(), value.clone());
        Some(value)
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

impl std::fmt::Debug for MemoryCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheProvider")
            .field("entries", &self.entries.len())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use agf_application::registry::cache::{CacheProviderConfig, CacheProviderEntry, CACHE_PROVIDERS};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static MEMORY_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "memory",
    description: "Non-expiring sharded in-memory cache",
    // Capacity and TTL are accepted but ignored; this store never evicts
    factory: |_config: &CacheProviderConfig| {
        tracing::debug!("creating sharded in-memory cache provider");
        Ok(std::sync::Arc::new(MemoryCacheProvider::new()))
    },
};
