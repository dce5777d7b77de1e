//! Cache collaborator ports
//!
//! The resolution cache is an externally supplied key/value store. The core
//! consumes only this narrow contract; eviction and expiry policy belong to
//! the provider. Implementations live in `agf-providers`.
//!
//! Providers are total: no method ever fails. A malformed key or value
//! simply yields the absent sentinel (`None`).

use std::any::Any;
use std::sync::Arc;

/// Opaque payload stored in the cache
///
/// Resolution stores `Arc<FactoryMethodHandle>` behind this type; readers
/// downcast and treat a wrong-kind payload as a miss.
pub type CacheValue = Arc<dyn Any + Send + Sync>;

/// Read-only cache facade
///
/// Pure lookup, no mutation.
pub trait ReadCache: std::fmt::Debug + Send + Sync {
    /// Retrieve the value stored for the given key, if any
    fn get(&self, key: &str) -> Option<CacheValue>;
}

/// Full cache provider contract
///
/// Per-key read/insert must be atomic with respect to other readers and
/// writers of the same key, and operations on distinct keys must not block
/// each other. Concurrent writes to the same key are last-writer-wins.
pub trait CacheProvider: ReadCache {
    /// Store a value under the given key and echo it back.
    ///
    /// Returns `None` when the key is empty; such entries are never stored.
    fn insert(&self, key: &str, value: CacheValue) -> Option<CacheValue>;

    /// Remove the entry for the given key.
    ///
    /// Returns `true` when an entry existed and was removed. Not used by the
    /// resolution path today, but part of the contract every provider offers.
    fn remove(&self, key: &str) -> bool;
}
