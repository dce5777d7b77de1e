//! Construction-Method Resolver
//!
//! Locates a target type's designated construction routine and memoizes the
//! result per type through the cache collaborator. The registry scan is the
//! expensive path; a present cache entry of the expected handle kind skips
//! it entirely.
//!
//! Absence is a normal outcome signaling "not configured": it is never
//! raised and never cached, so a routine registered later is still found on
//! a subsequent call.

use crate::registry::factory_methods::scan_factory_methods;
use agf_domain::constants::factory_method_cache_key;
use agf_domain::{CacheLookup, CacheProvider, FactoryMethodHandle};
use std::sync::Arc;
use tracing::{debug, trace};

/// Outcome of a successful resolution
pub struct Resolution {
    /// The resolved construction routine
    pub handle: Arc<FactoryMethodHandle>,
    /// Echo of the cache lookup that preceded the resolution
    pub lookup: CacheLookup,
}

/// Resolves construction routines, memoizing per target type
pub struct FactoryMethodResolver {
    cache: Arc<dyn CacheProvider>,
}

impl FactoryMethodResolver {
    /// Create a resolver backed by the given cache collaborator
    pub fn new(cache: Arc<dyn CacheProvider>) -> Self {
        Self { cache }
    }

    /// Resolve the designated construction routine for `type_name`.
    ///
    /// Returns `None` when no routine is registered for the type. The
    /// shared cache may be mutated as a side effect; concurrent resolution
    /// of the same type may race, in which case the duplicate scan is
    /// harmless and the duplicate insert is last-writer-wins.
    pub fn resolve(&self, type_name: &'static str) -> Option<Resolution> {
        let key = factory_method_cache_key(type_name);

        if let Some(cached) = self.cache.get(&key) {
            match cached.downcast::<FactoryMethodHandle>() {
                Ok(handle) => {
                    trace!(key = %key, "construction routine served from cache");
                    return Some(Resolution {
                        handle,
                        lookup: CacheLookup { key, hit: true },
                    });
                }
                // A payload of the wrong kind is treated as a miss and
                // re-resolved below.
                Err(_) => debug!(key = %key, "cached payload has unexpected kind"),
            }
        }

        let entry = scan_factory_methods(type_name)?;
        debug!(
            aggregate = type_name,
            method = entry.method_name,
            "construction routine resolved by registry scan"
        );

        let handle = Arc::new(FactoryMethodHandle {
            aggregate: entry.aggregate,
            method_name: entry.method_name,
            construct: entry.construct,
        });
        self.cache.insert(&key, handle.clone());

        Some(Resolution {
            handle,
            lookup: CacheLookup { key, hit: false },
        })
    }
}
