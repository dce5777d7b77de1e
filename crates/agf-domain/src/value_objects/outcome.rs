//! Success outcome types

use serde::{Deserialize, Serialize};

/// Diagnostic echo of the resolution cache lookup for a target type
///
/// Carried alongside the constructed aggregate so callers can observe
/// whether the construction routine was served from the cache or resolved
/// by a registry scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheLookup {
    /// The resolution cache key that was queried
    pub key: String,
    /// Whether the handle was served from the cache
    pub hit: bool,
}

/// Outcome of a successful `create_entity` call
#[derive(Debug)]
pub struct CreatedEntity<T> {
    /// The freshly constructed aggregate
    pub entity: T,
    /// Echo of the resolution cache lookup for the aggregate's key
    pub cache_lookup: CacheLookup,
}
