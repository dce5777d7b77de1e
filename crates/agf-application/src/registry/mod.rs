//! Static registries
//!
//! Both registries are `linkme` distributed slices: entries are contributed
//! at compile time by whichever crates are linked into the final binary, so
//! no runtime reflection or explicit bootstrap step is needed.
//!
//! - [`factory_methods`]: construction routines, one designated routine per
//!   aggregate type.
//! - [`cache`]: cache provider implementations, selectable by name from
//!   configuration.

/// Cache provider registry
pub mod cache;
/// Construction-routine registry
pub mod factory_methods;

pub use cache::{
    list_cache_providers, resolve_cache_provider, CacheProviderConfig, CacheProviderEntry,
    CACHE_PROVIDERS,
};
pub use factory_methods::{scan_factory_methods, FactoryMethodEntry, FACTORY_METHODS};
