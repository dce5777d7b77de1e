//! Factory assembly from configuration
//!
//! The single composition point of the workspace: maps the declarative
//! cache configuration onto a registered provider and hands the result to
//! the application-layer factory.

use crate::config::{CacheConfig, FactoryConfig};
use agf_application::registry::cache::{resolve_cache_provider, CacheProviderConfig};
use agf_application::CreateEntityFactory;
use agf_domain::{CacheProvider, Error, Result};
use agf_providers::cache::NullCacheProvider;
use std::sync::Arc;
use tracing::debug;

/// Build a ready-to-use entity factory from configuration
pub fn build_entity_factory(config: &FactoryConfig) -> Result<CreateEntityFactory> {
    let provider = build_cache_provider(&config.cache)?;
    Ok(CreateEntityFactory::new(provider))
}

/// Build the resolution cache provider described by the configuration.
///
/// A disabled cache wires the null provider, so resolution still works but
/// every call takes the registry scan path.
pub fn build_cache_provider(config: &CacheConfig) -> Result<Arc<dyn CacheProvider>> {
    if !config.enabled {
        debug!("resolution caching disabled; wiring the null provider");
        return Ok(Arc::new(NullCacheProvider::new()));
    }

    let provider_config = CacheProviderConfig::new(config.provider.as_str())
        .with_max_size(config.max_size)
        .with_ttl_secs(config.default_ttl_secs);

    debug!(provider = %config.provider, "wiring the configured cache provider");
    resolve_cache_provider(&provider_config).map_err(Error::configuration)
}
