//! Aggregate Factory orchestrator
//!
//! Composes the resolver and the projector with the type-level
//! preconditions into the single `create_entity` operation. The flow is
//! linear with early-exit branches; every branch is terminal and there are
//! no retries.

use crate::projection::project_arguments;
use crate::resolver::FactoryMethodResolver;
use agf_domain::{
    AggregateMetadata, CacheProvider, CreatedEntity, Error, FactoryOptions, FactoryRequest, Result,
};
use std::sync::Arc;
use tracing::debug;

/// Builds domain aggregates from request objects
///
/// One factory instance serves arbitrarily many target types and callers
/// concurrently; the only shared mutable state is the resolution cache
/// behind the [`CacheProvider`] port.
///
/// # Example
///
/// ```ignore
/// use agf_application::CreateEntityFactory;
/// use agf_providers::cache::MokaCacheProvider;
/// use std::sync::Arc;
///
/// let factory = CreateEntityFactory::new(Arc::new(MokaCacheProvider::new()));
/// let created: CreatedEntity<Order> = factory.create_entity_with(&request, |options| {
///     options
///         .exclude_properties(["audit_comment"])
///         .add_property("order_number", next_order_number())
/// })?;
/// ```
pub struct CreateEntityFactory {
    resolver: FactoryMethodResolver,
}

impl std::fmt::Debug for CreateEntityFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateEntityFactory").finish_non_exhaustive()
    }
}

impl CreateEntityFactory {
    /// Create a factory backed by the given cache collaborator
    pub fn new(cache: Arc<dyn CacheProvider>) -> Self {
        Self {
            resolver: FactoryMethodResolver::new(cache),
        }
    }

    /// Build an aggregate of type `A` from `request` with an empty policy
    pub fn create_entity<R, A>(&self, request: &R) -> Result<CreatedEntity<A>>
    where
        R: FactoryRequest,
        A: AggregateMetadata,
    {
        self.create_entity_with(request, |options| options)
    }

    /// Build an aggregate of type `A` from `request`.
    ///
    /// `configure` is applied to a fresh [`FactoryOptions`] exactly once,
    /// before any resolution work.
    ///
    /// # Panics
    ///
    /// A structural mismatch between the projected arguments and what the
    /// resolved routine expects, or a routine returning a value that is not
    /// an `A`, is a caller bug and panics instead of becoming a typed
    /// failure.
    pub fn create_entity_with<R, A, F>(&self, request: &R, configure: F) -> Result<CreatedEntity<A>>
    where
        R: FactoryRequest,
        A: AggregateMetadata,
        F: FnOnce(FactoryOptions) -> FactoryOptions,
    {
        let descriptor = A::descriptor();

        if !descriptor.aggregate_root {
            return Err(Error::NotAggregateRoot {
                type_name: descriptor.type_name,
            });
        }

        let options = configure(FactoryOptions::new());

        let resolution =
            self.resolver
                .resolve(descriptor.type_name)
                .ok_or(Error::FactoryMethodNotFound {
                    type_name: descriptor.type_name,
                })?;

        let initializer = descriptor.initializer.ok_or(Error::NoPublicConstructor {
            type_name: descriptor.type_name,
        })?;

        let args = project_arguments(request, options)?;

        let receiver = initializer();
        let produced =
            resolution
                .handle
                .invoke(receiver, args)
                .ok_or(Error::InvocationFailed {
                    type_name: descriptor.type_name,
                })?;

        let entity = *produced.downcast::<A>().unwrap_or_else(|_| {
            panic!(
                "factory method `{}` returned a value that is not a `{}`",
                resolution.handle.method_name, descriptor.type_name
            )
        });

        debug!(
            aggregate = descriptor.type_name,
            cache_hit = resolution.lookup.hit,
            "entity created"
        );

        Ok(CreatedEntity {
            entity,
            cache_lookup: resolution.lookup,
        })
    }
}
