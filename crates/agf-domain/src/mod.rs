//! # Aggregate Factory - Domain Layer
//!
//! Core contracts for building domain aggregates from request objects.
//! This crate owns the vocabulary shared by every other layer:
//!
//! | Concept | Type |
//! |---------|------|
//! | Typed failure taxonomy | [`Error`] |
//! | Aggregate identity and preconditions | [`AggregateDescriptor`], [`AggregateMetadata`] |
//! | Designated construction routine | [`FactoryMethodHandle`] |
//! | Request field enumeration | [`FactoryRequest`], [`RequestField`] |
//! | Per-call policy | [`FactoryOptions`] |
//! | Success outcome | [`CreatedEntity`], [`CacheLookup`] |
//! | Cache collaborator ports | [`ReadCache`], [`CacheProvider`] |
//!
//! The crate is dependency-light on purpose: provider implementations live
//! in `agf-providers`, orchestration in `agf-application`.

/// Shared constants (cache key shape, defaults)
pub mod constants;
/// Error handling types
pub mod error;
/// Aggregate descriptors, construction handles and dynamic values
pub mod metadata;
/// Ports consumed from external collaborators
pub mod ports;
/// Immutable value objects exchanged with callers
pub mod value_objects;

pub use error::{Error, Result};
pub use metadata::{
    AggregateDescriptor, AggregateMetadata, ConstructFn, DynValue, FactoryArg, FactoryMethodHandle,
    InitializerFn,
};
pub use ports::cache::{CacheProvider, CacheValue, ReadCache};
pub use value_objects::options::FactoryOptions;
pub use value_objects::outcome::{CacheLookup, CreatedEntity};
pub use value_objects::request::{FactoryRequest, RequestField};
