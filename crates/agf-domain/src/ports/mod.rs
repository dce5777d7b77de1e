//! Ports consumed from external collaborators
//!
//! The factory core owns no infrastructure. Anything stateful it needs is
//! expressed as a port here and supplied by an outer layer.

/// Cache collaborator ports
pub mod cache;

pub use cache::{CacheProvider, CacheValue, ReadCache};
