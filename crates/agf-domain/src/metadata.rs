//! Aggregate metadata and construction handles
//!
//! Runtime reflection from the classic attribute-driven factory design is
//! replaced here by static registration: a target type describes itself
//! through an [`AggregateDescriptor`] and its designated construction routine
//! is carried as a plain function pointer inside a [`FactoryMethodHandle`].
//!
//! Arguments cross the invocation boundary as dynamically typed values.
//! There is no coercion and no deep mapping: every argument is handed to the
//! routine exactly as the caller supplied it.

use std::any::Any;
use std::fmt;

/// A dynamically typed value passed through the factory unchanged
pub type DynValue = Box<dyn Any + Send + Sync>;

/// Public parameterless initializer of a target type.
///
/// The produced value serves only as the invocation receiver context for the
/// construction routine; it never becomes the constructed aggregate.
pub type InitializerFn = fn() -> DynValue;

/// Designated construction routine of a target type.
///
/// Receives the receiver context built by the type's initializer and the
/// projected argument list. Returning `None` signals that the routine could
/// not produce a value and maps to [`Error::InvocationFailed`].
///
/// [`Error::InvocationFailed`]: crate::error::Error::InvocationFailed
pub type ConstructFn = fn(receiver: DynValue, args: Vec<FactoryArg>) -> Option<DynValue>;

/// Static identity and preconditions of a factory target type
///
/// One descriptor exists per aggregate type, typically as a `static` next to
/// the type definition, and is handed to the factory through
/// [`AggregateMetadata::descriptor`].
pub struct AggregateDescriptor {
    /// Process-unique type name; also the resolution cache key stem
    pub type_name: &'static str,
    /// Whether the type carries the aggregate-root marker
    pub aggregate_root: bool,
    /// Public parameterless initializer, if the type exposes one
    pub initializer: Option<InitializerFn>,
}

impl fmt::Debug for AggregateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateDescriptor")
            .field("type_name", &self.type_name)
            .field("aggregate_root", &self.aggregate_root)
            .field("has_initializer", &self.initializer.is_some())
            .finish()
    }
}

/// Implemented by every type eligible for construction through the factory
pub trait AggregateMetadata: Any + Send + Sync {
    /// Static descriptor of this type
    fn descriptor() -> &'static AggregateDescriptor;
}

/// Resolved, invokable reference to a type's construction routine
///
/// One handle exists per target type. It is created on first resolution,
/// memoized in the cache collaborator for the process lifetime and never
/// mutated afterwards.
pub struct FactoryMethodHandle {
    /// Name of the aggregate type the routine constructs
    pub aggregate: &'static str,
    /// Name of the registered routine, for diagnostics
    pub method_name: &'static str,
    /// The routine itself
    pub construct: ConstructFn,
}

impl FactoryMethodHandle {
    /// Invoke the construction routine with the projected arguments
    pub fn invoke(&self, receiver: DynValue, args: Vec<FactoryArg>) -> Option<DynValue> {
        (self.construct)(receiver, args)
    }
}

impl fmt::Debug for FactoryMethodHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryMethodHandle")
            .field("aggregate", &self.aggregate)
            .field("method_name", &self.method_name)
            .finish()
    }
}

/// A single projected argument
///
/// `Absent` is the explicit no-value marker produced when a nullable request
/// field holds no value. Construction routines decide what an absent
/// argument means for them.
pub enum FactoryArg {
    /// A value passed through from the request or the per-call extras
    Value(DynValue),
    /// The explicit no-value marker for nullable fields
    Absent,
}

impl FactoryArg {
    /// Wrap a concrete value
    pub fn of<T: Any + Send + Sync>(value: T) -> Self {
        Self::Value(Box::new(value))
    }

    /// Whether this argument is the explicit no-value marker
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the value as `T`, if present and of that type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Value(value) => value.downcast_ref::<T>(),
            Self::Absent => None,
        }
    }

    /// Take the value as `T`.
    ///
    /// # Panics
    ///
    /// Panics when the argument is absent or holds a different type. A
    /// mismatch between the request shape and the routine's expectations is
    /// a caller bug, not a runtime condition to report gracefully.
    pub fn into_value<T: Any>(self, field: &str) -> T {
        match self {
            Self::Value(value) => *value
                .downcast::<T>()
                .unwrap_or_else(|_| panic!("argument `{field}` does not have the expected type")),
            Self::Absent => panic!("argument `{field}` is absent but a value was expected"),
        }
    }

    /// Take the value as `Option<T>`, mapping the absent marker to `None`.
    ///
    /// # Panics
    ///
    /// Panics when a present value holds a different type.
    pub fn into_optional<T: Any>(self, field: &str) -> Option<T> {
        match self {
            Self::Value(value) => Some(
                *value.downcast::<T>().unwrap_or_else(|_| {
                    panic!("argument `{field}` does not have the expected type")
                }),
            ),
            Self::Absent => None,
        }
    }
}

impl fmt::Debug for FactoryArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("FactoryArg::Value(..)"),
            Self::Absent => f.write_str("FactoryArg::Absent"),
        }
    }
}
