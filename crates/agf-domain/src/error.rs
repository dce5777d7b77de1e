//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the aggregate factory
///
/// Every variant of the factory taxonomy is recoverable and is returned as a
/// value, never raised across the public operation boundary. The single
/// deliberate exception is an argument-binding mismatch between the request
/// shape and the construction routine, which is treated as a caller bug and
/// surfaces as a panic from the routine itself.
#[derive(Error, Debug)]
pub enum Error {
    /// The target type does not carry the aggregate-root marker
    #[error("operation is not allowed: the target type `{type_name}` is not an aggregate root")]
    NotAggregateRoot {
        /// Name of the offending target type
        type_name: &'static str,
    },

    /// No registered construction routine matched the target type
    #[error("could not find the factory method for the type `{type_name}`")]
    FactoryMethodNotFound {
        /// Name of the target type that has no routine registered
        type_name: &'static str,
    },

    /// The target type exposes no public parameterless initializer
    #[error("could not find a public parameterless constructor on the type `{type_name}`")]
    NoPublicConstructor {
        /// Name of the offending target type
        type_name: &'static str,
    },

    /// The projected argument list was empty before extras were appended
    #[error("no arguments found in the request type `{type_name}`")]
    NoArguments {
        /// Name of the request type that projected no arguments
        type_name: &'static str,
    },

    /// A non-nullable request field resolved to an absent value
    #[error("value of the required field `{field}` cannot be absent")]
    RequiredValueMissing {
        /// Name of the field whose value was missing
        field: &'static str,
    },

    /// The construction routine was invoked but produced no value
    #[error("could not invoke the factory method for the type `{type_name}`")]
    InvocationFailed {
        /// Name of the target type whose routine produced nothing
        type_name: &'static str,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
