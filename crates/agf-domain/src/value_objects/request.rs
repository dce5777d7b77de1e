//! Request enumeration contract
//!
//! The factory binds request fields to construction-routine parameters
//! positionally. A request type therefore enumerates its fields as an
//! explicit descriptor list instead of relying on reflection order, which
//! no systems language guarantees to be stable.

use crate::metadata::DynValue;
use std::any::Any;
use std::fmt;

/// Implemented by request types the factory can project
pub trait FactoryRequest {
    /// Name of the request type, for diagnostics
    fn type_name(&self) -> &'static str;

    /// The request's fields in declared order.
    ///
    /// Declared order is significant: it is the only mechanism aligning
    /// request fields to the construction routine's parameter order.
    fn fields(&self) -> Vec<RequestField>;
}

/// One request field, carrying its declared nullability and current value
pub struct RequestField {
    /// Field name as declared on the request type
    pub name: &'static str,
    /// Whether the field's declared type permits an absent value
    pub nullable: bool,
    /// The field's value, `None` when absent
    pub value: Option<DynValue>,
}

impl RequestField {
    /// A field whose declared type always carries a value
    pub fn required<T: Any + Send + Sync>(name: &'static str, value: T) -> Self {
        Self {
            name,
            nullable: false,
            value: Some(Box::new(value)),
        }
    }

    /// A field whose declared type permits an absent value
    pub fn nullable<T: Any + Send + Sync>(name: &'static str, value: Option<T>) -> Self {
        Self {
            name,
            nullable: true,
            value: value.map(|v| Box::new(v) as DynValue),
        }
    }
}

impl fmt::Debug for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestField")
            .field("name", &self.name)
            .field("nullable", &self.nullable)
            .field("present", &self.value.is_some())
            .finish()
    }
}
