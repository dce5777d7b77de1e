//! Per-call factory policy
//!
//! A [`FactoryOptions`] value is built fresh for every `create_entity` call,
//! is never cached and never shared across calls. The caller's configurator
//! is a plain `FnOnce(FactoryOptions) -> FactoryOptions`; there is no shared
//! mutable policy object.

use crate::metadata::DynValue;
use std::any::Any;
use std::fmt;

/// Per-call configuration controlling request projection
#[derive(Default)]
pub struct FactoryOptions {
    excluded: Vec<String>,
    additional: Vec<(String, DynValue)>,
}

impl FactoryOptions {
    /// Create an empty policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Name request fields that must not be passed to the construction
    /// routine.
    ///
    /// Commands are often sent with every property the business logic needs,
    /// yet not all of them take part in constructing the aggregate. Names
    /// are matched case-sensitively against the request's declared fields;
    /// excluding a field the routine does expect leaves the argument list
    /// short and surfaces as a binding failure at invocation.
    pub fn exclude_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append one server-computed argument the request intentionally omits.
    ///
    /// Extras are appended after the projected request fields, in the order
    /// they were added here. They are assumed already valid and are never
    /// checked for absence.
    pub fn add_property<S, T>(mut self, name: S, value: T) -> Self
    where
        S: Into<String>,
        T: Any + Send + Sync,
    {
        self.additional.push((name.into(), Box::new(value)));
        self
    }

    /// Append several server-computed arguments, preserving iteration order
    pub fn add_properties<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, DynValue)>,
    {
        self.additional.extend(pairs);
        self
    }

    /// Field names excluded from projection, in the order supplied
    pub fn excluded_properties(&self) -> &[String] {
        &self.excluded
    }

    /// Extra arguments to append, in insertion order
    pub fn additional_properties(&self) -> &[(String, DynValue)] {
        &self.additional
    }

    /// Decompose into the exclude list and the owned extra values
    pub fn into_parts(self) -> (Vec<String>, Vec<(String, DynValue)>) {
        (self.excluded, self.additional)
    }
}

impl fmt::Debug for FactoryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryOptions")
            .field("excluded", &self.excluded)
            .field(
                "additional",
                &self
                    .additional
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
