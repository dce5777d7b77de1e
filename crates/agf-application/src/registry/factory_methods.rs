//! Construction-Routine Registry
//!
//! The static-registration replacement for attribute-based method discovery:
//! each aggregate type contributes one [`FactoryMethodEntry`] describing its
//! designated construction routine, and resolution scans the slice instead
//! of scanning type metadata at runtime.

use agf_domain::ConstructFn;

/// Registry entry for a designated construction routine
///
/// Declared next to the aggregate type it constructs and submitted with
/// `#[linkme::distributed_slice(FACTORY_METHODS)]`.
pub struct FactoryMethodEntry {
    /// Name of the aggregate type the routine is declared for
    pub aggregate: &'static str,
    /// Optional for-type tag. A tagged entry is selected only when the tag
    /// equals the target type's name; a mismatch rejects the entry outright.
    pub method_for: Option<&'static str>,
    /// Routine name, for diagnostics
    pub method_name: &'static str,
    /// The construction routine itself
    pub construct: ConstructFn,
}

// Auto-collection via linkme distributed slices - aggregates submit entries at compile time
#[linkme::distributed_slice]
pub static FACTORY_METHODS: [FactoryMethodEntry] = [..];

/// Scan the registry for the target type's construction routine.
///
/// Candidates are the entries declared for the target type. A tagged
/// candidate must name the target exactly; an untagged candidate is accepted
/// unconditionally. When several untagged candidates exist the first found
/// wins, with no ambiguity error.
pub fn scan_factory_methods(type_name: &str) -> Option<&'static FactoryMethodEntry> {
    FACTORY_METHODS.iter().find(|entry| {
        if entry.aggregate != type_name {
            return false;
        }
        match entry.method_for {
            Some(tag) => tag == type_name,
            None => true,
        }
    })
}

/// List all registered construction routines
///
/// Returns `(aggregate, method_name)` pairs. Useful for diagnostics and
/// admin tooling.
pub fn list_factory_methods() -> Vec<(&'static str, &'static str)> {
    FACTORY_METHODS
        .iter()
        .map(|entry| (entry.aggregate, entry.method_name))
        .collect()
}
