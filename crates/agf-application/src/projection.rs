//! Request Projector
//!
//! Turns a request's fields into the positional argument list the
//! construction routine is invoked with. The binding scheme is positional,
//! not named: the caller supplies exactly as many non-extra fields, in
//! exactly the order, as the routine expects, minus excluded ones. The
//! per-call options exist to patch the two escape hatches, excluding fields
//! the routine does not take and appending server-computed extras it does.

use agf_domain::{Error, FactoryArg, FactoryOptions, FactoryRequest, Result};
use tracing::debug;

/// Project a request into the ordered argument list.
///
/// Field order follows the request's declared order throughout. Excluded
/// names remove their first case-sensitive match; a name matching no field
/// is skipped. Zero remaining fields after exclusion is terminal, whether
/// or not extras were supplied. A present value projects as-is; an absent
/// value projects the explicit no-value marker when the field is nullable
/// and fails otherwise, naming the field. Extras append after the projected
/// fields in insertion order and are never checked for absence.
pub fn project_arguments<R>(request: &R, options: FactoryOptions) -> Result<Vec<FactoryArg>>
where
    R: FactoryRequest + ?Sized,
{
    let mut fields = request.fields();
    let (excluded, additional) = options.into_parts();

    for name in &excluded {
        match fields.iter().position(|field| field.name == name.as_str()) {
            Some(index) => {
                fields.remove(index);
            }
            None => debug!(field = %name, "excluded field not present on the request"),
        }
    }

    if fields.is_empty() {
        return Err(Error::NoArguments {
            type_name: request.type_name(),
        });
    }

    let mut args = Vec::with_capacity(fields.len() + additional.len());
    for field in fields {
        match (field.value, field.nullable) {
            (Some(value), _) => args.push(FactoryArg::Value(value)),
            (None, true) => args.push(FactoryArg::Absent),
            (None, false) => return Err(Error::RequiredValueMissing { field: field.name }),
        }
    }

    args.extend(
        additional
            .into_iter()
            .map(|(_, value)| FactoryArg::Value(value)),
    );

    Ok(args)
}
