//! The per-field step the derived [`FlagStruct`] impls run, and the entry
//! points that start a walk.
//!
//! `#[derive(FlagStruct)]` expands each public field into one call, in
//! declaration order:
//!
//! - `#[flag(nested)]` → [`Nested::descend`](crate::Nested::descend), recursing with the same
//!   arguments.
//! - `#[flag("...")]` → [`bind_field`]: resolve the annotation, then hand the
//!   value to the field's [`Decode`] impl.
//!
//! Untagged and non-public fields produce no code at all.

use tracing::trace;

use crate::annotation::Annotation;
use crate::error::FlagError;
use crate::types::{Decode, FlagStruct};

/// Resolve `annotation` against `args` and decode the result into `field`.
///
/// An empty resolution leaves the field untouched. Decode failures are
/// wrapped with the raw value: user [`Decode`] impls become
/// [`FlagError::CustomDecodeFailure`], built-in kinds
/// [`FlagError::CoercionFailure`].
pub fn bind_field<T, S>(
    field: &mut T,
    field_name: &str,
    annotation: &str,
    args: &[S],
) -> Result<(), FlagError>
where
    T: Decode,
    S: AsRef<str>,
{
    let annotation = Annotation::parse(annotation)?;
    let Some(value) = annotation.resolve(args)? else {
        trace!(field = field_name, flag = annotation.flag, "nothing to assign");
        return Ok(());
    };

    let kind = field.kind();
    field.decode(&value).map_err(|source| {
        let flag = annotation.flag.to_string();
        if kind.is_builtin() {
            FlagError::CoercionFailure {
                flag,
                value: value.clone(),
                kind,
                source,
            }
        } else {
            FlagError::CustomDecodeFailure {
                flag,
                value: value.clone(),
                source,
            }
        }
    })?;

    trace!(field = field_name, flag = annotation.flag, %kind, "assigned");
    Ok(())
}

/// Bind `target` from an explicit argument list.
///
/// This is the engine entry point: it reads nothing from the process.
pub fn decode_from<T, S>(target: &mut T, args: &[S]) -> Result<(), FlagError>
where
    T: FlagStruct,
    S: AsRef<str>,
{
    target.bind_flags(args)
}

/// Bind `target` from the process arguments, skipping the program name.
pub fn decode<T: FlagStruct>(target: &mut T) -> Result<(), FlagError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    decode_from(target, &args)
}
