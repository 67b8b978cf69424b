//! The traits that connect a struct to the binding engine.
//!
//! - [`Decode`] turns one resolved string into a field value. Built-in types
//!   implement it in [`coerce`](crate::coerce); implement it yourself to bind a
//!   domain type (an address, an enum) as a single leaf value.
//! - [`FlagStruct`] is implemented by `#[derive(FlagStruct)]` and walks a
//!   struct's fields in declaration order.
//! - [`Nested`] is what `#[flag(nested)]` fields go through. The derive
//!   implements it for every `FlagStruct`; `Option` and `Box` forward to the
//!   inner value.

use std::fmt;

use crate::error::FlagError;

/// Error type returned by [`Decode`] implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The closed set of field kinds the engine knows how to coerce.
///
/// Used for diagnostics: a failed coercion reports the kind it was aiming at,
/// and [`Kind::Custom`] routes failures to
/// [`FlagError::CustomDecodeFailure`] instead of
/// [`FlagError::CoercionFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    String,
    /// `std::time::Duration`, parsed from literals like `1m30s`.
    Duration,
    /// An untyped value that keeps the raw string.
    Open,
    /// A `;`-delimited sequence.
    Slice,
    /// A user type with its own [`Decode`] implementation.
    Custom,
}

impl Kind {
    /// Whether this kind is handled by the engine itself rather than a user
    /// [`Decode`] implementation.
    pub fn is_builtin(self) -> bool {
        self != Kind::Custom
    }

    fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::Usize => "usize",
            Kind::String => "string",
            Kind::Duration => "duration",
            Kind::Open => "open",
            Kind::Slice => "slice",
            Kind::Custom => "custom",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can decode its string representation into itself.
///
/// This is the extension point for domain types. A type implementing
/// `Decode` is always bound as a leaf: tag it with `#[flag("name")]`, and the
/// engine hands it the resolved string without looking inside.
///
/// ```ignore
/// #[derive(Default)]
/// pub struct Level(u8);
///
/// impl Decode for Level {
///     fn decode(&mut self, value: &str) -> Result<(), BoxError> {
///         self.0 = match value {
///             "low" => 1,
///             "high" => 9,
///             other => return Err(format!("unknown level '{other}'").into()),
///         };
///         Ok(())
///     }
/// }
/// ```
pub trait Decode {
    /// Replace `self` with the value described by `value`.
    fn decode(&mut self, value: &str) -> Result<(), BoxError>;

    /// The kind reported in diagnostics. Leave the default for your own types.
    fn kind(&self) -> Kind {
        Kind::Custom
    }
}

/// A struct whose public, annotated fields can be bound from arguments.
///
/// Implemented by `#[derive(FlagStruct)]`; see the crate docs for the
/// attribute syntax.
pub trait FlagStruct {
    /// Bind every annotated field from `args`, in declaration order.
    ///
    /// Stops at the first error. Fields bound before the failure keep their
    /// new values.
    fn bind_flags<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), FlagError>;
}

/// A field that `#[flag(nested)]` descends into.
pub trait Nested {
    fn descend<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), FlagError>;
}

impl<T: Nested> Nested for Option<T> {
    /// Only descends into `Some`. A `None` field is never allocated.
    fn descend<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), FlagError> {
        match self {
            Some(inner) => inner.descend(args),
            None => {
                tracing::trace!("skipping unset nested field");
                Ok(())
            }
        }
    }
}

impl<T: Nested> Nested for Box<T> {
    fn descend<S: AsRef<str>>(&mut self, args: &[S]) -> Result<(), FlagError> {
        (**self).descend(args)
    }
}
