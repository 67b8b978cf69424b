//! Bind command-line arguments into annotated Rust structs. Define a struct,
//! tag its fields, and go.
//!
//! ```ignore
//! use flagbind::FlagStruct;
//!
//! #[derive(FlagStruct, Default)]
//! pub struct Config {
//!     #[flag("host,default=localhost")]
//!     pub host: String,
//!
//!     #[flag("port,allowed=80;443")]
//!     pub port: u16,
//!
//!     #[flag("timeout,default=30s")]
//!     pub timeout: std::time::Duration,
//! }
//!
//! let mut config = Config::default();
//! flagbind::decode_from(&mut config, &["-port=443"])?;
//! ```
//!
//! No parsing code: each field carries an annotation that names its flag and
//! the rules around it, and the derive generates the walk.
//!
//! # Design: the struct is the schema
//!
//! The struct decides everything the engine does:
//!
//! - **Which fields bind**: `pub` fields with a `#[flag(...)]` attribute.
//!   Private fields are never touched, even when their attribute is
//!   malformed. Untagged fields are left alone.
//! - **How a value is read**: the field's type. Every type implements
//!   [`Decode`]; built-in types parse primitives, `Vec<T>` splits on `;`, and
//!   your own types decode however they like.
//! - **Where nesting happens**: `#[flag(nested)]` on a struct-typed field
//!   binds that struct's own annotated fields from the same arguments.
//!
//! # Annotation grammar
//!
//! ```text
//! <flag>[,required][,default=<value>][,allowed=<v1>;<v2>;...]
//! ```
//!
//! - **`<flag>`** is required. An empty name fails with
//!   [`FlagError::MalformedAnnotation`].
//! - **`required`** fails with [`FlagError::MissingRequiredFlag`] when no
//!   argument names the flag.
//! - **`default=`** is used when no argument names the flag. It cannot be
//!   combined with `required` ([`FlagError::ConflictingAnnotation`]).
//! - **`allowed=`** restricts non-empty values to a `;`-separated list
//!   ([`FlagError::ValueNotAllowed`]). Empty entries are ignored.
//!
//! Unknown options are ignored, so annotations stay forward compatible.
//! Annotations are checked when the field is reached, not at compile time:
//! a broken annotation aborts the bind at that field.
//!
//! # Argument matching
//!
//! Arguments are `<prefix><flag>=<value>`. The prefix is free (`-`, `--`,
//! nothing). An argument matches when the text before its first `=` ends
//! with the flag name, and the first match wins.
//!
//! Suffix matching means a flag named `a` also matches `-data=1`. Pick flag
//! names that are not suffixes of each other.
//!
//! An argument with an empty value (`-host=`) is present but empty: it does
//! not trigger the default and the field is left as it was.
//!
//! # Value precedence
//!
//! ```text
//! Field's current value     whatever the struct held before the call
//!        ↑ replaced by
//! default=...               when no argument names the flag
//!        ↑ replaced by
//! Argument                  first -flag=value in the list
//! ```
//!
//! # Supported field types
//!
//! | Type | Input |
//! |------|-------|
//! | `bool` | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | `f32`, `f64` | `1.5`, `-2e3`, `inf`; values that overflow the width fail |
//! | `i8`..`i64`, `isize` | `42`, `-7`, `0x2a`, `0o52`, `052`, `0b101010` |
//! | `u8`..`u64`, `usize` | as above, unsigned |
//! | `String` | verbatim |
//! | `std::time::Duration` | `300ms`, `1m30s`, `1.5h`, `0`; negative literals such as `-1s` fail |
//! | `serde_json::Value` | verbatim, as a JSON string |
//! | `Option<T>` | as `T`, stored as `Some` |
//! | `Vec<T>` | `a;b;c`, elements trimmed; elements that fail are dropped |
//! | [`Json<T>`] | a JSON document for any `T: DeserializeOwned` |
//! | your type | via your [`Decode`] impl |
//!
//! # Nested structs
//!
//! `#[flag(nested)]` works on any type deriving [`FlagStruct`], on
//! `Option<T>` and on `Box<T>`. An `Option` that is `None` stays `None`: the
//! engine never allocates a nested struct for you. `nested` always recurses,
//! even when the type also implements [`Decode`]: a struct that should decode
//! itself from one value must be tagged with an annotation instead, and is
//! then a single leaf value.
//!
//! # Custom types
//!
//! Implement [`Decode`] to bind anything that has a string form:
//!
//! ```ignore
//! #[derive(Default)]
//! pub struct Endpoint { pub host: String, pub port: u16 }
//!
//! impl Decode for Endpoint {
//!     fn decode(&mut self, value: &str) -> Result<(), BoxError> {
//!         let (host, port) = value.rsplit_once(':').ok_or("expected host:port")?;
//!         self.port = port.parse()?;
//!         self.host = host.to_string();
//!         Ok(())
//!     }
//! }
//! ```
//!
//! Failures from your impl surface as [`FlagError::CustomDecodeFailure`];
//! failures from built-in types as [`FlagError::CoercionFailure`]. Both carry
//! the flag name, the raw value and the underlying error.
//!
//! # Where arguments come from
//!
//! The engine never reads process state on its own:
//!
//! - [`decode_from`] takes an explicit argument list.
//! - [`decode`] is the convenience form that reads `std::env::args()`.
//! - [`Binder`] collects several sources before binding.
//! - [`FlagArgs`] (behind the `clap` feature, on by default) captures trailing
//!   `name=value` arguments in a clap application.
//!
//! # Error handling
//!
//! All fallible operations return [`FlagError`]. The first error aborts the
//! bind; fields bound before it keep their values. The one failure that does
//! not abort is a sequence element that fails to decode: it is dropped and
//! logged at `debug` level through `tracing`.

extern crate self as flagbind;

pub mod error;
pub mod types;

mod annotation;
mod builder;
#[cfg(feature = "clap")]
mod cli;
mod coerce;
mod duration;
mod json;
mod lookup;
mod slice;
mod walk;

#[cfg(test)]
mod fixtures;

pub use annotation::{Annotation, resolve};
pub use builder::{Binder, Flagbind};
#[cfg(feature = "clap")]
pub use cli::FlagArgs;
pub use coerce::{ParseError, parse_bool, parse_int, parse_uint};
pub use duration::{DurationError, parse_duration};
pub use error::FlagError;
pub use flagbind_derive::FlagStruct;
pub use json::Json;
pub use lookup::lookup;
pub use slice::decode_slice;
pub use types::{BoxError, Decode, Kind, Nested};
pub use walk::{decode, decode_from};

// Same name as the derive above; traits and macros live in separate namespaces.
pub use types::FlagStruct;

#[doc(hidden)]
pub mod __private {
    pub use crate::walk::bind_field;
}
