//! Built-in coercions from a resolved string to a field value.
//!
//! Every supported primitive implements [`Decode`] here, reporting its
//! [`Kind`]. Durations live in [`duration`](crate::duration) and sequences in
//! [`slice`](crate::slice).
//!
//! | Type | Accepted input |
//! |------|----------------|
//! | `bool` | `1 t T TRUE true True`, `0 f F FALSE false False` |
//! | `f32`, `f64` | decimal or exponent notation, `inf`, `nan`; overflow for the width fails |
//! | signed integers | optional sign, then decimal, `0x`, `0o`, `0b`, or a leading `0` for octal |
//! | unsigned integers | as signed, without a sign |
//! | `String` | anything, verbatim |
//! | `serde_json::Value` | anything, stored as `Value::String` |
//! | `Option<T>` | whatever `T` accepts |
//!
//! Integers accept `_` between digits when written with a base prefix
//! (`0x_ff`, `0b1010_1010`) and are range-checked against the field's width.

use thiserror::Error;

use crate::types::{BoxError, Decode, Kind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parsing \"{0}\": invalid syntax")]
    Syntax(String),
    #[error("parsing \"{0}\": value out of range")]
    Range(String),
}

/// Parse a boolean token.
pub fn parse_bool(s: &str) -> Result<bool, ParseError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseError::Syntax(s.to_string())),
    }
}

/// Parse an unsigned magnitude, detecting the base from its prefix.
fn parse_magnitude(input: &str, digits: &str) -> Result<u128, ParseError> {
    let syntax = || ParseError::Syntax(input.to_string());

    let (radix, body, prefixed) = match digits.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &digits[2..], true),
        [b'0', b'o' | b'O', ..] => (8, &digits[2..], true),
        [b'0', b'b' | b'B', ..] => (2, &digits[2..], true),
        [b'0', _, ..] => (8, &digits[1..], true),
        _ => (10, digits, false),
    };

    if body.contains('_') && (!prefixed || body.ends_with('_') || body.contains("__")) {
        return Err(syntax());
    }
    let cleaned: String = body.chars().filter(|c| *c != '_').collect();
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(syntax());
    }

    u128::from_str_radix(&cleaned, radix).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => ParseError::Range(input.to_string()),
        _ => syntax(),
    })
}

/// Parse a signed integer of any width, base detected from the prefix.
pub fn parse_int<T: TryFrom<i128>>(s: &str) -> Result<T, ParseError> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = parse_magnitude(s, digits)?;
    let range = || ParseError::Range(s.to_string());

    let value = if negative {
        if magnitude > i128::MAX as u128 + 1 {
            return Err(range());
        }
        (magnitude as i128).wrapping_neg()
    } else {
        i128::try_from(magnitude).map_err(|_| range())?
    };
    T::try_from(value).map_err(|_| range())
}

/// Parse an unsigned integer of any width, base detected from the prefix.
pub fn parse_uint<T: TryFrom<u128>>(s: &str) -> Result<T, ParseError> {
    let magnitude = parse_magnitude(s, s)?;
    T::try_from(magnitude).map_err(|_| ParseError::Range(s.to_string()))
}

impl Decode for bool {
    fn decode(&mut self, value: &str) -> Result<(), BoxError> {
        *self = parse_bool(value)?;
        Ok(())
    }

    fn kind(&self) -> Kind {
        Kind::Bool
    }
}

/// Whether `s` spells infinity outright rather than overflowing into it.
fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! decode_float {
    ($($ty:ty => $kind:ident),*) => {$(
        impl Decode for $ty {
            fn decode(&mut self, value: &str) -> Result<(), BoxError> {
                let parsed = value.parse::<$ty>()?;
                if parsed.is_infinite() && !is_infinity_literal(value) {
                    return Err(ParseError::Range(value.to_string()).into());
                }
                *self = parsed;
                Ok(())
            }

            fn kind(&self) -> Kind {
                Kind::$kind
            }
        }
    )*};
}

macro_rules! decode_int {
    ($parse:ident: $($ty:ty => $kind:ident),*) => {$(
        impl Decode for $ty {
            fn decode(&mut self, value: &str) -> Result<(), BoxError> {
                *self = $parse::<$ty>(value)?;
                Ok(())
            }

            fn kind(&self) -> Kind {
                Kind::$kind
            }
        }
    )*};
}

decode_float!(f32 => F32, f64 => F64);
decode_int!(parse_int: i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);
decode_int!(parse_uint: u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize);

impl Decode for String {
    fn decode(&mut self, value: &str) -> Result<(), BoxError> {
        value.clone_into(self);
        Ok(())
    }

    fn kind(&self) -> Kind {
        Kind::String
    }
}

/// An open value: whatever was passed, kept as a JSON string.
impl Decode for serde_json::Value {
    fn decode(&mut self, value: &str) -> Result<(), BoxError> {
        *self = serde_json::Value::String(value.to_string());
        Ok(())
    }

    fn kind(&self) -> Kind {
        Kind::Open
    }
}

/// Decodes into a fresh `T` and stores `Some` on success. A failure leaves
/// the option as it was.
impl<T: Decode + Default> Decode for Option<T> {
    fn decode(&mut self, value: &str) -> Result<(), BoxError> {
        let mut inner = T::default();
        inner.decode(value)?;
        *self = Some(inner);
        Ok(())
    }

    fn kind(&self) -> Kind {
        match self {
            Some(inner) => inner.kind(),
            None => T::default().kind(),
        }
    }
}
