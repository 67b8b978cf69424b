//! `;`-delimited sequences.
//!
//! `"1; 2;;3"` decodes into `vec![1, 2, 3]`. Segments are trimmed and empty
//! ones dropped. An element that fails to decode is dropped too: the result
//! holds only the elements that parsed, in their original order, and the
//! field is assigned even when nothing survived.

use tracing::debug;

use crate::types::{BoxError, Decode, Kind};

/// Split `value` on `;` and decode each non-empty, trimmed segment into a
/// fresh `T`, keeping the successes.
pub fn decode_slice<T: Decode + Default>(value: &str) -> Vec<T> {
    let segments: Vec<&str> = value
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut decoded = Vec::with_capacity(segments.len());
    for segment in segments {
        let mut element = T::default();
        match element.decode(segment) {
            Ok(()) => decoded.push(element),
            Err(error) => {
                debug!(element = segment, %error, "dropping sequence element that failed to decode");
            }
        }
    }
    decoded
}

/// Never fails; see [`decode_slice`].
impl<T: Decode + Default> Decode for Vec<T> {
    fn decode(&mut self, value: &str) -> Result<(), BoxError> {
        *self = decode_slice(value);
        Ok(())
    }

    fn kind(&self) -> Kind {
        Kind::Slice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_sequences() {
        let cases: &[(&str, &[i64])] = &[
            ("a", &[]),
            ("", &[]),
            (";a;", &[]),
            (";;a", &[]),
            ("1;a", &[1]),
            ("1;", &[1]),
            ("1;2", &[1, 2]),
            ("1;;3", &[1, 3]),
            ("1;a;3", &[1, 3]),
            (" 4 ; 5 ", &[4, 5]),
        ];
        let mut field: Vec<i64> = Vec::new();
        for (input, expected) in cases {
            field.decode(input).unwrap();
            assert_eq!(&field, expected, "input {input:?}");
        }
    }

    #[test]
    fn decoding_twice_is_stable() {
        let mut field: Vec<i32> = vec![9];
        field.decode("1;2;3").unwrap();
        assert_eq!(field, vec![1, 2, 3]);
        field.decode("1;2;3").unwrap();
        assert_eq!(field, vec![1, 2, 3]);
    }

    #[test]
    fn whitespace_only_segments_are_dropped() {
        let field: Vec<String> = decode_slice("a; ;b");
        assert_eq!(field, vec!["a", "b"]);
    }

    #[test]
    fn failed_elements_keep_order() {
        let field: Vec<u8> = decode_slice("3;300;x;1;2");
        assert_eq!(field, vec![3, 1, 2]);
    }

    #[test]
    fn durations() {
        use std::time::Duration;
        let field: Vec<Duration> = decode_slice("1s;10;2m");
        assert_eq!(field, vec![Duration::from_secs(1), Duration::from_secs(120)]);
    }

    #[test]
    fn reports_slice_kind() {
        let field: Vec<bool> = Vec::new();
        assert_eq!(field.kind(), Kind::Slice);
    }
}
