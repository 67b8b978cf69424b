//! Find a flag's raw value in an argument list.
//!
//! Arguments look like `<prefix><name>=<value>`. The prefix is whatever the
//! caller uses (`-`, `--`, nothing) and is never interpreted: an argument
//! matches when the text before its first `=` ends with the flag name.
//!
//! Suffix matching is permissive on purpose. A short name such as `a` also
//! matches `-data=...`; existing annotations rely on it, so it stays.

/// Return the value of the first argument whose key ends with `name`.
///
/// Arguments without `=` are ignored. `-name=` yields `Some("")`; only a
/// missing argument yields `None`.
///
/// Takes a slice of anything string-like so callers can pass `std::env::args()`
/// output or test literals without copying.
pub fn lookup<'a, S: AsRef<str>>(args: &'a [S], name: &str) -> Option<&'a str> {
    args.iter().find_map(|arg| {
        let (key, value) = arg.as_ref().split_once('=')?;
        key.ends_with(name).then_some(value)
    })
}
