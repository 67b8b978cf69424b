//! The per-field annotation grammar and value resolution.
//!
//! ```text
//! <flag>[,required][,default=<value>][,allowed=<v1>;<v2>;...]
//! ```
//!
//! Resolution order for one field:
//!
//! 1. Parse and validate the annotation (`required` and `default` are
//!    mutually exclusive).
//! 2. Look the flag up in the arguments.
//! 3. Missing and `required` is an error; missing otherwise falls back to
//!    the default, which may be empty.
//! 4. A non-empty value must be in the allow-list when one is given.
//!
//! An empty result means "leave the field alone".

use tracing::debug;

use crate::error::FlagError;
use crate::lookup::lookup;

/// A parsed annotation. Borrows from the annotation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'a> {
    pub flag: &'a str,
    pub default: Option<&'a str>,
    pub required: bool,
    /// Allowed values with empty entries removed. `None` when the annotation
    /// has no `allowed=` option.
    pub allowed: Option<Vec<&'a str>>,
}

impl<'a> Annotation<'a> {
    /// Parse an annotation string.
    ///
    /// Unknown options are ignored. When an option repeats, the first
    /// occurrence wins.
    pub fn parse(raw: &'a str) -> Result<Self, FlagError> {
        let mut parts = raw.split(',');
        let flag = parts.next().unwrap_or_default();
        if flag.is_empty() {
            return Err(FlagError::MalformedAnnotation {
                annotation: raw.to_string(),
            });
        }

        let mut required = false;
        let mut default = None;
        let mut allowed = None;
        for option in parts {
            if option == "required" {
                required = true;
            } else if let Some(value) = option.strip_prefix("default=") {
                default.get_or_insert(value);
            } else if let Some(list) = option.strip_prefix("allowed=") {
                allowed.get_or_insert_with(|| list.split(';').filter(|v| !v.is_empty()).collect());
            }
        }

        if required && default.is_some() {
            return Err(FlagError::ConflictingAnnotation {
                flag: flag.to_string(),
            });
        }

        Ok(Self {
            flag,
            default,
            required,
            allowed,
        })
    }

    /// Resolve this annotation against `args`.
    ///
    /// Returns `None` when there is nothing to assign: the flag is absent with
    /// no default, or it resolved to an empty string.
    pub fn resolve<S: AsRef<str>>(&self, args: &[S]) -> Result<Option<String>, FlagError> {
        let value = match lookup(args, self.flag) {
            Some(value) => {
                debug!(flag = self.flag, value, "resolved from arguments");
                value
            }
            None if self.required => {
                return Err(FlagError::MissingRequiredFlag {
                    flag: self.flag.to_string(),
                });
            }
            None => {
                let value = self.default.unwrap_or_default();
                if !value.is_empty() {
                    debug!(flag = self.flag, value, "resolved from default");
                }
                value
            }
        };

        if value.is_empty() {
            return Ok(None);
        }

        if let Some(allowed) = &self.allowed
            && !allowed.contains(&value)
        {
            return Err(FlagError::ValueNotAllowed {
                flag: self.flag.to_string(),
                value: value.to_string(),
                allowed: allowed.iter().map(|v| v.to_string()).collect(),
            });
        }

        Ok(Some(value.to_string()))
    }
}

/// Parse `raw` and resolve it against `args` in one step.
pub fn resolve<S: AsRef<str>>(args: &[S], raw: &str) -> Result<Option<String>, FlagError> {
    Annotation::parse(raw)?.resolve(args)
}
