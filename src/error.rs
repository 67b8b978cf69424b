use thiserror::Error;

use crate::types::{BoxError, Kind};

/// Everything that can stop a bind.
///
/// The first error encountered aborts the walk. Fields bound before it keep
/// their new values.
#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum FlagError {
    #[error("Annotation for flag '{flag}' cannot combine 'required' and 'default'")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(flagbind::conflicting_annotation),
            help("drop either ',required' or ',default=...' from the annotation")
        )
    )]
    ConflictingAnnotation { flag: String },

    #[error("Malformed annotation '{annotation}': the flag name must be defined")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(flagbind::malformed_annotation),
            help("annotations start with the flag name, e.g. \"port,default=8080\"")
        )
    )]
    MalformedAnnotation { annotation: String },

    #[error("Flag '{flag}' is missing")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(code(flagbind::missing_flag), help("pass the flag as -<name>=<value>"))
    )]
    MissingRequiredFlag { flag: String },

    #[error("Value '{value}' is not allowed for flag '{flag}', use one of {allowed:?}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(flagbind::value_not_allowed)))]
    ValueNotAllowed {
        flag: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Could not decode value '{value}' of flag '{flag}' to kind `{kind}`: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(flagbind::coercion)))]
    CoercionFailure {
        flag: String,
        value: String,
        kind: Kind,
        source: BoxError,
    },

    #[error("Could not decode value '{value}' of flag '{flag}': {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(flagbind::custom_decode)))]
    CustomDecodeFailure {
        flag: String,
        value: String,
        source: BoxError,
    },
}

impl FlagError {
    /// The flag name the error is about, when there is one.
    pub fn flag(&self) -> Option<&str> {
        match self {
            FlagError::MalformedAnnotation { .. } => None,
            FlagError::ConflictingAnnotation { flag }
            | FlagError::MissingRequiredFlag { flag }
            | FlagError::ValueNotAllowed { flag, .. }
            | FlagError::CoercionFailure { flag, .. }
            | FlagError::CustomDecodeFailure { flag, .. } => Some(flag),
        }
    }
}
