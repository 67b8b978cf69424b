//! [`Json<T>`]: bind a flag whose value is a JSON document.
//!
//! ```ignore
//! #[derive(FlagStruct, Default)]
//! pub struct Config {
//!     #[flag("limits,default={\"rps\":10}")]
//!     pub limits: Json<Limits>,
//! }
//! ```
//!
//! Annotation options are split on `,`, so a JSON default containing commas
//! must come from the arguments rather than `default=`.

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::types::{BoxError, Decode};

/// A leaf value deserialized from JSON text with `serde_json`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: DeserializeOwned> Decode for Json<T> {
    fn decode(&mut self, value: &str) -> Result<(), BoxError> {
        self.0 = serde_json::from_str(value)?;
        Ok(())
    }
}
