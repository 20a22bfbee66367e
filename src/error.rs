//! Errors produced when building a [`Tree`][crate::Tree] from text.

use std::num::ParseIntError;

use thiserror::Error;

/// A token in the input to [`Tree::from_str`][std::str::FromStr::from_str] that isn't an integer
/// key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid key {token:?}")]
pub struct ParseTreeError {
    /// The offending token, exactly as it appeared in the input.
    pub token: String,
    /// Why the token couldn't be parsed.
    #[source]
    pub source: ParseIntError,
}
