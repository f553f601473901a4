//! Formatting error types.

use std::fmt;
use thiserror::Error;

/// The error type for composite formatting failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The template string was absent.
    #[error("argument `source` must not be None")]
    MissingSource,

    /// A placeholder referenced an argument that was not supplied.
    #[error("format index {index} must be less than the number of arguments ({supplied})")]
    IndexOutOfRange {
        /// The index the placeholder referenced.
        index: usize,
        /// How many arguments were supplied.
        supplied: usize,
    },

    /// The template was not in a correct format.
    #[error("input string was not in a correct format (byte {at})")]
    Malformed {
        /// Byte offset of the offending character in the template.
        at: usize,
    },

    /// A substituted argument failed to render itself.
    #[error("failed to format a substituted argument")]
    Fmt(#[from] fmt::Error),
}
