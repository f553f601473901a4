//! String extensions.

use crate::error::FormatError;
use crate::fmt;
use std::borrow::Cow;
use std::fmt::Display;

/// A trait for formatting a template with positional arguments.
pub trait FormatWith {
    /// Substitutes `args` into the `{index}` placeholders of the given value.
    fn format_with(&self, args: &[&dyn Display]) -> Result<String, FormatError>;
}

impl FormatWith for str {
    #[inline]
    fn format_with(&self, args: &[&dyn Display]) -> Result<String, FormatError> {
        fmt::format(self, args)
    }
}

impl FormatWith for Cow<'_, str> {
    #[inline]
    fn format_with(&self, args: &[&dyn Display]) -> Result<String, FormatError> {
        self.as_ref().format_with(args)
    }
}

impl FormatWith for String {
    #[inline]
    fn format_with(&self, args: &[&dyn Display]) -> Result<String, FormatError> {
        self.as_str().format_with(args)
    }
}
