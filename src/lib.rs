//! Runtime composite formatting, substitute indexed arguments into
//! `{0}`-style templates.
//!
//! Templates reference their arguments by position: `{0}` is the first
//! argument, `{1}` the second, and so on. Placeholders may repeat and may
//! appear in any order; `{{` and `}}` emit literal braces. Arguments are
//! rendered with their [`std::fmt::Display`] implementations.
//!
//! ```
//! use format_with::FormatWith;
//!
//! let greeting = "Hey my name is {0}, I'm {1}".format_with(&[&"Mickaël", &19])?;
//! assert_eq!(greeting, "Hey my name is Mickaël, I'm 19");
//! # Ok::<(), format_with::FormatError>(())
//! ```

mod error;
mod fmt;
mod string;

pub use crate::error::FormatError;
pub use crate::fmt::{format, format_opt};
pub use crate::string::FormatWith;
