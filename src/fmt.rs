//! Runtime composite formatting of `{index}` templates.

use crate::error::FormatError;
use std::fmt::{Display, Write};

/// Substitutes `args` into the positional `{index}` placeholders of `source`.
///
/// Placeholders may repeat and may appear in any order; each argument is
/// rendered with its [`Display`] implementation. `{{` and `}}` emit literal
/// braces. A template without placeholders is returned unchanged, whatever
/// `args` contains.
///
/// # Errors
///
/// Returns [`FormatError::IndexOutOfRange`] when a placeholder references an
/// argument that was not supplied, and [`FormatError::Malformed`] when the
/// template syntax is invalid: an unmatched brace, a `{` not followed by a
/// decimal index, or an unterminated placeholder.
pub fn format(source: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let bytes = source.as_bytes();
    let mut output = String::with_capacity(source.len());

    // start of the literal run not yet copied to `output`
    let mut rest = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                output.push_str(&source[rest..i]);
                if bytes.get(i + 1) == Some(&b'{') {
                    output.push('{');
                    i += 2;
                } else {
                    let (index, end) = parse_index(source, i)?;
                    let arg = args.get(index).ok_or(FormatError::IndexOutOfRange {
                        index,
                        supplied: args.len(),
                    })?;
                    write!(output, "{}", arg)?;
                    i = end;
                }
                rest = i;
            }
            b'}' => {
                if bytes.get(i + 1) == Some(&b'}') {
                    output.push_str(&source[rest..=i]);
                    i += 2;
                    rest = i;
                } else {
                    return Err(FormatError::Malformed { at: i });
                }
            }
            _ => i += 1,
        }
    }
    output.push_str(&source[rest..]);

    Ok(output)
}

/// Formats a template that may be absent.
///
/// `None` fails with [`FormatError::MissingSource`] before any scanning is
/// attempted; `Some` behaves exactly like [`format`].
#[inline]
pub fn format_opt(source: Option<&str>, args: &[&dyn Display]) -> Result<String, FormatError> {
    match source {
        Some(source) => format(source, args),
        None => Err(FormatError::MissingSource),
    }
}

// Parses the decimal index of the placeholder opening at byte `open`,
// returning the index and the offset just past the closing `}`.
fn parse_index(source: &str, open: usize) -> Result<(usize, usize), FormatError> {
    let bytes = source.as_bytes();
    let start = open + 1;
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    match bytes.get(i) {
        Some(&b'}') if i > start => {
            let index = source[start..i]
                .parse()
                .map_err(|_| FormatError::Malformed { at: start })?;
            Ok((index, i + 1))
        }
        // `{}`, `{name}`, alignment and format specifiers
        Some(_) => Err(FormatError::Malformed { at: i }),
        // unterminated placeholder
        None => Err(FormatError::Malformed { at: open }),
    }
}

/// Formats a template with a variadic argument list.
///
/// The first argument `format_with!` receives is the template. Each remaining
/// argument is substituted by position, so `{0}` refers to the first value
/// after the template. Expands to a call to [`format`] and returns its
/// `Result`.
#[macro_export]
macro_rules! format_with {
    ($source:expr $(, $arg:expr)* $(,)?) => {{
        let res = $crate::format($source, &[$(&$arg as &dyn ::std::fmt::Display),*]);
        res
    }}
}
