//! Source normalization — the first pass over raw QlJson text.
//!
//! A single left-to-right scan that:
//!
//! - drops whitespace (space, tab, newline, carriage return) outside strings
//! - drops `//` line comments up to and including the terminating newline
//! - resolves string escapes (`\n`, `\t`, `\r`, `\uXXXX`) into literal characters
//!
//! The output is compact and comment-free. Inside string literals `\\` and
//! `\"` remain escaped, so every literal in the output still ends at its
//! first unescaped `"`.

use std::iter::Peekable;
use std::str::Chars;

use tracing::debug;

use crate::error::{QlJsonError, Result};
use crate::escape::push_escape;

/// Scanner state. Comments and strings cannot overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InString,
    InComment,
}

/// Normalize raw QlJson source into the compact form the value parser expects.
///
/// Whitespace and `//` comments outside string literals are dropped and
/// `\n`, `\t`, `\r` and `\uXXXX` escapes are resolved. An escaped backslash
/// or quote is the exception: `\\` and `\"` (and `\u005C`, `\u0022`) come out
/// as `\\` and `\"`, so a literal always ends at an unescaped `"`. The value
/// parser turns them into `\` and `"` when it reads the string.
///
/// # Errors
///
/// - [`QlJsonError::UnterminatedString`] if a string literal is still open at
///   the end of input
/// - [`QlJsonError::UnsupportedEscape`] for `\b` and `\f`
/// - [`QlJsonError::UnknownEscape`] for any other unrecognised escape
/// - [`QlJsonError::InvalidUnicode`] for a malformed `\u` escape
///
/// # Examples
///
/// ```
/// use qljson::normalize;
///
/// let src = "{\n  foo: \"a b\", // trailing note\n  n: 1\n}";
/// assert_eq!(normalize(src).unwrap(), r#"{foo:"a b",n:1}"#);
///
/// // escaped backslashes and quotes stay escaped
/// assert_eq!(normalize(r#""C:\\tmp""#).unwrap(), r#""C:\\tmp""#);
/// assert_eq!(normalize(r#""x\u0022y""#).unwrap(), r#""x\"y""#);
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut state = State::Normal;

    while let Some(c) = chars.next() {
        state = match state {
            State::Normal => step_normal(c, &mut chars, &mut out),
            State::InString => step_string(c, &mut chars, &mut out)?,
            State::InComment if c == '\n' => State::Normal,
            State::InComment => State::InComment,
        };
    }

    if state == State::InString {
        return Err(QlJsonError::UnterminatedString);
    }

    debug!(input_len = raw.len(), output_len = out.len(), "normalized qljson source");
    Ok(out)
}

fn step_normal(c: char, chars: &mut Peekable<Chars<'_>>, out: &mut String) -> State {
    match c {
        '"' => {
            out.push(c);
            State::InString
        }
        '/' if chars.peek() == Some(&'/') => {
            chars.next();
            State::InComment
        }
        ' ' | '\t' | '\n' | '\r' => State::Normal,
        _ => {
            out.push(c);
            State::Normal
        }
    }
}

fn step_string(c: char, chars: &mut Peekable<Chars<'_>>, out: &mut String) -> Result<State> {
    match c {
        '\\' => {
            push_escape(chars, out)?;
            Ok(State::InString)
        }
        '"' => {
            out.push(c);
            Ok(State::Normal)
        }
        _ => {
            out.push(c);
            Ok(State::InString)
        }
    }
}
