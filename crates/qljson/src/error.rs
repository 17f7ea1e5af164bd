//! Error types for QlJson normalization and parsing.

use thiserror::Error;

/// Errors that abort a QlJson parse.
///
/// A member without a `:` separator is not an error: the enclosing object
/// degrades to [`Value::Null`](crate::Value::Null) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QlJsonError {
    /// A string literal had no closing quote before the input ended.
    #[error("String was left open")]
    UnterminatedString,

    /// A recognised but unsupported escape (`\b` or `\f`).
    #[error("special character (\\{0}) not supported")]
    UnsupportedEscape(char),

    /// An escape character outside `\\ \" \n \t \r \u`.
    #[error("not a real special character (\\{0})")]
    UnknownEscape(char),

    /// A `\u` escape whose payload is not four hex digits, or that names a
    /// lone surrogate.
    #[error("Invalid unicode character (\\u{0})")]
    InvalidUnicode(String),

    /// A token that matched no value shape with the spaceless-string fallback off.
    #[error("invalid value ({0})")]
    InvalidValue(String),

    /// A token made only of digits, `.` and `-` that is not a valid number.
    #[error("invalid number ({0})")]
    InvalidNumber(String),

    /// Objects and arrays nested deeper than the configured limit.
    #[error("nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
}

/// Convenience alias used throughout qljson.
pub type Result<T> = std::result::Result<T, QlJsonError>;
