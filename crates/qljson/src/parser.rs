//! Recursive-descent value parser over normalized QlJson text.
//!
//! A token is classified by its shape, first match wins:
//!
//! 1. **Number** — only digits, `.` and `-`; float when a `.` is present
//! 2. **Object** — `{…}`; members split at the first `:` into key and value
//! 3. **Array** — `[…]`
//! 4. **String** — `"…"`; quotes stripped, content trimmed
//! 5. **Keyword** — `true`, `false`, `null`
//! 6. **Fallback** — the raw token as a string when
//!    [`ParseContext::unknown_value_is_spaceless_string`] is set, otherwise
//!    [`QlJsonError::InvalidValue`]
//!
//! # Degrade-to-null objects
//!
//! An object member without a `:` makes the whole enclosing object parse as
//! [`Value::Null`]. No partial object is returned and no error is raised.
//! The empty member a trailing comma leaves counts, so `{a:1,}` is null too.
//! Existing documents rely on this, so it is kept as is and logged at `warn`.

use tracing::{debug, trace, warn};

use crate::context::ParseContext;
use crate::error::{QlJsonError, Result};
use crate::escape::unescape_literal;
use crate::normalizer::normalize;
use crate::splitter::split_top_level;
use crate::types::{Map, Value};

/// Normalize raw QlJson source and parse it into a value tree.
///
/// ```
/// use qljson::{parse, ParseContext, Value};
///
/// let value = parse("{\n  foo: \"bar\", // comment\n  length: 3\n}", &ParseContext::default()).unwrap();
/// let map = value.as_object().unwrap();
/// assert_eq!(map.get("foo"), Some(&Value::String("bar".into())));
/// assert_eq!(map.get("length"), Some(&Value::Integer(3)));
/// ```
pub fn parse(source: &str, ctx: &ParseContext) -> Result<Value> {
    let normalized = normalize(source)?;
    let value = parse_value(&normalized, ctx)?;
    debug!(root = value.type_name(), "parsed qljson document");
    Ok(value)
}

/// Parse a single normalized token into a [`Value`].
///
/// The token is expected to come from [`normalize`] (or from a member of a
/// normalized container); surrounding whitespace is not significant.
pub fn parse_value(token: &str, ctx: &ParseContext) -> Result<Value> {
    parse_at_depth(token.trim(), ctx, 0)
}

fn parse_at_depth(token: &str, ctx: &ParseContext, depth: usize) -> Result<Value> {
    if is_numeric(token) {
        return parse_number(token);
    }

    if let Some(interior) = strip_delimiters(token, '{', '}') {
        return parse_object(interior, ctx, enter(depth, ctx)?);
    }

    if let Some(interior) = strip_delimiters(token, '[', ']') {
        return parse_array(interior, ctx, enter(depth, ctx)?);
    }

    if let Some(inner) = strip_delimiters(token, '"', '"') {
        return Ok(Value::String(unescape_literal(inner).trim().to_string()));
    }

    match token {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "null" => return Ok(Value::Null),
        _ => {}
    }

    if ctx.unknown_value_is_spaceless_string {
        trace!(token, "unrecognised token kept as string");
        return Ok(Value::String(token.to_string()));
    }

    Err(QlJsonError::InvalidValue(token.to_string()))
}

/// Every character is a digit, `.` or `-`. No placement rules.
fn is_numeric(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
}

fn parse_number(token: &str) -> Result<Value> {
    let invalid = || QlJsonError::InvalidNumber(token.to_string());
    if token.contains('.') {
        token.parse::<f64>().map(Value::Float).map_err(|_| invalid())
    } else {
        token.parse::<i64>().map(Value::Integer).map_err(|_| invalid())
    }
}

fn strip_delimiters(token: &str, open: char, close: char) -> Option<&str> {
    token.strip_prefix(open)?.strip_suffix(close)
}

/// Depth of a container opened at `depth`, checked against the limit.
fn enter(depth: usize, ctx: &ParseContext) -> Result<usize> {
    let depth = depth + 1;
    if depth > ctx.max_depth {
        return Err(QlJsonError::DepthLimitExceeded(ctx.max_depth));
    }
    Ok(depth)
}

/// Split a container interior. An empty interior has no members; any other
/// empty member, including the one a trailing comma leaves, is kept.
fn members(interior: &str) -> Result<Vec<String>> {
    let interior = interior.trim();
    if interior.is_empty() {
        return Ok(Vec::new());
    }
    split_top_level(interior)
}

fn parse_object(interior: &str, ctx: &ParseContext, depth: usize) -> Result<Value> {
    let mut map = Map::new();
    for member in members(interior)? {
        let Some((key, raw)) = member.split_once(':') else {
            warn!(member = %member, "object member has no ':' separator, object parsed as null");
            return Ok(Value::Null);
        };
        let value = parse_at_depth(raw.trim(), ctx, depth)?;
        map.insert(key.trim().to_string(), value);
    }
    Ok(Value::Object(map))
}

fn parse_array(interior: &str, ctx: &ParseContext, depth: usize) -> Result<Value> {
    members(interior)?
        .iter()
        .map(|member| parse_at_depth(member, ctx, depth))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(token: &str) -> Result<Value> {
        parse_value(token, &ParseContext::default())
    }

    #[test]
    fn numeric_shape_without_digits_is_invalid_number() {
        assert_eq!(
            parse_default("-"),
            Err(QlJsonError::InvalidNumber("-".to_string()))
        );
        assert_eq!(
            parse_default("1.2.3"),
            Err(QlJsonError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn leading_dot_float() {
        assert_eq!(parse_default(".5").unwrap(), Value::Float(0.5));
    }

    #[test]
    fn integer_overflow_is_invalid_number() {
        assert!(matches!(
            parse_default("99999999999999999999"),
            Err(QlJsonError::InvalidNumber(_))
        ));
    }

    #[test]
    fn depth_limit_applies_to_nested_containers() {
        let ctx = ParseContext::default().with_max_depth(2);
        assert!(parse_value("[[1]]", &ctx).is_ok());
        assert_eq!(
            parse_value("[[[1]]]", &ctx),
            Err(QlJsonError::DepthLimitExceeded(2))
        );
    }
}
