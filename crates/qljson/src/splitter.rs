//! Top-level list splitting for object and array interiors.
//!
//! Splits on `,` only outside string literals and outside nested `{…}` and
//! `[…]` pairs. Curly and square depths are tracked independently. Escapes
//! inside strings go through the same decoder as the normalizer, so an
//! escaped quote never ends a literal early.

use crate::error::{QlJsonError, Result};
use crate::escape::push_escape;

/// Split a bracket interior into its trimmed top-level members.
///
/// The last accumulated segment is always emitted, so an empty interior
/// yields a single empty member and a trailing comma yields a trailing empty
/// member. The value parser decides what to do with those.
///
/// # Errors
///
/// Fails like [`normalize`](crate::normalize) on an unterminated string or a
/// rejected escape.
///
/// # Examples
///
/// ```
/// use qljson::split_top_level;
///
/// let members = split_top_level(r#"a:{b:1,c:2},d:[1,2,3],e:"x,y""#).unwrap();
/// assert_eq!(members, vec!["a:{b:1,c:2}", "d:[1,2,3]", r#"e:"x,y""#]);
/// ```
pub fn split_top_level(interior: &str) -> Result<Vec<String>> {
    let mut members = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut curly: isize = 0;
    let mut square: isize = 0;
    let mut chars = interior.chars();

    while let Some(c) = chars.next() {
        if in_string {
            match c {
                '\\' => push_escape(&mut chars, &mut current)?,
                '"' => {
                    current.push(c);
                    in_string = false;
                }
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                current.push(c);
                in_string = true;
            }
            ',' if curly == 0 && square == 0 => {
                members.push(current.trim().to_string());
                current.clear();
            }
            '{' => {
                curly += 1;
                current.push(c);
            }
            '}' => {
                curly -= 1;
                current.push(c);
            }
            '[' => {
                square += 1;
                current.push(c);
            }
            ']' => {
                square -= 1;
                current.push(c);
            }
            _ => current.push(c),
        }
    }

    if in_string {
        return Err(QlJsonError::UnterminatedString);
    }

    members.push(current.trim().to_string());
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_interior_yields_one_empty_member() {
        assert_eq!(split_top_level("").unwrap(), vec![""]);
    }

    #[test]
    fn trailing_comma_yields_trailing_empty_member() {
        assert_eq!(split_top_level("1,2,").unwrap(), vec!["1", "2", ""]);
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        assert_eq!(
            split_top_level(r#""a\",b",c"#).unwrap(),
            vec![r#""a\",b""#, "c"]
        );
    }

    #[test]
    fn rescanning_normalized_text_is_stable() {
        let interior = r#"a:"x\\",b:"y\"z""#;
        assert_eq!(
            split_top_level(interior).unwrap(),
            vec![r#"a:"x\\""#, r#"b:"y\"z""#]
        );
    }
}
