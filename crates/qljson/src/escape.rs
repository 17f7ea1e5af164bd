//! Escape-sequence handling shared by the normalizer and the list splitter.
//!
//! Both scanners hand every `\` they meet inside a string literal to
//! [`push_escape`], so the two stages accept and reject exactly the same
//! escapes. The two escapes that could be mistaken for structure, `\\` and
//! `\"`, are kept in escaped form; [`unescape_literal`] resolves them once the
//! value parser has isolated a string token.

use crate::error::{QlJsonError, Result};

/// Decode the escape whose backslash has just been consumed and append the
/// result to `out`.
///
/// A `\u` escape naming `\` or `"` is written in escaped form as well, so no
/// decoded character can end a literal or start a new escape.
///
/// Running the output through this function a second time yields the same
/// text, which is what lets the splitter re-scan normalized input.
pub(crate) fn push_escape<I>(chars: &mut I, out: &mut String) -> Result<()>
where
    I: Iterator<Item = char>,
{
    let c = chars.next().ok_or(QlJsonError::UnterminatedString)?;
    match c {
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        'n' => out.push('\n'),
        't' => out.push('\t'),
        'r' => out.push('\r'),
        'u' => match decode_unicode(chars)? {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            decoded => out.push(decoded),
        },
        'b' | 'f' => return Err(QlJsonError::UnsupportedEscape(c)),
        other => return Err(QlJsonError::UnknownEscape(other)),
    }
    Ok(())
}

/// Resolve the `\\` and `\"` escapes left in a string literal's content.
pub(crate) fn unescape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next @ ('\\' | '"')) => out.push(next),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Decode the payload of a `\u` escape into a single character.
///
/// A high surrogate must be immediately followed by a `\u` low surrogate; the
/// pair combines into one supplementary-plane scalar.
fn decode_unicode<I>(chars: &mut I) -> Result<char>
where
    I: Iterator<Item = char>,
{
    let unit = read_code_unit(chars)?;
    let code = if (0xD800..0xDC00).contains(&unit) {
        let marker: String = chars.by_ref().take(2).collect();
        if marker != "\\u" {
            return Err(QlJsonError::InvalidUnicode(format!("{unit:04X}")));
        }
        let low = read_code_unit(chars)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(QlJsonError::InvalidUnicode(format!("{low:04X}")));
        }
        0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
    } else {
        unit
    };
    char::from_u32(code).ok_or_else(|| QlJsonError::InvalidUnicode(format!("{code:04X}")))
}

/// Read exactly four hex digits.
fn read_code_unit<I>(chars: &mut I) -> Result<u32>
where
    I: Iterator<Item = char>,
{
    let payload: String = chars.by_ref().take(4).collect();
    if payload.chars().count() != 4 || !payload.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(QlJsonError::InvalidUnicode(payload));
    }
    match u32::from_str_radix(&payload, 16) {
        Ok(unit) => Ok(unit),
        Err(_) => Err(QlJsonError::InvalidUnicode(payload)),
    }
}
