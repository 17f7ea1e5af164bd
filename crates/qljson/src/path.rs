//! Dotted-path lookups into a parsed value tree.
//!
//! # Path syntax
//!
//! - `"name"` -- the top-level key `name`
//! - `"server.port"` -- key `port` inside the object under `server`
//! - `"hosts.0"` -- first element of the array under `hosts`
//!
//! Lookups never fail: an unresolvable path reads as [`Value::Null`] from
//! [`get`] and as `false` from [`has`].

use crate::types::Value;

static NULL: Value = Value::Null;

/// A parsed path, split on dots.
///
/// `"a.b.c"` becomes `["a", "b", "c"]`. An empty segment is an ordinary key,
/// so `"a..b"` looks up the empty key inside `a`.
#[derive(Debug, Clone)]
struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    fn parse(path: &'a str) -> Self {
        Self {
            segments: path.split('.').collect(),
        }
    }

    /// All segments but the last, and the last. `split` always yields at
    /// least one segment.
    fn split_last(&self) -> (&[&'a str], &'a str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, *last),
            None => (&[], ""),
        }
    }
}

/// Resolve one segment against a container.
///
/// Objects match by key; arrays match a segment that parses as an index.
fn child<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Walk every segment but the last. Descent stops at the first absent,
/// null or scalar value.
fn parent<'v>(root: &'v Value, parents: &[&str]) -> Option<&'v Value> {
    let mut current = root;
    for segment in parents {
        current = child(current, segment)?;
        if !matches!(current, Value::Object(_) | Value::Array(_)) {
            return None;
        }
    }
    Some(current)
}

/// Look up the value at `path`, or `None` when any step is missing.
///
/// A key explicitly mapped to null resolves to `Some(&Value::Null)`.
pub fn lookup<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    let path = Path::parse(path);
    let (parents, last) = path.split_last();
    child(parent(root, parents)?, last)
}

/// Value at `path`, or [`Value::Null`] when the path does not resolve.
///
/// # Examples
///
/// ```
/// use qljson::{get, parse, ParseContext, Value};
///
/// let doc = parse("{server:{port:8080}}", &ParseContext::default()).unwrap();
/// assert_eq!(get(&doc, "server.port"), &Value::Integer(8080));
/// assert_eq!(get(&doc, "server.host"), &Value::Null);
/// assert_eq!(get(&doc, "client.port"), &Value::Null);
/// ```
pub fn get<'v>(root: &'v Value, path: &str) -> &'v Value {
    lookup(root, path).unwrap_or(&NULL)
}

/// Whether the final key of `path` is present, even when it maps to null.
///
/// ```
/// use qljson::{get, has, parse, ParseContext, Value};
///
/// let doc = parse("{a:{b:null}}", &ParseContext::default()).unwrap();
/// assert!(has(&doc, "a.b"));
/// assert_eq!(get(&doc, "a.b"), &Value::Null);
/// assert!(!has(&doc, "a.c"));
/// ```
pub fn has(root: &Value, path: &str) -> bool {
    lookup(root, path).is_some()
}
