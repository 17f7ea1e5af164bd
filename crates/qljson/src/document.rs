//! An owned, parsed QlJson document with path accessors.

use std::str::FromStr;

use crate::context::ParseContext;
use crate::error::{QlJsonError, Result};
use crate::parser::parse;
use crate::path;
use crate::types::Value;

/// The root value of one parse, owned by the caller.
///
/// The root is normally an object; [`get`](Document::get) and
/// [`has`](Document::has) resolve dotted paths from it.
///
/// ```
/// use qljson::{Document, Value};
///
/// let doc = Document::parse("{\n  foo: \"bar\",\n  length: 3\n}").unwrap();
/// assert_eq!(doc.get("foo").as_str(), Some("bar"));
/// assert!(doc.has("length"));
/// assert!(!doc.has("width"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parse with the default [`ParseContext`].
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_with(source, &ParseContext::default())
    }

    pub fn parse_with(source: &str, ctx: &ParseContext) -> Result<Self> {
        parse(source, ctx).map(|root| Self { root })
    }

    pub fn get(&self, path: &str) -> &Value {
        path::get(&self.root, path)
    }

    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path::lookup(&self.root, path)
    }

    pub fn has(&self, path: &str) -> bool {
        path::has(&self.root, path)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_root(self) -> Value {
        self.root
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

impl FromStr for Document {
    type Err = QlJsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
