//! # qljson
//!
//! Parser and path accessor for **QlJson**, a relaxed JSON dialect.
//!
//! QlJson differs from JSON in three ways: object keys are written without
//! quotes, `//` line comments are allowed anywhere outside strings, and
//! whitespace is never significant outside string literals.
//!
//! ```text
//! JSON                      QlJson
//! {                         {
//!   "foo": "bar",             foo: "bar",   // no quotes on keys
//!   "length": 3               length: 3
//! }                         }
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use qljson::{Document, ParseContext, Value};
//!
//! let doc = Document::parse(r#"{
//!     server: { host: "localhost", port: 8080 },
//!     // trailing comments are stripped
//!     tags: ["a", "b"]
//! }"#).unwrap();
//!
//! assert_eq!(doc.get("server.port"), &Value::Integer(8080));
//! assert_eq!(doc.get("tags.1").as_str(), Some("b"));
//! assert!(!doc.has("server.tls"));
//!
//! // Bare words become strings when the fallback is enabled
//! let ctx = ParseContext::default().with_spaceless_strings(true);
//! let doc = Document::parse_with("{mode: fast}", &ctx).unwrap();
//! assert_eq!(doc.get("mode").as_str(), Some("fast"));
//! ```
//!
//! ## Modules
//!
//! - [`normalizer`] — raw source → compact, comment-free text
//! - [`parser`] — normalized text → [`Value`] tree
//! - [`splitter`] — top-level member splitting for object/array interiors
//! - [`path`] — dotted-path `get` / `has`
//! - [`document`] — owned root with path accessors
//! - [`types`] — the [`Value`] tree and insertion-ordered [`Map`]
//! - [`context`] — per-parse options
//! - [`error`] — error types

pub mod context;
mod convert;
pub mod document;
pub mod error;
mod escape;
pub mod normalizer;
pub mod parser;
pub mod path;
pub mod splitter;
pub mod types;

pub use context::ParseContext;
pub use document::Document;
pub use error::QlJsonError;
pub use normalizer::normalize;
pub use parser::{parse, parse_value};
pub use path::{get, has, lookup};
pub use splitter::split_top_level;
pub use types::{Map, Value};
