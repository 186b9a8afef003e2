//! # serde_bon
//!
//! A parser and document model for BON (Basic Object Notation), with Serde integration.
//!
//! ## What is BON?
//!
//! BON is a small, human-writable notation in the spirit of JSON. Objects are
//! sequences of semicolon-terminated `key: value;` nodes, lists are bracketed,
//! strings are quoted, and a trailing `f` marks a literal as floating point:
//!
//! ```text
//! {
//!     value: "data";
//!     list: [1, 2e-5, 3.5, 4f, "5", {key: "value";}];
//!     nested_object: { hello: "world"; };
//! }
//! ```
//!
//! ## Grammar
//!
//! ```text
//! object   := '{' (node)* '}'
//! node     := key ':' value ';'
//! list     := '[' (value (',' value)*)? ']'
//! string   := ('"' | "'") char* matching-quote
//! number   := digits | digits '.' digits ('e' '-'? digits)? | integer-or-float 'f'
//! key      := any run of non-space characters up to ':'
//! ```
//!
//! Spaces between tokens are insignificant. Tabs and newlines are removed from
//! the whole input before parsing, including inside quoted strings. There are
//! no comments, booleans or null.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_bon::{parse, Value};
//!
//! let doc = parse("{value: \"data\"; list: [1, 4f]; nested: {hello: 'world';};}").unwrap();
//!
//! assert_eq!(doc.get("value").and_then(Value::as_str), Some("data"));
//! assert_eq!(
//!     doc.get("nested").and_then(|v| v.get("hello")).and_then(Value::as_str),
//!     Some("world")
//! );
//!
//! let list = doc.get("list").and_then(Value::as_list).unwrap();
//! assert_eq!(list[0].as_i64(), Some(1));
//! assert_eq!(list[1].as_f64(), Some(4.0));
//! ```
//!
//! ### Typed Extraction
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_bon::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let user: User = from_str("{id: 7; name: 'Alice'; tags: ['admin', 'dev'];}").unwrap();
//! assert_eq!(user.name, "Alice");
//! ```
//!
//! ### Walking a Document
//!
//! ```rust
//! use serde_bon::parse;
//!
//! let doc = parse("{a: 1; b: 2;}").unwrap();
//! let obj = doc.as_object().unwrap();
//! for node in obj {
//!     println!("{}", node);
//! }
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Nesting depth is bounded by [`ParserOptions::max_depth`], so hostile input
//!   cannot overflow the stack
//! - Proper error propagation with `Result` types

pub mod de;
pub mod error;
pub mod macros;
pub mod object;
pub mod options;
pub mod parser;
pub mod queue;
pub mod value;

pub use de::ValueDeserializer;
pub use error::{Error, Result};
pub use object::{Node, Object};
pub use options::ParserOptions;
pub use parser::Parser;
pub use value::{Number, Value, ValueKind};

use serde::de::DeserializeOwned;
use tracing::debug;

/// Parses a complete BON text into a [`Value`].
///
/// Text after the first complete value is ignored.
///
/// # Examples
///
/// ```rust
/// use serde_bon::{parse, Value};
///
/// let value = parse("value_1: \"value\";").unwrap();
/// assert_eq!(value.get("value_1"), Some(&Value::from("value")));
/// ```
///
/// # Errors
///
/// Returns the first syntax error encountered; see [`Error`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses a complete BON text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_bon::{parse_with_options, Error, ParserOptions};
///
/// let options = ParserOptions::new().with_max_depth(2);
/// let result = parse_with_options("[[[1]]]", options);
/// assert_eq!(result, Err(Error::MaxDepthExceeded { limit: 2 }));
/// ```
///
/// # Errors
///
/// Returns the first syntax error encountered, or
/// [`Error::MaxDepthExceeded`] if the input nests deeper than allowed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<Value> {
    debug!(len = input.len(), max_depth = options.max_depth, "parsing BON input");
    let mut parser = Parser::with_options(input, options);
    let value = parser.parse_value()?;
    debug!(
        kind = %value.kind(),
        unparsed = parser.remaining().len(),
        "parsed BON input"
    );
    Ok(value)
}

/// Deserialize an instance of type `T` from a string of BON text.
///
/// # Examples
///
/// ```rust
/// use serde_bon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{x: 1; y: 2;}").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid BON or does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(s)?)
}

/// Deserialize an instance of type `T` from an already parsed [`Value`].
///
/// # Errors
///
/// Returns an error if the value does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}
