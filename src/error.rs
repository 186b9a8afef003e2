//! Error types for BON parsing and document access.
//!
//! Every failure in this crate is reported through the single [`Error`] enum.
//! Parsing is all-or-nothing: the first problem encountered ends the parse and
//! no partial document is returned.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: unterminated strings, malformed lists, missing braces
//!   or node terminators, non-node values inside an object body
//! - **Number Errors**: misplaced or repeated `f` float markers, literals that
//!   are not valid decimal numbers
//! - **Limits**: nesting deeper than [`ParserOptions::max_depth`](crate::ParserOptions)
//! - **Lookup Errors**: a key that is not present in an [`Object`](crate::Object)
//!
//! Syntax errors carry an `offset`: the number of characters consumed from the
//! sanitized input (tabs and newlines removed) when the problem was detected.
//!
//! ## Examples
//!
//! ```rust
//! use serde_bon::{parse, Error};
//!
//! let result = parse("{value: \"x\"}");
//! assert!(matches!(result, Err(Error::MissingNodeTerminator { .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use crate::ValueKind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced while parsing or querying BON documents.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input ended before the closing quote of a string.
    #[error("Unterminated string at offset {offset}: expected closing quote before end of input")]
    UnterminatedString { offset: usize },

    /// Unexpected character or premature end of input inside a list.
    #[error("Malformed list at offset {offset}: {msg}")]
    MalformedList { offset: usize, msg: String },

    /// A node's value was not followed by `;`.
    #[error("Missing node terminator at offset {offset}: expected ';' after value of '{key}'")]
    MissingNodeTerminator { offset: usize, key: String },

    /// A node clause had no `:` between its key and value.
    #[error("Missing node separator at offset {offset}: expected ':' after key")]
    MissingNodeSeparator { offset: usize },

    /// An object was expected but no `{` was found.
    #[error("Missing opening brace at offset {offset}: expected '{{'")]
    MissingOpeningBrace { offset: usize },

    /// Input ended inside an object body.
    #[error("Missing closing brace at offset {offset}: expected '}}' before end of input")]
    MissingClosingBrace { offset: usize },

    /// An object body contained something other than `key: value;` clauses.
    #[error("Expected node at offset {offset}, found {found}")]
    ExpectedNode { offset: usize, found: ValueKind },

    /// The `f` float marker was repeated or not the last character.
    #[error("Float token error in '{literal}': {msg}")]
    InvalidFloatToken { literal: String, msg: &'static str },

    /// A numeric literal could not be converted.
    #[error("Invalid number literal '{literal}'")]
    InvalidNumber { literal: String },

    /// No recognizable value starts at the current position.
    #[error("Unrecognized value at offset {offset}")]
    UnrecognizedValue { offset: usize },

    /// Lookup of a key that is not present.
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Nesting exceeded the configured maximum depth.
    #[error("Maximum nesting depth of {limit} exceeded")]
    MaxDepthExceeded { limit: usize },

    /// Custom error raised through Serde.
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed list error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::Error;
    ///
    /// let err = Error::malformed_list(4, "unexpected character 'x'");
    /// assert!(err.to_string().contains("offset 4"));
    /// ```
    pub fn malformed_list(offset: usize, msg: &str) -> Self {
        Error::MalformedList {
            offset,
            msg: msg.to_string(),
        }
    }

    /// Creates a float token error for a repeated or misplaced `f` marker.
    pub fn invalid_float_token(literal: &str, msg: &'static str) -> Self {
        Error::InvalidFloatToken {
            literal: literal.to_string(),
            msg,
        }
    }

    /// Creates an invalid number error.
    pub fn invalid_number(literal: &str) -> Self {
        Error::InvalidNumber {
            literal: literal.to_string(),
        }
    }

    /// Creates a key lookup error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::Error;
    ///
    /// let err = Error::key_not_found("missing");
    /// assert_eq!(err.to_string(), "Key not found: missing");
    /// ```
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the input offset for syntax errors, if the error has one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::parse;
    ///
    /// let err = parse("{value: \"x\";").unwrap_err();
    /// assert_eq!(err.offset(), Some(12));
    /// ```
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnterminatedString { offset }
            | Error::MalformedList { offset, .. }
            | Error::MissingNodeTerminator { offset, .. }
            | Error::MissingNodeSeparator { offset }
            | Error::MissingOpeningBrace { offset }
            | Error::MissingClosingBrace { offset }
            | Error::ExpectedNode { offset, .. }
            | Error::UnrecognizedValue { offset } => Some(*offset),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_only_on_syntax_errors() {
        assert_eq!(Error::UnterminatedString { offset: 3 }.offset(), Some(3));
        assert_eq!(Error::malformed_list(7, "oops").offset(), Some(7));
        assert_eq!(Error::key_not_found("k").offset(), None);
        assert_eq!(Error::MaxDepthExceeded { limit: 2 }.offset(), None);
    }

    #[test]
    fn test_messages() {
        let err = Error::invalid_float_token("4ff", "too many tokens present");
        assert_eq!(
            err.to_string(),
            "Float token error in '4ff': too many tokens present"
        );

        let err = Error::ExpectedNode {
            offset: 1,
            found: ValueKind::String,
        };
        assert_eq!(err.to_string(), "Expected node at offset 1, found string");

        let err = Error::MissingOpeningBrace { offset: 0 };
        assert!(err.to_string().contains("expected '{'"));
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::de::Error>::custom("bad field");
        assert_eq!(err, Error::Custom("bad field".to_string()));
    }
}
