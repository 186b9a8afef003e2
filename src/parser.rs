//! BON parsing.
//!
//! This module provides the [`Parser`], a recursive-descent parser with one
//! routine per value kind, and [`determine_type`], the lookahead classifier
//! that decides which routine handles the next value.
//!
//! ## Overview
//!
//! - **Sanitization**: tabs and newlines are removed before parsing starts
//! - **Classification**: before each value the remaining input is scanned,
//!   without consuming it, for the first token that identifies a value kind
//! - **Dispatch**: [`Parser::parse_value`] matches on the classified kind and
//!   calls exactly one routine; nested values recurse back into it
//! - **Depth limit**: every nested value counts against
//!   [`ParserOptions::max_depth`]
//!
//! ## Usage
//!
//! Most users should use [`parse`](crate::parse) in the crate root:
//!
//! ```rust
//! use serde_bon::Parser;
//!
//! let mut parser = Parser::new("{items: [1, 2, {k: \"v\";}];}");
//! let value = parser.parse_value().unwrap();
//!
//! let items = value.get("items").and_then(|v| v.as_list()).unwrap();
//! assert_eq!(items.len(), 3);
//! assert_eq!(items[2].get("k").and_then(|v| v.as_str()), Some("v"));
//! ```

use crate::queue::{sanitize, CharQueue, SANITIZED_CHARS};
use crate::{Error, Node, Number, Object, ParserOptions, Result, Value, ValueKind};
use tracing::trace;

const INTEGER_CHARS: &str = "0123456789";
const NUMBER_CHARS: &str = "0123456789.fe-";
const FLOAT_MARKER: char = 'f';

/// Determines the kind of the next value in `queue` without consuming anything.
///
/// The scan runs from the front of the queue and stops at the first unescaped
/// opening token (`{`, `[`, `"`, `'` or `:`). A digit seen before any letter
/// means a bare number; a letter first means a node key, so the scan keeps
/// going until it reaches the `:`. If nothing decides the kind before the end
/// of the queue the result is [`ValueKind::Invalid`].
///
/// # Examples
///
/// ```rust
/// use serde_bon::parser::determine_type;
/// use serde_bon::queue::CharQueue;
/// use serde_bon::ValueKind;
///
/// assert_eq!(determine_type(&CharQueue::from(" 42;")), ValueKind::Number);
/// assert_eq!(determine_type(&CharQueue::from("value1: 4;")), ValueKind::Node);
/// assert_eq!(determine_type(&CharQueue::from("\\{ \"s\"")), ValueKind::String);
/// assert_eq!(determine_type(&CharQueue::from("  ;")), ValueKind::Invalid);
/// ```
#[must_use]
pub fn determine_type(queue: &CharQueue) -> ValueKind {
    let mut is_escaped = false;
    let mut alpha_found = false;

    for c in queue {
        if !is_escaped {
            if let Some(kind) = ValueKind::from_opener(c) {
                return kind;
            } else if c.is_alphabetic() {
                alpha_found = true;
            } else if c.is_ascii_digit() && !alpha_found {
                return ValueKind::Number;
            }
        }
        is_escaped = c == '\\' && !is_escaped;
    }

    ValueKind::Invalid
}

/// Converts a float literal, honouring the trailing `f` marker.
///
/// # Errors
///
/// [`Error::InvalidFloatToken`] if `f` appears more than once or anywhere but
/// at the end; [`Error::InvalidNumber`] if the rest is not a decimal number.
///
/// # Examples
///
/// ```rust
/// use serde_bon::parser::parse_float;
///
/// assert_eq!(parse_float("4f").unwrap(), 4.0);
/// assert_eq!(parse_float("2e-5").unwrap(), 2e-5);
/// assert!(parse_float("4f5").is_err());
/// ```
pub fn parse_float(literal: &str) -> Result<f64> {
    let markers = literal.matches(FLOAT_MARKER).count();
    if markers > 1 {
        return Err(Error::invalid_float_token(
            literal,
            "too many tokens present",
        ));
    }
    if markers == 1 && !literal.ends_with(FLOAT_MARKER) {
        return Err(Error::invalid_float_token(literal, "misplaced token"));
    }

    let digits = literal.strip_suffix(FLOAT_MARKER).unwrap_or(literal);
    digits
        .parse::<f64>()
        .map_err(|_| Error::invalid_number(literal))
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// The BON parser.
///
/// Owns the character queue for one source text. Each `parse_*` routine
/// consumes exactly the characters of the value it returns (plus any
/// separators it skips), so routines can be chained on the same parser.
pub struct Parser {
    queue: CharQueue,
    options: ParserOptions,
    depth: usize,
}

impl Parser {
    /// Creates a parser over `input` with default options.
    ///
    /// Tabs and newlines are stripped from `input` here, so they never reach
    /// any routine, including string contents.
    pub fn new(input: &str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    pub fn with_options(input: &str, options: ParserOptions) -> Self {
        Parser {
            queue: CharQueue::from(sanitize(input).as_str()),
            options,
            depth: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The part of the input that has not been consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &CharQueue {
        &self.queue
    }

    /// Classifies the next value. See [`determine_type`].
    #[must_use]
    pub fn determine_type(&self) -> ValueKind {
        determine_type(&self.queue)
    }

    fn offset(&self) -> usize {
        self.queue.consumed()
    }

    /// Runs `f` one nesting level deeper, failing if the limit is reached.
    fn descend<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.options.max_depth {
            return Err(Error::MaxDepthExceeded {
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Pops characters up to and including `target`. Returns `false` if the
    /// input ran out first.
    fn skip_until(&mut self, target: char) -> bool {
        while let Some(c) = self.queue.pop() {
            if c == target {
                return true;
            }
        }
        false
    }

    fn skip_spaces(&mut self) {
        while self.queue.peek(0) == Some(' ') {
            self.queue.pop();
        }
    }

    /// Parses the next value, whatever its kind.
    ///
    /// # Errors
    ///
    /// [`Error::UnrecognizedValue`] if no value kind can be determined, plus
    /// any error from the routine the value is dispatched to.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.descend(|parser| {
            let kind = parser.determine_type();
            trace!(%kind, depth = parser.depth, offset = parser.offset(), "parsing value");

            match kind {
                ValueKind::String => parser.parse_string().map(Value::String),
                ValueKind::Number => parser.parse_number().map(Value::Number),
                ValueKind::Object => parser.parse_object().map(Value::Object),
                ValueKind::List => parser.parse_list().map(Value::List),
                ValueKind::Node => parser.parse_node().map(Value::from),
                ValueKind::Invalid => Err(Error::UnrecognizedValue {
                    offset: parser.offset(),
                }),
            }
        })
    }

    /// Parses a number from the front of the input.
    ///
    /// Consumes digits, `.`, `e`, `-`, `f` and spaces. A literal made only of
    /// digits is an integer; anything else goes through [`parse_float`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFloatToken`] or [`Error::InvalidNumber`].
    pub fn parse_number(&mut self) -> Result<Number> {
        let mut buffer = String::new();
        while let Some(c) = self.queue.peek(0) {
            if !(NUMBER_CHARS.contains(c) || c == ' ') {
                break;
            }
            buffer.push(c);
            self.queue.pop();
        }

        let literal = buffer.trim();
        if buffer.chars().all(|c| INTEGER_CHARS.contains(c) || c == ' ') {
            literal
                .parse::<i64>()
                .map(Number::Integer)
                .map_err(|_| Error::invalid_number(literal))
        } else {
            parse_float(literal).map(Number::Float)
        }
    }

    /// Parses a quoted string.
    ///
    /// Anything before the opening quote is skipped. Inside the string a
    /// backslash makes the next character literal, and the string ends at the
    /// next unescaped quote of the same kind as the opening one.
    ///
    /// # Errors
    ///
    /// [`Error::UnterminatedString`] if the input ends before the closing quote.
    pub fn parse_string(&mut self) -> Result<String> {
        let mut buffer = String::new();
        let mut quote: Option<char> = None;
        let mut is_escaped = false;

        while let Some(c) = self.queue.pop() {
            let Some(closing) = quote else {
                if !is_escaped && is_quote(c) {
                    quote = Some(c);
                }
                is_escaped = c == '\\' && !is_escaped;
                continue;
            };

            if is_escaped {
                is_escaped = false;
            } else if c == '\\' {
                is_escaped = true;
                continue;
            } else if c == closing {
                return Ok(buffer);
            }

            if !SANITIZED_CHARS.contains(&c) {
                buffer.push(c);
            }
        }

        Err(Error::UnterminatedString {
            offset: self.offset(),
        })
    }

    /// Parses a `[a, b, ...]` list.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedList`] on an unexpected character between elements, a
    /// trailing comma, or end of input before `]`.
    pub fn parse_list(&mut self) -> Result<Vec<Value>> {
        if !self.skip_until('[') {
            return Err(Error::malformed_list(self.offset(), "expected '['"));
        }

        let mut list = Vec::new();
        self.skip_spaces();
        if self.queue.peek(0) == Some(']') {
            self.queue.pop();
            return Ok(list);
        }
        list.push(self.parse_value()?);

        loop {
            match self.queue.pop() {
                Some(',') => {
                    self.skip_spaces();
                    if self.queue.peek(0) == Some(']') {
                        return Err(Error::malformed_list(
                            self.offset(),
                            "trailing comma before ']'",
                        ));
                    }
                    list.push(self.parse_value()?);
                }
                Some(']') => return Ok(list),
                Some(' ') => {}
                Some(c) => {
                    return Err(Error::malformed_list(
                        self.offset(),
                        &format!("unexpected character '{}'", c),
                    ))
                }
                None => {
                    return Err(Error::malformed_list(
                        self.offset(),
                        "expected ']' before end of input",
                    ))
                }
            }
        }
    }

    /// Parses a `key: value;` clause.
    ///
    /// Spaces in the key are dropped. Anything between the value and the
    /// terminating `;` is discarded.
    ///
    /// # Errors
    ///
    /// [`Error::MissingNodeSeparator`] if `;` or end of input comes before
    /// `:`, [`Error::MissingNodeTerminator`] if the input ends before `;`.
    pub fn parse_node(&mut self) -> Result<Node> {
        let mut key = String::new();
        loop {
            match self.queue.pop() {
                Some(':') => break,
                Some(';') | None => {
                    return Err(Error::MissingNodeSeparator {
                        offset: self.offset(),
                    })
                }
                Some(' ') => {}
                Some(c) => key.push(c),
            }
        }
        let key = key.trim().to_string();

        let value = self.parse_value()?;

        let mut discarded = 0usize;
        loop {
            match self.queue.pop() {
                Some(';') => break,
                Some(' ') => {}
                Some(_) => discarded += 1,
                None => {
                    return Err(Error::MissingNodeTerminator {
                        offset: self.offset(),
                        key,
                    })
                }
            }
        }
        if discarded > 0 {
            trace!(%key, discarded, "discarded characters before node terminator");
        }

        Ok(Node { key, value })
    }

    /// Parses a `{ key: value; ... }` object.
    ///
    /// # Errors
    ///
    /// [`Error::MissingOpeningBrace`], [`Error::MissingClosingBrace`], or
    /// [`Error::ExpectedNode`] if the body holds anything but node clauses.
    pub fn parse_object(&mut self) -> Result<Object> {
        if !self.skip_until('{') {
            return Err(Error::MissingOpeningBrace {
                offset: self.offset(),
            });
        }

        let mut object = Object::new();
        while let Some(c) = self.queue.peek(0) {
            match c {
                '}' => {
                    self.queue.pop();
                    return Ok(object);
                }
                ' ' => {
                    self.queue.pop();
                }
                _ => {
                    let found = self.determine_type();
                    if found != ValueKind::Node {
                        return Err(Error::ExpectedNode {
                            offset: self.offset(),
                            found,
                        });
                    }
                    object.push(self.descend(Self::parse_node)?);
                }
            }
        }

        Err(Error::MissingClosingBrace {
            offset: self.offset(),
        })
    }
}
