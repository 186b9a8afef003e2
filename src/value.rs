//! Dynamic value representation for BON documents.
//!
//! This module provides the [`Value`] enum, which represents any value the
//! parser can produce, along with [`Number`] and the [`ValueKind`] tags used by
//! the classifier.
//!
//! ## Usage Patterns
//!
//! ### Inspecting Parsed Values
//!
//! ```rust
//! use serde_bon::parse;
//!
//! let value = parse("{name: \"Alice\"; scores: [1, 2.5];}").unwrap();
//! assert!(value.is_object());
//! assert_eq!(value.get("name").and_then(|v| v.as_str()), Some("Alice"));
//!
//! let scores = value.get("scores").and_then(|v| v.as_list()).unwrap();
//! assert_eq!(scores[0].as_i64(), Some(1));
//! assert_eq!(scores[1].as_f64(), Some(2.5));
//! ```
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_bon::{bon, Value};
//!
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let obj = bon!({ "name": "Alice", "age": 30 });
//! assert!(obj.is_object());
//! ```

use crate::{Node, Object};
use serde::{Serialize, Serializer};
use std::fmt;

/// The kind of value starting at a given position in the input.
///
/// [`ValueKind::Invalid`] is only ever produced by the classifier; no stored
/// [`Value`] has that kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Object,
    List,
    Node,
    Invalid,
}

impl ValueKind {
    /// Maps an opening token to the kind of value it starts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::ValueKind;
    ///
    /// assert_eq!(ValueKind::from_opener('{'), Some(ValueKind::Object));
    /// assert_eq!(ValueKind::from_opener('\''), Some(ValueKind::String));
    /// assert_eq!(ValueKind::from_opener('x'), None);
    /// ```
    #[must_use]
    pub const fn from_opener(c: char) -> Option<ValueKind> {
        match c {
            '{' => Some(ValueKind::Object),
            '[' => Some(ValueKind::List),
            '"' | '\'' => Some(ValueKind::String),
            ':' => Some(ValueKind::Node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Object => "object",
            ValueKind::List => "list",
            ValueKind::Node => "node",
            ValueKind::Invalid => "invalid",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric value: a base-10 integer or a float.
///
/// Literals made only of digits are integers; anything with a `.`, an `e`
/// exponent, a `-` sign or a trailing `f` marker is a float.
///
/// # Examples
///
/// ```rust
/// use serde_bon::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Floats convert only when they have no fractional part and fit in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::Number;
    ///
    /// assert_eq!(Number::Float(4.0).as_i64(), Some(4));
    /// assert_eq!(Number::Float(4.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // Debug keeps the decimal point on whole floats (4.0, not 4).
            Number::Float(fl) => write!(f, "{:?}", fl),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Any value that can appear in a BON document.
///
/// # Examples
///
/// ```rust
/// use serde_bon::{Number, Value};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Number(Number),
    Object(Object),
    List(Vec<Value>),
    /// A bare `key: value;` clause parsed outside of an object body.
    Node(Box<Node>),
}

impl Value {
    /// Returns the kind tag of this value. Never [`ValueKind::Invalid`].
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Object(_) => ValueKind::Object,
            Value::List(_) => ValueKind::List,
            Value::Node(_) => ValueKind::Node,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::{Number, Value};
    ///
    /// assert_eq!(Value::Number(Number::Integer(42)).as_i64(), Some(42));
    /// assert_eq!(Value::Number(Number::Float(42.0)).as_i64(), Some(42));
    /// assert_eq!(Value::from("42").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Looks up `key` in an object, or matches it against a bare node's key.
    ///
    /// Returns `None` for other kinds and for absent keys, which makes chained
    /// lookups into nested documents convenient.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::parse;
    ///
    /// let doc = parse("{outer: {inner: 7;};}").unwrap();
    /// let inner = doc.get("outer").and_then(|v| v.get("inner"));
    /// assert_eq!(inner.and_then(|v| v.as_i64()), Some(7));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.find(key),
            Value::Node(node) if node.key == key => Some(&node.value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Object(obj) => write!(f, "{}", obj),
            Value::List(list) => {
                write!(
                    f,
                    "[{}]",
                    list.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            Value::Node(node) => write!(f, "{}", node),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for node in obj {
                    map.serialize_entry(&node.key, &node.value)?;
                }
                map.end()
            }
            Value::Node(node) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&node.key, &node.value)?;
                map.end()
            }
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| crate::Error::custom(format!("cannot convert {} to i64", n))),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.kind()
            ))),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryfrom_i64() {
        let result: i64 = i64::try_from(Value::Number(Number::Integer(42))).unwrap();
        assert_eq!(result, 42);

        let result: i64 = i64::try_from(Value::Number(Number::Float(42.0))).unwrap();
        assert_eq!(result, 42);

        assert!(i64::try_from(Value::Number(Number::Float(4.5))).is_err());
        assert!(i64::try_from(Value::from("test")).is_err());
    }

    #[test]
    fn test_tryfrom_f64_and_string() {
        assert_eq!(f64::try_from(Value::from(3)).unwrap(), 3.0);
        assert_eq!(f64::try_from(Value::from(2.5)).unwrap(), 2.5);
        assert_eq!(String::try_from(Value::from("hi")).unwrap(), "hi");
        assert!(String::try_from(Value::from(1)).is_err());
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::from("a").kind(), ValueKind::String);
        assert_eq!(Value::from(1).kind(), ValueKind::Number);
        assert_eq!(Value::from(vec![]).kind(), ValueKind::List);
        assert_eq!(Value::from(Object::new()).kind(), ValueKind::Object);
        assert_eq!(Value::from(Node::new("k", 1)).kind(), ValueKind::Node);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(4.0).to_string(), "4.0");
        assert_eq!(Value::from(2e-5).to_string(), "2e-5");
        assert_eq!(Value::from(4).to_string(), "4");
        assert_eq!(
            Value::from(vec![Value::from(1), Value::from("5")]).to_string(),
            "[1, 5]"
        );
        assert_eq!(Value::from(Node::new("k", "v")).to_string(), "k: v;");
    }

    #[test]
    fn test_get_on_node_and_scalar() {
        let node = Value::from(Node::new("key", 1));
        assert_eq!(node.get("key"), Some(&Value::from(1)));
        assert_eq!(node.get("other"), None);
        assert_eq!(Value::from(1).get("key"), None);
    }
}
