//! Nodes and objects.
//!
//! A [`Node`] is one `key: value;` clause. An [`Object`] is the ordered
//! sequence of nodes found between `{` and `}`. Source order is preserved and
//! duplicate keys are kept side by side; lookups return the first match.
//!
//! ## Examples
//!
//! ```rust
//! use serde_bon::{Node, Object, Value};
//!
//! let mut obj = Object::new();
//! obj.push(Node::new("name", "Alice"));
//! obj.push(Node::new("age", 30));
//!
//! assert_eq!(obj.len(), 2);
//! assert_eq!(obj.get("name").unwrap().as_str(), Some("Alice"));
//! ```

use crate::{Error, Result, Value};
use std::fmt;

/// A single `key: value;` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub key: String,
    pub value: Value,
}

impl Node {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Node {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns `true` if `item` equals this node's key.
    #[must_use]
    pub fn has_key(&self, item: &str) -> bool {
        self.key == item
    }

    /// Returns `true` if `item` equals this node's value.
    #[must_use]
    pub fn has_value(&self, item: &Value) -> bool {
        self.value == *item
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.key, self.value)
    }
}

/// An ordered collection of [`Node`]s.
///
/// # Examples
///
/// ```rust
/// use serde_bon::{Node, Object};
///
/// let obj: Object = vec![Node::new("first", 1), Node::new("second", 2)]
///     .into_iter()
///     .collect();
///
/// // Iteration maintains source order
/// let keys: Vec<_> = obj.keys().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    nodes: Vec<Node>,
}

impl Object {
    /// Creates an empty `Object`.
    #[must_use]
    pub fn new() -> Self {
        Object { nodes: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Object {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a node. Existing nodes with the same key are left untouched.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if any node has the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::{Node, Object};
    ///
    /// let obj: Object = vec![Node::new("key", 1)].into_iter().collect();
    /// assert!(obj.contains_key("key"));
    /// assert!(!obj.contains_key("other"));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.nodes.iter().any(|node| node.has_key(key))
    }

    /// Returns `true` if any node holds a value equal to `value`.
    #[must_use]
    pub fn contains_value(&self, value: &Value) -> bool {
        self.nodes.iter().any(|node| node.has_value(value))
    }

    /// Returns the value of the first node with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no node has the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::{Error, Node, Object};
    ///
    /// let obj: Object = vec![Node::new("key", 42)].into_iter().collect();
    /// assert_eq!(obj.get("key").unwrap().as_i64(), Some(42));
    /// assert!(matches!(obj.get("nope"), Err(Error::KeyNotFound(_))));
    /// ```
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.find(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Like [`Object::get`], but returns `None` for an absent key.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.get_node(key).map(|node| &node.value)
    }

    /// Returns the first node with the given key.
    #[must_use]
    pub fn get_node(&self, key: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.has_key(key))
    }

    /// Removes and returns the first node with the given key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no node has the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_bon::{Node, Object};
    ///
    /// let mut obj: Object = vec![Node::new("a", 1), Node::new("b", 2)]
    ///     .into_iter()
    ///     .collect();
    /// let removed = obj.remove("a").unwrap();
    /// assert_eq!(removed.key, "a");
    /// assert_eq!(obj.len(), 1);
    /// ```
    pub fn remove(&mut self, key: &str) -> Result<Node> {
        match self.nodes.iter().position(|node| node.has_key(key)) {
            Some(index) => Ok(self.nodes.remove(index)),
            None => Err(Error::key_not_found(key)),
        }
    }

    /// Returns an iterator over the nodes, in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over the keys, in source order. Duplicates are repeated.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.key.as_str())
    }

    /// Returns an iterator over the values, in source order.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.nodes.iter().map(|node| &node.value)
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .nodes
            .iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>()
            .join("\n\t");
        write!(f, "{{\n\t{}\n}}", body)
    }
}

impl From<Vec<Node>> for Object {
    fn from(nodes: Vec<Node>) -> Self {
        Object { nodes }
    }
}

impl From<Object> for Vec<Node> {
    fn from(obj: Object) -> Self {
        obj.nodes
    }
}

impl IntoIterator for Object {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl FromIterator<Node> for Object {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Object {
            nodes: Vec::from_iter(iter),
        }
    }
}

impl Extend<Node> for Object {
    fn extend<T: IntoIterator<Item = Node>>(&mut self, iter: T) {
        self.nodes.extend(iter);
    }
}
