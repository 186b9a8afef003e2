//! Character queue feeding the parser.
//!
//! [`CharQueue`] is a first-in-first-out buffer over the sanitized source text.
//! The parser consumes it from the front with [`CharQueue::pop`], while the
//! classifier looks ahead with [`CharQueue::peek`] and [`CharQueue::iter`]
//! without consuming anything.

use std::collections::vec_deque::{self, VecDeque};
use std::fmt;
use std::iter::Copied;

/// Characters removed from the source before lexing.
pub const SANITIZED_CHARS: [char; 2] = ['\t', '\n'];

/// Removes tab and newline characters from `input`.
///
/// # Examples
///
/// ```rust
/// use serde_bon::queue::sanitize;
///
/// assert_eq!(sanitize("{\n\tkey: 1;\n}"), "{key: 1;}");
/// ```
#[must_use]
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| !SANITIZED_CHARS.contains(c)).collect()
}

/// FIFO character buffer with non-consuming lookahead.
///
/// # Examples
///
/// ```rust
/// use serde_bon::queue::CharQueue;
///
/// let mut queue = CharQueue::from("ab");
/// assert_eq!(queue.peek(1), Some('b'));
/// assert_eq!(queue.pop(), Some('a'));
/// assert_eq!(queue.pop(), Some('b'));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CharQueue {
    chars: VecDeque<char>,
    consumed: usize,
}

impl CharQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of characters remaining.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Number of characters popped so far.
    #[inline]
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns the character `ahead` positions past the front without removing it.
    #[inline]
    #[must_use]
    pub fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(ahead).copied()
    }

    /// Enqueues `c` at the back.
    #[inline]
    pub fn push(&mut self, c: char) {
        self.chars.push_back(c);
    }

    /// Removes and returns the front character.
    #[inline]
    pub fn pop(&mut self) -> Option<char> {
        let c = self.chars.pop_front()?;
        self.consumed += 1;
        Some(c)
    }

    /// Iterates over the remaining characters, front to back, without consuming them.
    pub fn iter(&self) -> Copied<vec_deque::Iter<'_, char>> {
        self.chars.iter().copied()
    }
}

impl From<&str> for CharQueue {
    fn from(text: &str) -> Self {
        let mut queue = CharQueue {
            chars: VecDeque::with_capacity(text.len()),
            consumed: 0,
        };
        for c in text.chars() {
            queue.push(c);
        }
        queue
    }
}

impl<'a> IntoIterator for &'a CharQueue {
    type Item = char;
    type IntoIter = Copied<vec_deque::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for CharQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
