//! Configuration options for BON parsing.
//!
//! ## Examples
//!
//! ```rust
//! use serde_bon::{parse_with_options, ParserOptions};
//!
//! let options = ParserOptions::new().with_max_depth(8);
//! let value = parse_with_options("{a: [1, 2];}", options).unwrap();
//! assert!(value.is_object());
//! ```

/// Default bound on value nesting (objects, lists and nodes inside each other).
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use serde_bon::ParserOptions;
///
/// let options = ParserOptions::new();
/// assert_eq!(options.max_depth, 128);
///
/// let options = ParserOptions::new().with_max_depth(16);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of nested values. A top-level scalar has depth 1.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    ///
    /// Parsing fails with [`Error::MaxDepthExceeded`](crate::Error::MaxDepthExceeded)
    /// once a value would be nested deeper than this.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
