//! Source location tracking.
//!
//! A [`Span`] records the byte range of a lexeme together with the 1-based
//! line and column where it starts.
//!
//! # Examples
//!
//! ```
//! use swiftlex_util::span::Span;
//!
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.snippet("let x = 1"), Some("x"));
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

/// Source location span
///
/// Byte offsets are half-open (`start..end`). `line` and `column` describe
/// the first character of the span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Extract the covered text from `source`, if the span is in bounds
    /// and falls on character boundaries.
    pub fn snippet<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
