//! The lexeme accumulator.
//!
//! Every character the tokenizer consumes for the token in progress is
//! appended here. The buffer is cleared when a token starts and handed to
//! [`Token`](crate::Token) construction when it ends.

use std::fmt;

/// Characters consumed for the token currently being scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexeme {
    text: String,
}

impl Lexeme {
    /// Creates an empty lexeme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one consumed character.
    #[inline]
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Discards everything accumulated so far.
    #[inline]
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The accumulated text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing has been accumulated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the accumulated text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// The most recently accumulated character.
    pub fn last(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Moves the accumulated text out, leaving the lexeme empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
