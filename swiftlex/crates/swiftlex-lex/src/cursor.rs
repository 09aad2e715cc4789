//! Character cursor for traversing source text.
//!
//! The cursor is the tokenizer's only view of the input: a one-character
//! lookahead (`peek`) and a consuming read (`bump`). It handles UTF-8
//! correctly and tracks line/column information for spans.
//!
//! NUL characters are not part of the character stream. They are stepped
//! over silently and never reach a lexeme.

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use swiftlex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let");
/// assert_eq!(cursor.peek(), Some('l'));
/// assert_eq!(cursor.bump(), Some('l'));
/// assert_eq!(cursor.peek(), Some('e'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        };
        cursor.skip_nul();
        cursor
    }

    /// Returns the next character without consuming it, or `None` at the
    /// end of the source.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let rest = self.source.get(self.position..)?;
        // Fast path for ASCII
        match rest.as_bytes().first() {
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => rest.chars().next(),
            None => None,
        }
    }

    /// Consumes and returns the next character.
    ///
    /// Updates line and column tracking. Returns `None` without moving if
    /// already at the end.
    ///
    /// ```
    /// use swiftlex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.bump();
    /// cursor.bump();
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// ```
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.skip_nul();
        Some(c)
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unconsumed remainder of the source.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the complete source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    fn skip_nul(&mut self) {
        while self.source.as_bytes().get(self.position) == Some(&0) {
            self.position += 1;
        }
    }
}
