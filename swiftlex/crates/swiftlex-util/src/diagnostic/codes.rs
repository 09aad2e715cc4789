//! Diagnostic codes for categorizing lexical errors.
//!
//! Codes follow the format `{prefix}{number:04}`. Every lexical failure the
//! tokenizer can report has a dedicated `L` code so tools can filter on it.
//!
//! ```
//! use swiftlex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::UNTERMINATED_STRING;
//! assert_eq!(code.to_string(), "L0003");
//! assert_eq!(code.name, "unterminated_string");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (`L` for lexical)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
    /// Short snake_case name
    pub name: &'static str,
}

impl DiagnosticCode {
    /// Comment sub-scanner entered without a second `/` or a `*`.
    pub const INVALID_COMMENT_START: Self = Self::new("L", 1, "invalid_comment_start");
    /// Backtick-quoted identifier that is malformed or unterminated.
    pub const MALFORMED_QUOTED_IDENTIFIER: Self =
        Self::new("L", 2, "malformed_quoted_identifier");
    /// Single-line string literal reached end of input.
    pub const UNTERMINATED_STRING: Self = Self::new("L", 3, "unterminated_string");
    /// String literal directly after an identifier, keyword or literal.
    pub const ADJACENT_STRING_LITERAL: Self = Self::new("L", 4, "adjacent_string_literal");
    /// Number directly after an identifier or keyword.
    pub const ADJACENT_NUMBER: Self = Self::new("L", 5, "adjacent_number");
    /// Character that starts no token.
    pub const UNEXPECTED_CHARACTER: Self = Self::new("L", 6, "unexpected_character");

    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32, name: &'static str) -> Self {
        Self {
            prefix,
            number,
            name,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
