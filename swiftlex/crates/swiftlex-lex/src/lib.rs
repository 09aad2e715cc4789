//! swiftlex-lex - State-machine tokenizer for Swift-like source text
//!
//! This crate turns source text into a flat sequence of classified tokens.
//! It is meant for highlighters, indexers and similar tools that need the
//! lexical structure of Swift code without a parser.
//!
//! # Example Usage
//!
//! ```
//! use swiftlex_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("// comment\nlet x = 1");
//! let pairs: Vec<_> = tokens.iter().map(|t| (t.kind(), t.text())).collect();
//! assert_eq!(
//!     pairs,
//!     [
//!         (TokenKind::Comment, "// comment"),
//!         (TokenKind::Keyword, "let"),
//!         (TokenKind::Identifier, "x"),
//!         (TokenKind::Operator, "="),
//!         (TokenKind::Number, "1"),
//!     ]
//! );
//! ```
//!
//! # How it works
//!
//! A dispatcher reads one character, picks the sub-scanner that owns the
//! token it starts, and hands over. Each sub-scanner is an explicit state
//! machine that consumes until it reaches a terminal state and then decides
//! the token's kind. Whitespace separates tokens and is never part of one.
//!
//! What counts as a keyword, directive, punctuation mark or operator
//! character comes from a [`LanguageRules`] implementation. [`SwiftRules`]
//! is the built-in one.
//!
//! # Errors
//!
//! Tokenization never fails. Text that cannot be tokenized becomes an
//! [`TokenKind::Error`] token and scanning resumes after it. Each ERROR token
//! is also reported as a diagnostic to the [`Handler`](swiftlex_util::Handler)
//! given to [`Lexer::new`] or [`tokenize_with`].
//!
//! # Module Structure
//!
//! - [`token`] - Token, kind and stream types
//! - [`lexer`] - Dispatcher and sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`lexeme`] - Accumulator for the token in progress
//! - [`rules`] - Language rules and the Swift rule set
//! - [`escape`] - Escape decoding for string literals

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod escape;
pub mod lexeme;
pub mod lexer;
pub mod rules;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{tokenize, tokenize_with, Lexer};
pub use rules::{LanguageRules, RulesError, SwiftRules};
pub use token::{Token, TokenKind, TokenStream};
