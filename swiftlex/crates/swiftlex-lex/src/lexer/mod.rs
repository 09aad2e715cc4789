//! Lexer module.
//!
//! The dispatcher and one state machine per token family:
//! - `core` - Main Lexer struct, dispatch and the machine driver
//! - `comment` - Line and block comments
//! - `identifier` - Identifiers, keywords, quoted names and `$0`
//! - `operator` - Operator runs
//! - `punctuation` - Punctuation marks and `->`
//! - `string` - Single-line string literals
//! - `multiline` - `"""` string literals
//! - `directive` - `#` directives
//! - `number` - Number literals

mod comment;
mod core;
mod directive;
mod identifier;
mod multiline;
mod number;
mod operator;
mod punctuation;
mod string;

pub use self::core::{tokenize, tokenize_with, Lexer};
