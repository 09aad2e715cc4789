//! Multiline string literal lexing.
//!
//! A multiline literal is delimited by `"""` on both sides. The machine
//! counts consecutive unescaped quotes and closes on the third. `""` not
//! followed by a third quote is simply the empty literal.
//!
//! Unlike single-line literals, a multiline literal that runs into the end
//! of the source is still a LITERAL holding whatever was read.

use super::core::{Machine, Step};
use crate::escape::unescape;
use crate::rules::LanguageRules;
use crate::token::{Token, TokenKind};
use crate::Lexer;

const DELIMITER: &str = "\"\"\"";

/// States of the closing-delimiter machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MultilineState {
    /// Inside the body; the count is how many quotes were just read.
    Quotes(u8),
    /// Just after a backslash.
    Escape,
    /// Closing delimiter consumed.
    Closed,
}

impl Machine for MultilineState {
    fn is_terminal(self) -> bool {
        self == MultilineState::Closed
    }

    fn transition(self, c: char, _rules: &dyn LanguageRules) -> Step<Self> {
        match (self, c) {
            (MultilineState::Quotes(2), '"') => Step::take(MultilineState::Closed),
            (MultilineState::Quotes(n), '"') => Step::take(MultilineState::Quotes(n + 1)),
            (MultilineState::Quotes(_), '\\') => Step::take(MultilineState::Escape),
            (MultilineState::Quotes(_), _) | (MultilineState::Escape, _) => {
                Step::take(MultilineState::Quotes(0))
            },
            (MultilineState::Closed, _) => Step::leave(MultilineState::Closed),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a literal starting with `""`; the first quote is in the lexeme
    /// and the second is next.
    pub(crate) fn lex_multiline_string(&mut self) -> Token {
        self.eat();
        if self.cursor.peek() != Some('"') {
            return self.finish_with(TokenKind::Literal, String::new());
        }
        self.eat();

        let state = self.drive(MultilineState::Quotes(0));

        let raw = self.lexeme.as_str();
        let body = raw.strip_prefix(DELIMITER).unwrap_or(raw);
        let body = match state {
            MultilineState::Closed => body.strip_suffix(DELIMITER).unwrap_or(body),
            _ => body,
        };
        let text = unescape(body);
        self.finish_with(TokenKind::Literal, text)
    }
}
