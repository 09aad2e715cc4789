//! Punctuation lexing.
//!
//! Punctuation is one character, except the arrow `->`.

use super::core::{Machine, Step};
use crate::rules::LanguageRules;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the punctuation machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PunctuationState {
    /// After a `-` that may begin an arrow.
    Hyphen,
    /// Mark complete.
    Done,
}

impl Machine for PunctuationState {
    fn is_terminal(self) -> bool {
        self == PunctuationState::Done
    }

    fn transition(self, c: char, _rules: &dyn LanguageRules) -> Step<Self> {
        match (self, c) {
            (PunctuationState::Hyphen, '>') => Step::take(PunctuationState::Done),
            _ => Step::leave(PunctuationState::Done),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a punctuation mark whose first character is in the lexeme.
    pub(crate) fn lex_punctuation(&mut self) -> Token {
        let entry = match self.lexeme.last() {
            Some('-') => PunctuationState::Hyphen,
            _ => PunctuationState::Done,
        };
        self.drive(entry);
        self.finish(TokenKind::Punctuation)
    }
}
