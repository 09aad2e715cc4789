//! Number literal lexing.
//!
//! The scan is deliberately loose: any run of digits, `.`, exponent markers
//! (`e`, `E`, `p`, `P`) and signs is one NUMBER, well-formed or not.

use swiftlex_util::DiagnosticCode;

use super::core::{Machine, Step};
use crate::rules::LanguageRules;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the number machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberState {
    /// Reading number characters.
    Digits,
    /// Number complete.
    Done,
}

fn is_number_char(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | 'e' | 'E' | 'p' | 'P' | '+' | '-')
}

impl Machine for NumberState {
    fn is_terminal(self) -> bool {
        self == NumberState::Done
    }

    fn transition(self, c: char, _rules: &dyn LanguageRules) -> Step<Self> {
        match self {
            NumberState::Digits if is_number_char(c) => Step::take(NumberState::Digits),
            _ => Step::leave(NumberState::Done),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a number whose first digit or sign is already in the lexeme.
    ///
    /// A number directly after a name is an error.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.drive(NumberState::Digits);
        match self.previous_kind() {
            Some(TokenKind::Identifier | TokenKind::Keyword) => self.error_token(
                DiagnosticCode::ADJACENT_NUMBER,
                "number literal cannot directly follow a name".to_string(),
            ),
            _ => self.finish(TokenKind::Number),
        }
    }
}
