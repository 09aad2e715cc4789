//! Identifier and keyword lexing.
//!
//! Three forms share one machine: plain names, backtick-quoted names
//! (`` `class` ``) and implicit closure parameters (`$0`). The finished text
//! is a KEYWORD if the rules list it, an IDENTIFIER otherwise.

use swiftlex_util::DiagnosticCode;

use super::core::{Machine, Step};
use crate::rules::LanguageRules;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the identifier machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdentifierState {
    /// Reading a plain name.
    Plain,
    /// Just after an opening backtick.
    BacktickOpen,
    /// Reading a backtick-quoted name.
    Quoted,
    /// Reading the digits after `$`.
    Implicit,
    /// Name complete.
    Accept,
    /// Backtick-quoted name broken by a character that cannot appear in it.
    Malformed,
}

impl Machine for IdentifierState {
    fn is_terminal(self) -> bool {
        matches!(self, IdentifierState::Accept | IdentifierState::Malformed)
    }

    fn transition(self, c: char, rules: &dyn LanguageRules) -> Step<Self> {
        use IdentifierState::*;
        match self {
            Plain if rules.is_identifier_char(c) => Step::take(Plain),
            Plain if c == '`' => Step::take(Accept),
            Plain => Step::leave(Accept),
            BacktickOpen if rules.is_identifier_head(c) => Step::take(Quoted),
            BacktickOpen => Step::leave(Malformed),
            Quoted if rules.is_identifier_char(c) => Step::take(Quoted),
            Quoted if c == '`' => Step::take(Accept),
            Quoted => Step::leave(Malformed),
            Implicit if c.is_ascii_digit() => Step::take(Implicit),
            Implicit if c == '`' || rules.is_identifier_char(c) => Step::take(Accept),
            Implicit => Step::leave(Accept),
            Accept => Step::leave(Accept),
            Malformed => Step::leave(Malformed),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword whose first character is already in
    /// the lexeme. `entry` selects the form.
    pub(crate) fn lex_identifier(&mut self, entry: IdentifierState) -> Token {
        match self.drive(entry) {
            IdentifierState::BacktickOpen | IdentifierState::Quoted | IdentifierState::Malformed => {
                self.error_token(
                    DiagnosticCode::MALFORMED_QUOTED_IDENTIFIER,
                    "malformed backtick-quoted identifier".to_string(),
                )
            },
            _ if self.rules.is_keyword(self.lexeme.as_str()) => {
                self.finish(TokenKind::Keyword)
            },
            _ => self.finish(TokenKind::Identifier),
        }
    }
}
