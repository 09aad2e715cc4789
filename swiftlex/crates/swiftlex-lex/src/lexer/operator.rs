//! Operator lexing.

use super::core::{Machine, Step};
use crate::rules::LanguageRules;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the operator machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OperatorState {
    /// Reading an operator that began with an operator head.
    Run,
    /// Reading an operator that began with `.`; dots may continue it.
    DotRun,
    /// Operator complete.
    Done,
}

impl Machine for OperatorState {
    fn is_terminal(self) -> bool {
        self == OperatorState::Done
    }

    fn transition(self, c: char, rules: &dyn LanguageRules) -> Step<Self> {
        match self {
            OperatorState::Done => Step::leave(OperatorState::Done),
            _ if rules.is_operator_char(c) => Step::take(self),
            OperatorState::DotRun if c == '.' => Step::take(self),
            _ => Step::leave(OperatorState::Done),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of operator characters. `dot_leading` is set
    /// when the run started with `.`.
    pub(crate) fn lex_operator(&mut self, dot_leading: bool) -> Token {
        let entry = if dot_leading {
            OperatorState::DotRun
        } else {
            OperatorState::Run
        };
        self.drive(entry);
        self.finish(TokenKind::Operator)
    }
}
