//! Comment lexing.
//!
//! Handles `//` line comments and `/* */` block comments. The comment text
//! is kept whole, delimiters included.

use swiftlex_util::DiagnosticCode;

use super::core::{Machine, Step};
use crate::rules::LanguageRules;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the comment machine. Entered after the leading `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentState {
    /// Second character decides line or block.
    Start,
    /// Inside a line comment.
    Line,
    /// Inside a block comment.
    Block,
    /// Inside a block comment, just after a `*`.
    BlockStar,
    /// Comment complete.
    Done,
    /// The second character was neither `/` nor `*`.
    Invalid,
}

impl Machine for CommentState {
    fn is_terminal(self) -> bool {
        matches!(self, CommentState::Done | CommentState::Invalid)
    }

    fn transition(self, c: char, rules: &dyn LanguageRules) -> Step<Self> {
        use CommentState::*;
        match (self, c) {
            (Start, '/') => Step::take(Line),
            (Start, '*') => Step::take(Block),
            (Start, _) => Step::leave(Invalid),
            (Line, c) if rules.is_line_break(c) => Step::leave(Done),
            (Line, _) => Step::take(Line),
            (Block, '*') => Step::take(BlockStar),
            (Block, _) => Step::take(Block),
            (BlockStar, '/') => Step::take(Done),
            (BlockStar, '*') => Step::take(BlockStar),
            (BlockStar, _) => Step::take(Block),
            (Done, _) => Step::leave(Done),
            (Invalid, _) => Step::leave(Invalid),
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a comment whose leading `/` is already in the lexeme.
    ///
    /// A comment cut short by the end of the source is still a COMMENT.
    pub(crate) fn lex_comment(&mut self) -> Token {
        match self.drive(CommentState::Start) {
            CommentState::Start | CommentState::Invalid => self.error_token(
                DiagnosticCode::INVALID_COMMENT_START,
                "expected `/` or `*` to start a comment".to_string(),
            ),
            _ => self.finish(TokenKind::Comment),
        }
    }
}
