//! Compiler directive lexing.
//!
//! Characters are consumed from `#` until the text read so far is a known
//! directive, so the shortest listed directive wins: `#elseif` is read as
//! `#else` followed by `if` when both are listed. Once the text is longer
//! than every listed directive the rest of the source is taken without
//! further lookups.

use crate::rules::LanguageRules;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the directive scan. Unlike the other machines the decision
/// depends on the accumulated text, not on the lookahead character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DirectiveState {
    /// Text so far is not a directive; keep reading.
    Scanning,
    /// Text so far is a directive.
    Matched,
    /// Source ran out before a match.
    Exhausted,
    /// Text is longer than any directive and can no longer match.
    Overlong,
}

impl DirectiveState {
    /// Classifies the accumulated `text`.
    pub(crate) fn classify(text: &str, at_end: bool, rules: &dyn LanguageRules) -> Self {
        if text.len() > rules.max_directive_len() {
            DirectiveState::Overlong
        } else if rules.is_directive(text) {
            DirectiveState::Matched
        } else if at_end {
            DirectiveState::Exhausted
        } else {
            DirectiveState::Scanning
        }
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a directive whose `#` is already in the lexeme.
    ///
    /// An unmatched directive takes the rest of the source.
    pub(crate) fn lex_directive(&mut self) -> Token {
        loop {
            match DirectiveState::classify(self.lexeme.as_str(), self.cursor.is_at_end(), self.rules)
            {
                DirectiveState::Scanning => {
                    self.eat();
                },
                DirectiveState::Overlong => {
                    while self.eat().is_some() {}
                    break;
                },
                DirectiveState::Matched | DirectiveState::Exhausted => break,
            }
        }
        self.finish(TokenKind::Directive)
    }
}
