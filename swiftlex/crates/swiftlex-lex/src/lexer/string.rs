//! Single-line string literal lexing.
//!
//! The literal runs from `"` to the next unescaped `"`. Its token text is
//! the decoded body. A literal may not directly follow a name or another
//! literal; in that position it is scanned to its end and rejected whole.

use swiftlex_util::DiagnosticCode;

use super::core::{Machine, Step};
use crate::escape::unescape;
use crate::rules::LanguageRules;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// States of the string literal machine. Entered after the opening quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StringState {
    /// Inside the literal body.
    Body,
    /// Just after a backslash.
    Escape,
    /// Closing quote consumed.
    Closed,
}

impl Machine for StringState {
    fn is_terminal(self) -> bool {
        self == StringState::Closed
    }

    fn transition(self, c: char, _rules: &dyn LanguageRules) -> Step<Self> {
        match (self, c) {
            (StringState::Body, '"') => Step::take(StringState::Closed),
            (StringState::Body, '\\') => Step::take(StringState::Escape),
            (StringState::Body, _) | (StringState::Escape, _) => Step::take(StringState::Body),
            (StringState::Closed, _) => Step::leave(StringState::Closed),
        }
    }
}

/// Kinds a string literal may not directly follow.
fn blocks_string_literal(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Literal | TokenKind::Identifier | TokenKind::Keyword
    )
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal whose opening quote is in the lexeme.
    pub(crate) fn lex_string(&mut self) -> Token {
        let state = self.drive(StringState::Body);

        if let Some(previous) = self.previous_kind().filter(|k| blocks_string_literal(*k)) {
            return self.error_token(
                DiagnosticCode::ADJACENT_STRING_LITERAL,
                format!(
                    "string literal cannot directly follow {}",
                    previous.as_str().to_lowercase()
                ),
            );
        }

        if state != StringState::Closed {
            return self.error_token(
                DiagnosticCode::UNTERMINATED_STRING,
                "unterminated string literal".to_string(),
            );
        }

        let raw = self.lexeme.as_str();
        let body = raw
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or_default();
        let text = unescape(body);
        self.finish_with(TokenKind::Literal, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tokenize, SwiftRules};
    use swiftlex_util::Handler;

    fn lex_one(source: &str) -> (TokenKind, String, Vec<DiagnosticCode>) {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, SwiftRules::builtin(), &handler);
        lexer.begin_token();
        let token = lexer.lex_string();
        let codes = handler.diagnostics().into_iter().filter_map(|d| d.code).collect();
        (token.kind(), token.text().to_string(), codes)
    }

    #[test]
    fn test_transition_table() {
        use StringState::*;
        let rules = SwiftRules::builtin();
        assert_eq!(Body.transition('"', rules), Step::take(Closed));
        assert_eq!(Body.transition('\\', rules), Step::take(Escape));
        assert_eq!(Body.transition('x', rules), Step::take(Body));
        assert_eq!(Escape.transition('"', rules), Step::take(Body));
    }

    #[test]
    fn test_simple_literal() {
        assert_eq!(
            lex_one("\"hello\" + x"),
            (TokenKind::Literal, "hello".to_string(), vec![])
        );
    }

    #[test]
    fn test_empty_literal() {
        assert_eq!(lex_one("\"\""), (TokenKind::Literal, String::new(), vec![]));
    }

    #[test]
    fn test_literal_keeps_inner_whitespace() {
        assert_eq!(
            lex_one("\"  two  \""),
            (TokenKind::Literal, "  two  ".to_string(), vec![])
        );
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        assert_eq!(
            lex_one(r#""say \"hi\"" x"#),
            (TokenKind::Literal, "say \"hi\"".to_string(), vec![])
        );
    }

    #[test]
    fn test_escapes_decoded() {
        assert_eq!(
            lex_one(r#""a\tb\n""#),
            (TokenKind::Literal, "a\tb\n".to_string(), vec![])
        );
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            lex_one("\"open"),
            (
                TokenKind::Error,
                "\"open".to_string(),
                vec![DiagnosticCode::UNTERMINATED_STRING]
            )
        );
    }

    #[test]
    fn test_escaped_closing_quote_leaves_literal_open() {
        let (kind, _, codes) = lex_one(r#""abc\""#);
        assert_eq!(kind, TokenKind::Error);
        assert_eq!(codes, vec![DiagnosticCode::UNTERMINATED_STRING]);
    }

    #[test]
    fn test_literal_after_identifier_is_error() {
        let tokens = tokenize("foo\"bar\" baz");
        let pairs: Vec<_> = tokens.iter().map(|t| (t.kind(), t.text())).collect();
        assert_eq!(
            pairs,
            vec![
                (TokenKind::Identifier, "foo"),
                (TokenKind::Error, "\"bar\""),
                (TokenKind::Identifier, "baz"),
            ]
        );
    }

    #[test]
    fn test_literal_after_literal_is_error() {
        let tokens = tokenize("\"a\" \"b\"");
        assert_eq!(tokens.as_slice()[0].kind(), TokenKind::Literal);
        assert_eq!(tokens.as_slice()[1].kind(), TokenKind::Error);
    }

    #[test]
    fn test_literal_after_keyword_is_error() {
        let handler = Handler::new();
        let tokens = crate::tokenize_with("return \"x\"", SwiftRules::builtin(), &handler);
        assert_eq!(tokens.as_slice()[1].kind(), TokenKind::Error);
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::ADJACENT_STRING_LITERAL)
        );
    }

    #[test]
    fn test_literal_after_punctuation_is_allowed() {
        let tokens = tokenize("print(\"hi\")");
        let kinds: Vec<_> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Punctuation,
                TokenKind::Literal,
                TokenKind::Punctuation,
            ]
        );
    }
}
