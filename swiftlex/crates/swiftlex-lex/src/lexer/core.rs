//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, the dispatcher that routes
//! each token start to a sub-scanner, and the driver that runs a
//! sub-scanner's state machine over the cursor.

use std::fmt;

use swiftlex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::lexeme::Lexeme;
use crate::rules::{LanguageRules, SwiftRules};
use crate::token::{Token, TokenKind, TokenStream};

use super::identifier::IdentifierState;

/// One edge of a sub-scanner state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step<S> {
    /// State after the edge.
    pub next: S,
    /// Whether the character that selected the edge joins the lexeme.
    pub consume: bool,
}

impl<S> Step<S> {
    /// Move to `next`, consuming the character.
    pub fn take(next: S) -> Self {
        Self {
            next,
            consume: true,
        }
    }

    /// Move to `next`, leaving the character for the following token.
    pub fn leave(next: S) -> Self {
        Self {
            next,
            consume: false,
        }
    }
}

/// A sub-scanner state machine.
///
/// `transition` is a pure function of the current state, the lookahead
/// character and the rules. The lexer drives it until a terminal state is
/// reached or the source runs out.
pub(crate) trait Machine: Copy + Eq + fmt::Debug {
    /// Returns true once no further input is read.
    fn is_terminal(self) -> bool;

    /// The edge taken on `c`.
    fn transition(self, c: char, rules: &dyn LanguageRules) -> Step<Self>;
}

/// Lexer for Swift-like source text.
///
/// The lexer reads one character at a time, decides which sub-scanner owns
/// the token it starts, and lets that sub-scanner's state machine consume
/// the rest. Every token is appended to an internal [`TokenStream`] so
/// sub-scanners can look at the previous token.
///
/// ```
/// use swiftlex_lex::{Lexer, SwiftRules, TokenKind};
/// use swiftlex_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("let x", SwiftRules::builtin(), &handler);
/// let first = lexer.next_token().unwrap();
/// assert_eq!(first.kind(), TokenKind::Keyword);
/// assert_eq!(lexer.next_token().unwrap().text(), "x");
/// assert!(lexer.next_token().is_none());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Language definition consulted by every sub-scanner.
    pub(crate) rules: &'a dyn LanguageRules,

    /// Error handler for reporting lexical errors.
    handler: &'a Handler,

    /// Text consumed for the token in progress.
    pub(crate) lexeme: Lexeme,

    /// Tokens produced so far.
    tokens: TokenStream,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for `source`.
    pub fn new(source: &'a str, rules: &'a dyn LanguageRules, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            rules,
            handler,
            lexeme: Lexeme::new(),
            tokens: TokenStream::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token, or `None` once the source is exhausted.
    ///
    /// The token is also appended to the lexer's own stream.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.cursor.is_at_end() {
            return None;
        }

        let token = self.dispatch();
        trace!(kind = %token.kind(), text = token.text(), span = %token.span(), "token");
        self.tokens.push(token.clone());
        Some(token)
    }

    /// Runs the lexer to the end of the source and returns every token.
    pub fn tokenize(mut self) -> TokenStream {
        while self.next_token().is_some() {}
        debug!(
            tokens = self.tokens.len(),
            errors = self.tokens.error_count(),
            "tokenization finished"
        );
        self.tokens
    }

    /// Tokens produced so far.
    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Routes the character at the cursor to the sub-scanner that owns it.
    fn dispatch(&mut self) -> Token {
        self.lexeme.clear();

        loop {
            self.mark_token_start();
            let Some(c) = self.eat() else {
                return self.eof_token();
            };
            let next = self.cursor.peek();

            match (c, next) {
                ('/', Some('/' | '*')) => return self.lex_comment(),
                ('`', _) => return self.lex_identifier(IdentifierState::BacktickOpen),
                ('$', _) => return self.lex_identifier(IdentifierState::Implicit),
                ('"', Some('"')) => return self.lex_multiline_string(),
                ('"', _) => return self.lex_string(),
                ('#', _) => return self.lex_directive(),
                ('.', Some(n)) if n == '.' || self.rules.is_operator_char(n) => {
                    return self.lex_operator(true);
                },
                ('-', Some(n)) if n.is_ascii_digit() => return self.lex_number(),
                ('-', Some('>')) => return self.lex_punctuation(),
                _ => {},
            }

            if self.rules.is_identifier_head(c) {
                return self.lex_identifier(IdentifierState::Plain);
            }
            if self.rules.is_operator_head(c) {
                return self.lex_operator(false);
            }
            if self.rules.is_punctuation_mark(c.encode_utf8(&mut [0; 4])) {
                return self.lex_punctuation();
            }
            if c.is_ascii_digit() {
                return self.lex_number();
            }
            if c.is_whitespace() {
                self.lexeme.clear();
                if self.cursor.is_at_end() {
                    self.mark_token_start();
                    return self.eof_token();
                }
                continue;
            }

            return self.error_token(
                DiagnosticCode::UNEXPECTED_CHARACTER,
                format!("unexpected character {:?}", c),
            );
        }
    }

    /// Drives `state` until it is terminal or the source runs out, and
    /// returns the state it stopped in.
    pub(crate) fn drive<M: Machine>(&mut self, mut state: M) -> M {
        while !state.is_terminal() {
            let Some(c) = self.cursor.peek() else {
                break;
            };
            let step = state.transition(c, self.rules);
            if step.consume {
                self.eat();
            }
            state = step.next;
        }
        state
    }

    /// Consumes one character into the lexeme.
    pub(crate) fn eat(&mut self) -> Option<char> {
        let c = self.cursor.bump()?;
        self.lexeme.push(c);
        Some(c)
    }

    /// Kind of the last token produced, for adjacency rules.
    pub(crate) fn previous_kind(&self) -> Option<TokenKind> {
        self.tokens.previous_kind()
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Builds a token of `kind` from the lexeme.
    pub(crate) fn finish(&mut self, kind: TokenKind) -> Token {
        let text = self.lexeme.take();
        Token::new(kind, text, self.token_span())
    }

    /// Builds a token of `kind` with text other than the raw lexeme.
    pub(crate) fn finish_with(&mut self, kind: TokenKind, text: String) -> Token {
        self.lexeme.clear();
        Token::new(kind, text, self.token_span())
    }

    /// Reports `message` and turns the lexeme into an ERROR token.
    pub(crate) fn error_token(&mut self, code: DiagnosticCode, message: String) -> Token {
        self.report_error(code, message);
        self.finish(TokenKind::Error)
    }

    fn eof_token(&mut self) -> Token {
        self.finish_with(TokenKind::Eof, "eof".to_string())
    }

    /// Reports a lexical error at the current token position.
    pub fn report_error(&self, code: DiagnosticCode, message: String) {
        DiagnosticBuilder::error(message)
            .code(code)
            .span(self.token_span())
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Begins a token the way the dispatcher does, consuming its first
    /// character, so a single sub-scanner can be exercised directly.
    #[cfg(test)]
    pub(crate) fn begin_token(&mut self) -> Option<char> {
        self.lexeme.clear();
        self.mark_token_start();
        self.eat()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes `source` with the built-in Swift rules.
///
/// Diagnostics are discarded; ERROR tokens in the result still mark every
/// failure.
///
/// ```
/// use swiftlex_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("a->b");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Punctuation, TokenKind::Identifier]
/// );
/// ```
pub fn tokenize(source: &str) -> TokenStream {
    let handler = Handler::new();
    tokenize_with(source, SwiftRules::builtin(), &handler)
}

/// Tokenizes `source` with explicit rules, reporting diagnostics to
/// `handler`.
pub fn tokenize_with(source: &str, rules: &dyn LanguageRules, handler: &Handler) -> TokenStream {
    Lexer::new(source, rules, handler).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Helper to collect `(kind, text)` pairs from source.
    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(Token::kind).collect()
    }

    fn pair(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input_is_eof() {
        assert_eq!(lex_all("   \n\t"), vec![pair(TokenKind::Eof, "eof")]);
    }

    #[test]
    fn test_trailing_whitespace_emits_eof() {
        assert_eq!(
            lex_all("x \n"),
            vec![pair(TokenKind::Identifier, "x"), pair(TokenKind::Eof, "eof")]
        );
        assert_eq!(lex_all("x"), vec![pair(TokenKind::Identifier, "x")]);
    }

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            lex_all("// comment\nlet x = 1"),
            vec![
                pair(TokenKind::Comment, "// comment"),
                pair(TokenKind::Keyword, "let"),
                pair(TokenKind::Identifier, "x"),
                pair(TokenKind::Operator, "="),
                pair(TokenKind::Number, "1"),
            ]
        );
    }

    #[test]
    fn test_arrow_is_punctuation() {
        assert_eq!(
            lex_all("a->b"),
            vec![
                pair(TokenKind::Identifier, "a"),
                pair(TokenKind::Punctuation, "->"),
                pair(TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_negative_number() {
        assert_eq!(
            lex_all("x = -42"),
            vec![
                pair(TokenKind::Identifier, "x"),
                pair(TokenKind::Operator, "="),
                pair(TokenKind::Number, "-42"),
            ]
        );
    }

    #[test]
    fn test_minus_operator() {
        assert_eq!(lex_kinds("a - b"), vec![
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Identifier
        ]);
    }

    #[test]
    fn test_slash_without_comment_is_operator() {
        assert_eq!(
            lex_all("a / b"),
            vec![
                pair(TokenKind::Identifier, "a"),
                pair(TokenKind::Operator, "/"),
                pair(TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_dot_leading_operator() {
        assert_eq!(
            lex_all("0..<n"),
            vec![
                pair(TokenKind::Number, "0.."),
                pair(TokenKind::Operator, "<"),
                pair(TokenKind::Identifier, "n"),
            ]
        );
        assert_eq!(
            lex_all("a ..< b"),
            vec![
                pair(TokenKind::Identifier, "a"),
                pair(TokenKind::Operator, "..<"),
                pair(TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_member_access_dot_is_punctuation() {
        assert_eq!(
            lex_all("self.x"),
            vec![
                pair(TokenKind::Keyword, "self"),
                pair(TokenKind::Punctuation, "."),
                pair(TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let handler = Handler::new();
        let tokens = tokenize_with("a \\ b", SwiftRules::builtin(), &handler);
        let texts: Vec<_> = tokens.iter().map(|t| (t.kind(), t.text())).collect();
        assert_eq!(
            texts,
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Error, "\\"),
                (TokenKind::Identifier, "b"),
            ]
        );
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::UNEXPECTED_CHARACTER));
        assert_eq!(diags[0].span, Span::new(2, 3, 1, 3));
    }

    #[test]
    fn test_spans_skip_leading_whitespace() {
        let tokens = tokenize("let\n  value");
        let spans: Vec<_> = tokens.iter().map(Token::span).collect();
        assert_eq!(spans, vec![Span::new(0, 3, 1, 1), Span::new(6, 11, 2, 3)]);
    }

    #[test]
    fn test_iterator_matches_tokenize() {
        let source = "func f(_ x: Int) -> Int { return x * 2 }";
        let handler = Handler::new();
        let from_iter: Vec<Token> = Lexer::new(source, SwiftRules::builtin(), &handler).collect();
        assert_eq!(from_iter, tokenize(source).into_tokens());
    }

    #[test]
    fn test_lexer_tracks_tokens() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a b", SwiftRules::builtin(), &handler);
        lexer.next_token();
        assert_eq!(lexer.tokens().len(), 1);
        assert_eq!(lexer.position(), 1);
        assert_eq!((lexer.line(), lexer.column()), (1, 2));
    }

    #[test]
    fn test_every_error_token_has_a_diagnostic() {
        let handler = Handler::new();
        let source = "foo\"bar\" x 1 \\ `a b ~";
        let tokens = tokenize_with(source, SwiftRules::builtin(), &handler);
        assert_eq!(tokens.error_count(), handler.error_count());
        assert!(tokens.error_count() >= 3);
    }

    #[test]
    fn test_step_constructors() {
        assert_eq!(Step::take(1), Step { next: 1, consume: true });
        assert_eq!(Step::leave(2), Step { next: 2, consume: false });
    }

    #[test]
    fn test_termination_on_arbitrary_input() {
        proptest!(|(input in "\\PC{0,200}")| {
            let tokens = tokenize(&input);
            prop_assert!(tokens.len() <= input.chars().count() + 1);
        });
    }

    #[test]
    fn test_reconstruction_without_whitespace() {
        proptest!(|(input in "[a-z0-9(){}\\[\\],:;+*%<>&|^~= \n]{0,80}")| {
            let tokens = tokenize(&input);
            let rebuilt: String = tokens
                .iter()
                .filter(|t| t.kind() != TokenKind::Eof)
                .map(Token::text)
                .collect();
            let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(rebuilt, expected);
        });
    }

    fn source_piece() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z]{1,6}",
            "// [a-z ]{0,8}",
            "/\\* [a-z ]{0,8} \\*/",
            "\"[a-z ]{1,6}\"",
            Just("#if".to_string()),
            Just("#endif".to_string()),
            Just("..<".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
        ]
    }

    #[test]
    fn test_reconstruction_with_comments_literals_and_directives() {
        let separator = prop_oneof![Just(' '), Just('\n')];
        proptest!(|(pieces in prop::collection::vec((source_piece(), separator), 0..16))| {
            let mut input = String::new();
            for (piece, separator) in &pieces {
                input.push_str(piece);
                input.push(if piece.starts_with("//") { '\n' } else { *separator });
            }
            let expected: String = pieces.iter().map(|(piece, _)| piece.as_str()).collect();

            let rebuilt: String = tokenize(&input)
                .iter()
                .filter(|t| t.kind() != TokenKind::Eof)
                .map(|t| match t.kind() {
                    TokenKind::Literal => format!("\"{}\"", t.text()),
                    _ => t.text().to_string(),
                })
                .collect();
            prop_assert_eq!(rebuilt, expected);
        });
    }

    #[test]
    fn test_retokenizing_joined_texts_is_stable() {
        proptest!(|(input in "[a-z0-9(){}\\[\\],:;+*%<>&|^~= \n]{0,80}")| {
            let first: Vec<_> = lex_all(&input)
                .into_iter()
                .filter(|(kind, _)| *kind != TokenKind::Eof)
                .collect();
            let joined = first
                .iter()
                .map(|(_, text)| text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            prop_assert_eq!(lex_all(&joined), first);
        });
    }
}
