//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the text it was built from and the
//! [`Span`] it covers. The tokenizer appends tokens to a [`TokenStream`],
//! which sub-scanners consult for the previous token when applying
//! adjacency rules.

use std::fmt;
use std::slice;

use swiftlex_util::Span;

/// The category of a token.
///
/// Exactly one kind is decided for every token, at the terminal state of
/// the sub-scanner that built it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// A name, including backtick-quoted names and implicit parameters (`$0`).
    Identifier,
    /// A reserved word.
    Keyword,
    /// A run of operator characters.
    Operator,
    /// A punctuation mark, or the arrow `->`.
    Punctuation,
    /// A string literal; the text is the decoded value without delimiters.
    Literal,
    /// A numeric literal.
    Number,
    /// A line or block comment, delimiters included.
    Comment,
    /// A compiler directive such as `#if`.
    Directive,
    /// Text that could not be tokenized.
    Error,
    /// Marker emitted when the source ends in trailing whitespace.
    Eof,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Identifier,
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Literal,
        TokenKind::Number,
        TokenKind::Comment,
        TokenKind::Directive,
        TokenKind::Error,
        TokenKind::Eof,
    ];

    /// The upper-case display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Literal => "LITERAL",
            TokenKind::Number => "NUMBER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Directive => "DIRECTIVE",
            TokenKind::Error => "ERROR",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for kinds whose text keeps surrounding whitespace.
    #[inline]
    pub const fn keeps_whitespace(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Literal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified piece of source text.
///
/// ```
/// use swiftlex_lex::{Token, TokenKind};
/// use swiftlex_util::Span;
///
/// let token = Token::new(TokenKind::Keyword, " let ", Span::new(0, 3, 1, 1));
/// assert_eq!(token.text(), "let");
/// assert_eq!(token.to_string(), "KEYWORD :let");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    /// Builds a token. Surrounding whitespace is trimmed from `text` unless
    /// the kind [keeps it](TokenKind::keeps_whitespace).
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        let text = text.into();
        let text = if kind.keeps_whitespace() {
            text
        } else {
            let trimmed = text.trim();
            if trimmed.len() == text.len() {
                text
            } else {
                trimmed.to_string()
            }
        };
        Self { kind, text, span }
    }

    /// The token's kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The source range the token was built from.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true if this is an ERROR token.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl fmt::Display for Token {
    /// `KIND :text`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :{}", self.kind, self.text)
    }
}

/// The ordered output of one tokenization pass.
///
/// Tokens are only ever appended, so insertion order is lexical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The most recently appended token.
    #[inline]
    pub fn previous(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Kind of the most recently appended token.
    #[inline]
    pub fn previous_kind(&self) -> Option<TokenKind> {
        self.previous().map(Token::kind)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates the tokens in lexical order.
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of ERROR tokens.
    pub fn error_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_error()).count()
    }

    /// Consumes the stream, returning the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s> IntoIterator for &'s TokenStream {
    type Item = &'s Token;
    type IntoIter = slice::Iter<'s, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_is_upper_case() {
        assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        for kind in TokenKind::ALL {
            assert_eq!(kind.as_str(), kind.as_str().to_uppercase());
        }
    }

    #[test]
    fn test_trim_applies_except_comment_and_literal() {
        let op = Token::new(TokenKind::Operator, "\t+= ", Span::DUMMY);
        assert_eq!(op.text(), "+=");

        let lit = Token::new(TokenKind::Literal, "  padded  ", Span::DUMMY);
        assert_eq!(lit.text(), "  padded  ");

        let comment = Token::new(TokenKind::Comment, "/* a */ ", Span::DUMMY);
        assert_eq!(comment.text(), "/* a */ ");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Punctuation, "->", Span::DUMMY);
        assert_eq!(token.to_string(), "PUNCTUATION :->");
    }

    #[test]
    fn test_stream_previous() {
        let mut stream = TokenStream::new();
        assert!(stream.previous().is_none());
        stream.push(Token::new(TokenKind::Identifier, "a", Span::DUMMY));
        stream.push(Token::new(TokenKind::Error, "\"", Span::DUMMY));
        assert_eq!(stream.previous_kind(), Some(TokenKind::Error));
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.error_count(), 1);

        let kinds: Vec<_> = stream.iter().map(Token::kind).collect();
        assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Error]);
        assert_eq!(stream.into_tokens().len(), 2);
    }
}
