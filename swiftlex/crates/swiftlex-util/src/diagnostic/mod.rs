//! Diagnostic module - Error reporting infrastructure.
//!
//! Every diagnostic the tokenizer produces is an error: the offending text
//! also became an ERROR token in the stream.
//!
//! # Examples
//!
//! ```
//! use swiftlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use swiftlex_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated string literal")
//!     .code(DiagnosticCode::UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;
use thiserror::Error;

/// A lexical error message with its location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl fmt::Display for Diagnostic {
    /// Renders `error[L0003]: message at 1:5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {} at {}", code, self.message, self.span),
            None => write!(f, "error: {} at {}", self.message, self.span),
        }
    }
}

/// Lexical errors were reported and the caller asked to fail on them.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{count} lexical error(s) reported")]
pub struct ErrorsReported {
    /// Number of error diagnostics
    pub count: usize,
}

/// Handler for collecting and reporting diagnostics
///
/// Reporting goes through `&self`, so a handler can be shared by reference
/// with everything that tokenizes one input.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics, in reporting order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics out of the handler, leaving it empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(message: &str) -> Diagnostic {
        Diagnostic {
            message: message.to_string(),
            span: Span::DUMMY,
            code: None,
        }
    }

    #[test]
    fn test_diagnostic_display() {
        let mut diag = error("unterminated string literal");
        diag.span = Span::new(0, 3, 2, 7);
        assert_eq!(diag.to_string(), "error: unterminated string literal at 2:7");

        diag.code = Some(DiagnosticCode::UNTERMINATED_STRING);
        assert_eq!(
            diag.to_string(),
            "error[L0003]: unterminated string literal at 2:7"
        );
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        handler.emit_diagnostic(error("a"));
        handler.emit_diagnostic(error("b"));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }

    #[test]
    fn test_handler_take() {
        let handler = Handler::new();
        handler.emit_diagnostic(error("e"));
        let taken = handler.take_diagnostics();
        assert_eq!(taken.len(), 1);
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_errors_reported_message() {
        assert_eq!(
            ErrorsReported { count: 2 }.to_string(),
            "2 lexical error(s) reported"
        );
    }
}
