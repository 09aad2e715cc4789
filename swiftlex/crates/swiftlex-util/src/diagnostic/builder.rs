//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use swiftlex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use swiftlex_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("number cannot follow a name")
///     .code(DiagnosticCode::ADJACENT_NUMBER)
///     .span(Span::new(3, 4, 1, 4))
///     .emit(&handler);
///
/// assert_eq!(handler.diagnostics()[0].span.column, 4);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Build the diagnostic and emit it to a handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let handler = Handler::new();
        DiagnosticBuilder::error("e").emit(&handler);
        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.code.is_none());
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("unexpected character '\\'")
            .code(DiagnosticCode::UNEXPECTED_CHARACTER)
            .span(Span::new(0, 1, 1, 1))
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::UNEXPECTED_CHARACTER));
        assert_eq!(diags[0].span.end, 1);
    }
}
