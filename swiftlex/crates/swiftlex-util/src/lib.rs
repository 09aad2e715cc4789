//! swiftlex-util - Shared foundation types for the swiftlex tokenizer.
//!
//! This crate holds the pieces that are not specific to any one phase:
//!
//! - [`span`] - byte ranges with line/column information
//! - [`diagnostic`] - diagnostics, codes, the fluent builder and the
//!   [`Handler`] that collects them
//!
//! The tokenizer reports every lexical failure twice: once as an ERROR token
//! in the token stream and once as a [`Diagnostic`] carrying the span
//! and a stable [`DiagnosticCode`]. Consumers that only care about the token
//! stream can ignore the handler entirely.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, ErrorsReported, Handler};
pub use span::Span;
