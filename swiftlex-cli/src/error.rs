//! Error handling module for the swiftlex CLI.
//!
//! Lexical problems in the input are not errors here: they are ERROR tokens
//! and diagnostics. This type covers everything around tokenization, such
//! as reading inputs, loading rules and configuration, and writing output.

use std::path::PathBuf;

use swiftlex_lex::RulesError;
use swiftlex_util::ErrorsReported;
use thiserror::Error;

/// Main error type for the swiftlex CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Arguments were rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Custom rule files could not be loaded.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// Input produced ERROR tokens and `--deny-errors` was given.
    #[error(transparent)]
    Lexical(#[from] ErrorsReported),

    /// Writing to stdout failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
