//! Common types and utilities for swiftlex commands.
//!
//! Reading inputs, choosing the rule set, tokenizing a file and reporting
//! its diagnostics work the same way for every command.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use swiftlex_lex::{tokenize_with, SwiftRules, TokenStream};
use swiftlex_util::{Diagnostic, ErrorsReported, Handler};
use tracing::debug;

use crate::error::{CliError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    /// Parses a format name (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::Validation(format!("unknown format: {}", s))),
        }
    }
}

/// Picks the format from the flag if given, otherwise from configuration.
pub fn resolve_format(flag: Option<&str>, configured: &str) -> Result<OutputFormat> {
    match flag {
        Some(name) => name.parse(),
        None => configured.parse().map_err(|_| {
            CliError::Config(format!("invalid format in configuration: {}", configured))
        }),
    }
}

// ============================================================================
// Tokenizing files
// ============================================================================

/// Separator printed between listing entries.
pub const RULE_LINE: &str = "--------------------------------------------------";

/// One tokenized input file.
#[derive(Debug)]
pub struct LexedFile {
    /// The input path as given.
    pub path: PathBuf,
    /// Source text.
    pub source: String,
    /// Tokens in lexical order.
    pub tokens: TokenStream,
    /// Diagnostics reported while tokenizing.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexedFile {
    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Loads rule files from `rules_dir`, or the built-in Swift rules.
pub fn load_rules(rules_dir: Option<&Path>) -> Result<SwiftRules> {
    match rules_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading rule files");
            Ok(SwiftRules::from_dir(dir)?)
        },
        None => Ok(SwiftRules::default()),
    }
}

/// Reads a source file.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and tokenizes one file.
pub fn lex_file(path: &Path, rules: &SwiftRules) -> Result<LexedFile> {
    let source = read_source(path)?;
    let handler = Handler::new();
    let tokens = tokenize_with(&source, rules, &handler);
    let diagnostics = handler.take_diagnostics();
    debug!(
        path = %path.display(),
        tokens = tokens.len(),
        errors = diagnostics.len(),
        "lexed file"
    );
    Ok(LexedFile {
        path: path.to_path_buf(),
        source,
        tokens,
        diagnostics,
    })
}

/// Reads and tokenizes every file, failing on the first unreadable one.
pub fn lex_files(paths: &[PathBuf], rules: &SwiftRules) -> Result<Vec<LexedFile>> {
    if paths.is_empty() {
        return Err(CliError::Validation("no input files specified".to_string()));
    }
    paths.iter().map(|path| lex_file(path, rules)).collect()
}

/// Prints each diagnostic to stderr, prefixed with the file path.
pub fn report_diagnostics(file: &LexedFile) {
    for diagnostic in &file.diagnostics {
        eprintln!("{}: {}", file.path.display(), diagnostic);
    }
}

/// Fails with the total error count when `deny` is set and any file had
/// lexical errors.
pub fn check_errors(files: &[LexedFile], deny: bool) -> Result<()> {
    let count: usize = files.iter().map(LexedFile::error_count).sum();
    if deny && count > 0 {
        return Err(ErrorsReported { count }.into());
    }
    Ok(())
}
