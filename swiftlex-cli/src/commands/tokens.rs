//! Tokens command implementation.
//!
//! Prints every token of every input in lexical order, either as a
//! `KIND :text` listing or as a JSON document.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use swiftlex_lex::Token;

use crate::commands::common::{
    check_errors, lex_files, load_rules, report_diagnostics, LexedFile, OutputFormat, RULE_LINE,
};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source files to tokenize.
    pub inputs: Vec<PathBuf>,
    /// Listing format.
    pub format: OutputFormat,
    /// Directory of custom rule files.
    pub rules_dir: Option<PathBuf>,
    /// Fail when any input produced ERROR tokens.
    pub deny_errors: bool,
}

#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    path: String,
    tokens: Vec<TokenRecord<'a>>,
    errors: usize,
}

#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    line: u32,
    column: u32,
    start: usize,
    end: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let span = token.span();
        Self {
            kind: token.kind().as_str(),
            text: token.text(),
            line: span.line,
            column: span.column,
            start: span.start,
            end: span.end,
        }
    }
}

/// Run the tokens command, writing to stdout.
pub fn run_tokens(args: &TokensArgs) -> Result<()> {
    let rules = load_rules(args.rules_dir.as_deref())?;
    let files = lex_files(&args.inputs, &rules)?;
    files.iter().for_each(report_diagnostics);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&files, args.format, &mut out)?;
    out.flush()?;

    check_errors(&files, args.deny_errors)
}

/// Write the listing for `files` to `out`.
pub fn write_tokens<W: Write>(files: &[LexedFile], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in files.iter().flat_map(|file| file.tokens.iter()) {
                writeln!(out, "{}", RULE_LINE)?;
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<FileRecord<'_>> = files
                .iter()
                .map(|file| FileRecord {
                    path: file.path.display().to_string(),
                    tokens: file.tokens.iter().map(TokenRecord::from).collect(),
                    errors: file.error_count(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
