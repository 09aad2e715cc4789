//! HTML command implementation.
//!
//! Renders one input as a standalone page. Each token becomes a
//! `<span class="kind">` around its source text; the text between tokens
//! is copied through so the page keeps the input's layout.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::commands::common::{check_errors, lex_file, load_rules, report_diagnostics, LexedFile};
use crate::error::{CliError, Result};
use swiftlex_lex::TokenKind;
use swiftlex_util::Span;

const STYLE: &str = "\
body { background: #1e1e1e; color: #d4d4d4; }
pre { font-family: monospace; }
.keyword { color: #569cd6; }
.identifier { color: #9cdcfe; }
.operator { color: #d4d4d4; }
.punctuation { color: #808080; }
.literal { color: #ce9178; }
.number { color: #b5cea8; }
.comment { color: #6a9955; }
.directive { color: #c586c0; }
.error { color: #f44747; text-decoration: underline wavy; }
";

/// Arguments for the html command.
#[derive(Debug, Clone)]
pub struct HtmlArgs {
    /// Source file to render.
    pub input: PathBuf,
    /// Output file; defaults to the input with an `.html` extension.
    pub output: Option<PathBuf>,
    /// Page title; defaults to the input file name.
    pub title: Option<String>,
    /// Directory of custom rule files.
    pub rules_dir: Option<PathBuf>,
    /// Fail when the input produced ERROR tokens.
    pub deny_errors: bool,
}

/// Run the html command and return the path written.
pub fn run_html(args: &HtmlArgs) -> Result<PathBuf> {
    let rules = load_rules(args.rules_dir.as_deref())?;
    let file = lex_file(&args.input, &rules)?;
    report_diagnostics(&file);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("html"));
    if output == args.input {
        return Err(CliError::Validation(format!(
            "refusing to overwrite input {}",
            output.display()
        )));
    }
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| default_title(&args.input));

    let page = render_page(&file, &title);
    std::fs::write(&output, page).map_err(|source| CliError::Write {
        path: output.clone(),
        source,
    })?;
    info!(path = %output.display(), tokens = file.tokens.len(), "wrote html");

    check_errors(std::slice::from_ref(&file), args.deny_errors)?;
    Ok(output)
}

fn default_title(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

/// Render `file` as a complete HTML document.
pub fn render_page(file: &LexedFile, title: &str) -> String {
    let mut page = String::with_capacity(file.source.len() * 2 + STYLE.len() + 256);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "<title>{}</title>", escape_html(title));
    let _ = writeln!(page, "<style>\n{}</style>", STYLE);
    page.push_str("</head>\n<body>\n<pre>");
    page.push_str(&render_tokens(file));
    page.push_str("</pre>\n</body>\n</html>\n");
    page
}

/// Render the token markup for `file`, without the surrounding document.
pub fn render_tokens(file: &LexedFile) -> String {
    let source = file.source.as_str();
    let mut out = String::with_capacity(source.len() * 2);
    let mut pos = 0;

    for token in file.tokens.iter().filter(|t| t.kind() != TokenKind::Eof) {
        let span = token.span();
        let start = span.start.max(pos);
        if let Some(gap) = source.get(pos..start) {
            out.push_str(&escape_html(gap));
        }
        let text = Span { start, ..span }
            .snippet(source)
            .unwrap_or_else(|| token.text());
        let _ = write!(
            out,
            "<span class=\"{}\">{}</span>",
            token.kind().as_str().to_lowercase(),
            escape_html(text)
        );
        pos = span.end.max(pos);
    }
    if let Some(rest) = source.get(pos..) {
        out.push_str(&escape_html(rest));
    }
    out
}

/// Escape the characters HTML treats specially.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
