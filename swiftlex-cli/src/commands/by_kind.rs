//! By-kind command implementation.
//!
//! Groups the distinct token texts of all inputs under their kind.

use std::io::{self, Write};
use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use swiftlex_lex::TokenKind;

use crate::commands::common::{
    check_errors, lex_files, load_rules, report_diagnostics, LexedFile, OutputFormat, RULE_LINE,
};
use crate::error::Result;

/// Arguments for the by-kind command.
#[derive(Debug, Clone)]
pub struct ByKindArgs {
    /// Source files to tokenize.
    pub inputs: Vec<PathBuf>,
    /// Listing format.
    pub format: OutputFormat,
    /// Directory of custom rule files.
    pub rules_dir: Option<PathBuf>,
    /// Fail when any input produced ERROR tokens.
    pub deny_errors: bool,
}

/// Distinct texts per kind, in first-seen order.
///
/// Every kind has an entry, in declaration order, even when no token of
/// that kind was seen.
pub fn group_by_kind(files: &[LexedFile]) -> IndexMap<TokenKind, IndexSet<String>> {
    let mut groups: IndexMap<TokenKind, IndexSet<String>> = TokenKind::ALL
        .iter()
        .map(|&kind| (kind, IndexSet::new()))
        .collect();

    for token in files.iter().flat_map(|file| file.tokens.iter()) {
        if let Some(texts) = groups.get_mut(&token.kind()) {
            if !texts.contains(token.text()) {
                texts.insert(token.text().to_string());
            }
        }
    }
    groups
}

/// Run the by-kind command, writing to stdout.
pub fn run_by_kind(args: &ByKindArgs) -> Result<()> {
    let rules = load_rules(args.rules_dir.as_deref())?;
    let files = lex_files(&args.inputs, &rules)?;
    files.iter().for_each(report_diagnostics);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_by_kind(&files, args.format, &mut out)?;
    out.flush()?;

    check_errors(&files, args.deny_errors)
}

/// Write the grouped listing for `files` to `out`.
pub fn write_by_kind<W: Write>(
    files: &[LexedFile],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let groups = group_by_kind(files);
    match format {
        OutputFormat::Text => {
            for (kind, texts) in &groups {
                writeln!(out, "{}", kind)?;
                for text in texts {
                    writeln!(out, "{}", text)?;
                }
                writeln!(out, "{}-", RULE_LINE)?;
            }
        },
        OutputFormat::Json => {
            let named: IndexMap<&str, &IndexSet<String>> = groups
                .iter()
                .map(|(kind, texts)| (kind.as_str(), texts))
                .collect();
            serde_json::to_writer_pretty(&mut *out, &named)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::lex_file;
    use std::fs;
    use tempfile::TempDir;

    fn lexed(sources: &[&str]) -> (TempDir, Vec<LexedFile>) {
        let dir = TempDir::new().unwrap();
        let rules = load_rules(None).unwrap();
        let files = sources
            .iter()
            .enumerate()
            .map(|(i, source)| {
                let path = dir.path().join(format!("f{}.swift", i));
                fs::write(&path, source).unwrap();
                lex_file(&path, &rules).unwrap()
            })
            .collect();
        (dir, files)
    }

    #[test]
    fn test_groups_are_distinct_and_ordered() {
        let (_dir, files) = lexed(&["let b = a", "let a = b + c"]);
        let groups = group_by_kind(&files);

        assert_eq!(groups.len(), TokenKind::ALL.len());
        let idents: Vec<&str> = groups[&TokenKind::Identifier]
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(idents, vec!["b", "a", "c"]);
        assert_eq!(groups[&TokenKind::Keyword].len(), 1);
        assert!(groups[&TokenKind::Comment].is_empty());
        assert_eq!(groups.keys().next(), Some(&TokenKind::Identifier));
    }

    #[test]
    fn test_text_listing_prints_every_kind() {
        let (_dir, files) = lexed(&["x"]);
        let mut out = Vec::new();
        write_by_kind(&files, OutputFormat::Text, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "IDENTIFIER");
        assert_eq!(lines[1], "x");
        assert_eq!(lines[2].len(), 51);
        assert!(lines[2].chars().all(|c| c == '-'));
        assert_eq!(lines[3], "KEYWORD");
        assert_eq!(lines.len(), 2 * TokenKind::ALL.len() + 1);
    }

    #[test]
    fn test_json_listing() {
        let (_dir, files) = lexed(&["(a)"]);
        let mut out = Vec::new();
        write_by_kind(&files, OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["PUNCTUATION"], serde_json::json!(["(", ")"]));
        assert_eq!(value["IDENTIFIER"], serde_json::json!(["a"]));
        assert_eq!(value["EOF"], serde_json::json!([]));
    }
}
