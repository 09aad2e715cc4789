//! Language rules consulted by the tokenizer.
//!
//! The sub-scanners never hard-code what counts as a keyword, a directive or
//! an operator character. They ask a [`LanguageRules`] implementation.
//! [`SwiftRules`] is the built-in one: character classes follow the Swift
//! lexical grammar and the word lists are read from `lang/*.txt`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Predicates the tokenizer needs from a language definition.
pub trait LanguageRules {
    /// Can `c` start an identifier?
    fn is_identifier_head(&self, c: char) -> bool;

    /// Can `c` continue an identifier?
    fn is_identifier_char(&self, c: char) -> bool;

    /// Can `c` start an operator?
    fn is_operator_head(&self, c: char) -> bool;

    /// Can `c` continue an operator?
    fn is_operator_char(&self, c: char) -> bool;

    /// Is `text` a punctuation mark?
    fn is_punctuation_mark(&self, text: &str) -> bool;

    /// Does `c` end a line?
    fn is_line_break(&self, c: char) -> bool;

    /// Is `text` a reserved word?
    fn is_keyword(&self, text: &str) -> bool;

    /// Is `text` a complete compiler directive?
    fn is_directive(&self, text: &str) -> bool;

    /// Byte length of the longest directive. Text longer than this is never
    /// a directive.
    fn max_directive_len(&self) -> usize {
        usize::MAX
    }
}

/// Failure to load rule files from disk.
#[derive(Debug, Error)]
pub enum RulesError {
    /// A rule file could not be read.
    #[error("failed to read rule file {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A rule file contained no entries.
    #[error("rule file {} defines no entries", path.display())]
    Empty {
        /// The empty file.
        path: PathBuf,
    },
}

/// Result type for rule loading.
pub type Result<T> = std::result::Result<T, RulesError>;

/// Rule file holding reserved words.
pub const KEYWORDS_FILE: &str = "keywords.txt";
/// Rule file holding punctuation marks.
pub const PUNCTUATION_FILE: &str = "punctuation.txt";
/// Rule file holding compiler directives.
pub const DIRECTIVES_FILE: &str = "directives.txt";

const BUILTIN_KEYWORDS: &str = include_str!("../lang/keywords.txt");
const BUILTIN_PUNCTUATION: &str = include_str!("../lang/punctuation.txt");
const BUILTIN_DIRECTIVES: &str = include_str!("../lang/directives.txt");

/// Swift lexical rules.
///
/// ```
/// use swiftlex_lex::{LanguageRules, SwiftRules};
///
/// let rules = SwiftRules::builtin();
/// assert!(rules.is_keyword("guard"));
/// assert!(rules.is_directive("#if"));
/// assert!(rules.is_punctuation_mark("->"));
/// assert!(!rules.is_operator_char('.'));
/// ```
#[derive(Debug, Clone)]
pub struct SwiftRules {
    keywords: FxHashSet<String>,
    punctuation: FxHashSet<String>,
    directives: FxHashSet<String>,
    max_directive_len: usize,
}

impl SwiftRules {
    fn new(
        keywords: FxHashSet<String>,
        punctuation: FxHashSet<String>,
        directives: FxHashSet<String>,
    ) -> Self {
        let max_directive_len = directives.iter().map(String::len).max().unwrap_or(0);
        Self {
            keywords,
            punctuation,
            directives,
            max_directive_len,
        }
    }

    /// Builds rules from the three word lists. Each list holds one entry
    /// per line; blank lines and lines starting with `//` are ignored.
    pub fn from_lists(keywords: &str, punctuation: &str, directives: &str) -> Self {
        Self::new(
            parse_list(keywords),
            parse_list(punctuation),
            parse_list(directives),
        )
    }

    /// Shared instance built from the embedded `lang/*.txt` lists.
    pub fn builtin() -> &'static SwiftRules {
        static BUILTIN: OnceLock<SwiftRules> = OnceLock::new();
        BUILTIN.get_or_init(SwiftRules::default)
    }

    /// Loads `keywords.txt`, `punctuation.txt` and `directives.txt` from
    /// `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self::new(
            load_list(&dir.join(KEYWORDS_FILE))?,
            load_list(&dir.join(PUNCTUATION_FILE))?,
            load_list(&dir.join(DIRECTIVES_FILE))?,
        ))
    }

    /// Number of keywords.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Number of directives.
    pub fn directive_count(&self) -> usize {
        self.directives.len()
    }
}

impl Default for SwiftRules {
    fn default() -> Self {
        Self::from_lists(BUILTIN_KEYWORDS, BUILTIN_PUNCTUATION, BUILTIN_DIRECTIVES)
    }
}

impl LanguageRules for SwiftRules {
    fn is_identifier_head(&self, c: char) -> bool {
        c == '_' || c.is_alphabetic()
    }

    fn is_identifier_char(&self, c: char) -> bool {
        self.is_identifier_head(c) || c.is_alphanumeric() || is_combining_mark(c)
    }

    fn is_operator_head(&self, c: char) -> bool {
        matches!(
            c,
            '/' | '=' | '-' | '+' | '!' | '*' | '%' | '<' | '>' | '&' | '|' | '^' | '~' | '?'
        ) || is_unicode_operator_head(c)
    }

    fn is_operator_char(&self, c: char) -> bool {
        self.is_operator_head(c)
            || is_combining_mark(c)
            || matches!(c, '\u{FE00}'..='\u{FE0F}' | '\u{E0100}'..='\u{E01EF}')
    }

    fn is_punctuation_mark(&self, text: &str) -> bool {
        self.punctuation.contains(text)
    }

    fn is_line_break(&self, c: char) -> bool {
        matches!(c, '\n' | '\r')
    }

    fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    fn is_directive(&self, text: &str) -> bool {
        self.directives.contains(text)
    }

    fn max_directive_len(&self) -> usize {
        self.max_directive_len
    }
}

/// Combining marks allowed inside identifiers and operators.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Non-ASCII operator heads from the Swift grammar.
fn is_unicode_operator_head(c: char) -> bool {
    matches!(
        c,
        '\u{00A1}'..='\u{00A7}'
            | '\u{00A9}'
            | '\u{00AB}'
            | '\u{00AC}'
            | '\u{00AE}'
            | '\u{00B0}'..='\u{00B1}'
            | '\u{00B6}'
            | '\u{00BB}'
            | '\u{00BF}'
            | '\u{00D7}'
            | '\u{00F7}'
            | '\u{2016}'..='\u{2017}'
            | '\u{2020}'..='\u{2027}'
            | '\u{2030}'..='\u{203E}'
            | '\u{2041}'..='\u{2053}'
            | '\u{2055}'..='\u{205E}'
            | '\u{2190}'..='\u{23FF}'
            | '\u{2500}'..='\u{2775}'
            | '\u{2794}'..='\u{2BFF}'
            | '\u{2E00}'..='\u{2E7F}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3020}'
            | '\u{3030}'
    )
}

fn parse_list(text: &str) -> FxHashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .map(str::to_string)
        .collect()
}

fn load_list(path: &Path) -> Result<FxHashSet<String>> {
    let text = fs::read_to_string(path).map_err(|source| RulesError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_list(&text);
    if entries.is_empty() {
        return Err(RulesError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}
