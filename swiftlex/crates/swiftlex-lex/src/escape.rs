//! Backslash-escape decoding for string literal bodies.
//!
//! Recognized escapes are decoded; anything else, including Swift's
//! interpolation opener `\(`, is left in the text exactly as written.

use std::iter::Peekable;
use std::str::Chars;

/// Decodes the escapes in a literal body (delimiters already removed).
///
/// ```
/// use swiftlex_lex::escape::unescape;
///
/// assert_eq!(unescape(r"a\tb"), "a\tb");
/// assert_eq!(unescape(r#"say \"hi\""#), "say \"hi\"");
/// assert_eq!(unescape(r"\u{1F600}"), "\u{1F600}");
/// assert_eq!(unescape(r"\(name)"), r"\(name)");
/// ```
pub fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let decoded = match chars.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('\'') => '\'',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('u') => match parse_unicode_escape(&mut chars) {
                Some(ch) => ch,
                None => {
                    out.push_str("\\u");
                    continue;
                },
            },
            Some(other) => {
                out.push('\\');
                out.push(other);
                continue;
            },
            None => {
                out.push('\\');
                break;
            },
        };
        out.push(decoded);
    }

    out
}

/// Parses the part after `\u`: either `{X..}` with 1 to 8 hex digits or
/// exactly four hex digits. Leaves `chars` untouched on failure.
fn parse_unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let mut look = chars.clone();
    let mut hex = String::new();

    if look.peek() == Some(&'{') {
        look.next();
        loop {
            match look.next()? {
                '}' => break,
                c if c.is_ascii_hexdigit() && hex.len() < 8 => hex.push(c),
                _ => return None,
            }
        }
    } else {
        for _ in 0..4 {
            match look.next()? {
                c if c.is_ascii_hexdigit() => hex.push(c),
                _ => return None,
            }
        }
    }

    let ch = char::from_u32(parse_hex_codepoint(&hex)?)?;
    *chars = look;
    Some(ch)
}

/// Parses a run of hex digits into a codepoint no larger than `0x10FFFF`.
fn parse_hex_codepoint(hex: &str) -> Option<u32> {
    if hex.is_empty() || hex.len() > 8 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    if value > 0x10FFFF {
        return None;
    }
    Some(value)
}
