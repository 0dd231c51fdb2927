//! Line scanner.
//!
//! Splits TAML text into [`LineRecord`]s, one per line that carries content.
//! Each record knows its indentation depth (the number of leading tabs), its
//! key, and the raw value that followed the first tab, if any.
//!
//! Comment lines (first character `#`) and lines that are empty after their
//! indentation are dropped, unless that indentation holds a space. A trailing `\r` is stripped, so `\r\n` input
//! scans the same as `\n` input.
//!
//! ```rust
//! use taml::scan::scan;
//!
//! let records = scan("# settings\nname\tJohn\nitems\n\tapple").unwrap();
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].line_number, 2);
//! assert_eq!(records[0].value.as_deref(), Some("John"));
//! assert_eq!(records[2].indent, 1);
//! assert!(!records[2].has_value);
//! ```

use crate::{Error, Result};
use std::fmt;

const TAB: char = '\t';
const COMMENT: char = '#';

/// One content-bearing line of TAML text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// 1-based position in the source.
    pub line_number: usize,
    /// Number of leading tabs.
    pub indent: usize,
    pub key: String,
    /// Text after the key/value separator, `None` when nothing follows it.
    pub value: Option<String>,
    /// Whether the line had a key/value separator at all.
    pub has_value: bool,
    /// The physical line, without its line ending.
    pub line_text: String,
}

impl LineRecord {
    /// A line with no separator; it either opens a container or is a sequence item.
    #[inline]
    #[must_use]
    pub fn is_bare(&self) -> bool {
        !self.has_value
    }
}

/// A lexical rule broken by a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalFault {
    IndentationUsesSpaces,
    MixedIndentation,
    ValueContainsTab,
}

impl LexicalFault {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            LexicalFault::IndentationUsesSpaces => "Indentation must use tabs, not spaces",
            LexicalFault::MixedIndentation => "Mixed spaces and tabs in indentation",
            LexicalFault::ValueContainsTab => "Value contains invalid tab character",
        }
    }

    pub(crate) fn into_error(self, line: usize, line_text: &str) -> Error {
        match self {
            LexicalFault::IndentationUsesSpaces => Error::indentation_uses_spaces(line, line_text),
            LexicalFault::MixedIndentation => Error::mixed_indentation(line, line_text),
            LexicalFault::ValueContainsTab => Error::value_contains_tab(line, line_text),
        }
    }
}

impl fmt::Display for LexicalFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A line split into its parts, with any broken rules noted rather than raised.
///
/// Spaces in the indentation run are skipped and a tab inside the value is
/// kept, so the scanner and the validator read a faulty line the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LexedLine<'a> {
    pub indent: usize,
    pub key: &'a str,
    pub value: Option<&'a str>,
    pub has_value: bool,
    /// Nothing follows the indentation; only kept when it carries a fault.
    pub blank: bool,
    /// At most one indentation fault followed by at most one value fault.
    pub faults: Vec<LexicalFault>,
}

/// Yields `(line_number, line)` with line endings removed.
pub(crate) fn physical_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n').enumerate().map(|(i, line)| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        (i + 1, line)
    })
}

/// Splits one physical line. Returns `None` for comments and for blank lines
/// whose indentation is all tabs.
pub(crate) fn lex_line(line: &str) -> Option<LexedLine<'_>> {
    if line.starts_with(COMMENT) {
        return None;
    }

    let mut faults = Vec::new();
    let mut indent = 0;
    let mut seen_tab = false;
    let mut content_start = line.len();
    for (pos, ch) in line.char_indices() {
        match ch {
            TAB => {
                indent += 1;
                seen_tab = true;
            }
            ' ' => {
                if faults.is_empty() {
                    faults.push(if seen_tab {
                        LexicalFault::MixedIndentation
                    } else {
                        LexicalFault::IndentationUsesSpaces
                    });
                }
            }
            _ => {
                content_start = pos;
                break;
            }
        }
    }

    let content = &line[content_start..];
    if content.is_empty() {
        if faults.is_empty() {
            return None;
        }
        return Some(LexedLine {
            indent,
            key: content,
            value: None,
            has_value: false,
            blank: true,
            faults,
        });
    }

    let (key, value, has_value) = match content.split_once(TAB) {
        Some((key, rest)) => {
            let rest = rest.trim_start_matches(TAB);
            let value = if rest.is_empty() { None } else { Some(rest) };
            (key, value, true)
        }
        None => (content, None, false),
    };

    if value.is_some_and(|v| v.contains(TAB)) {
        faults.push(LexicalFault::ValueContainsTab);
    }

    Some(LexedLine {
        indent,
        key,
        value,
        has_value,
        blank: false,
        faults,
    })
}

/// An iterator over the [`LineRecord`]s of a TAML text.
///
/// Yields an error for the first line that breaks a lexical rule, then stops.
pub struct Scanner<'a> {
    lines: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    failed: bool,
}

impl<'a> Scanner<'a> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Scanner {
            lines: Box::new(physical_lines(input)),
            failed: false,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<LineRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for (line_number, line) in self.lines.by_ref() {
            let Some(lexed) = lex_line(line) else {
                continue;
            };
            if let Some(fault) = lexed.faults.first() {
                self.failed = true;
                return Some(Err(fault.into_error(line_number, line)));
            }
            return Some(Ok(LineRecord {
                line_number,
                indent: lexed.indent,
                key: lexed.key.to_string(),
                value: lexed.value.map(str::to_string),
                has_value: lexed.has_value,
                line_text: line.to_string(),
            }));
        }
        None
    }
}

/// Scans a whole text into line records.
///
/// # Errors
///
/// Returns the lexical error of the first offending line; no records are
/// returned in that case.
///
/// # Examples
///
/// ```rust
/// use taml::{scan::scan, Error};
///
/// let err = scan("ok\tyes\n\t bad").unwrap_err();
/// assert!(matches!(err, Error::MixedIndentation { line: 2, .. }));
/// ```
pub fn scan(text: &str) -> Result<Vec<LineRecord>> {
    let records = Scanner::from_str(text).collect::<Result<Vec<_>>>()?;
    tracing::debug!(records = records.len(), "scanned TAML text");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_split() {
        let records = scan("name\tJohn Smith").unwrap();
        assert_eq!(
            records,
            vec![LineRecord {
                line_number: 1,
                indent: 0,
                key: "name".to_string(),
                value: Some("John Smith".to_string()),
                has_value: true,
                line_text: "name\tJohn Smith".to_string(),
            }]
        );
    }

    #[test]
    fn test_extra_separator_tabs_are_consumed() {
        let records = scan("key\t\t\tvalue").unwrap();
        assert_eq!(records[0].key, "key");
        assert_eq!(records[0].value.as_deref(), Some("value"));
    }

    #[test]
    fn test_trailing_separator_has_no_value() {
        let records = scan("key\t").unwrap();
        assert!(records[0].has_value);
        assert_eq!(records[0].value, None);
    }

    #[test]
    fn test_comments_and_blank_lines_dropped() {
        let records = scan("# header\n\n\t\t\nkey\tvalue\n#tail").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line_number, 4);
    }

    #[test]
    fn test_space_only_line_rejected() {
        let err = scan("name\tJohn\n   \nage\t25").unwrap_err();
        assert_eq!(err, Error::indentation_uses_spaces(2, "   "));

        let err = scan("a\n\t\t  \nb").unwrap_err();
        assert_eq!(err, Error::mixed_indentation(2, "\t\t  "));
    }

    #[test]
    fn test_lex_line_blank_with_spaces() {
        let lexed = lex_line("\t ").unwrap();
        assert!(lexed.blank);
        assert_eq!(lexed.faults, vec![LexicalFault::MixedIndentation]);
        assert!(lex_line("\t\t").is_none());
    }

    #[test]
    fn test_indented_hash_is_content() {
        let records = scan("list\n\t#1").unwrap();
        assert_eq!(records[1].key, "#1");
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = scan("a\t1\r\nb\r\n\tc\r\n").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].value.as_deref(), Some("1"));
        assert_eq!(records[1].key, "b");
        assert_eq!(records[2].key, "c");
        assert_eq!(records[2].line_text, "\tc");
    }

    #[test]
    fn test_space_indentation_rejected() {
        let err = scan("name\tJohn\n  age\t25").unwrap_err();
        assert_eq!(err, Error::indentation_uses_spaces(2, "  age\t25"));
    }

    #[test]
    fn test_mixed_indentation_rejected() {
        let err = scan("a\n\t b").unwrap_err();
        assert_eq!(err, Error::mixed_indentation(2, "\t b"));
    }

    #[test]
    fn test_tab_in_value_rejected() {
        let err = scan("first\tline\nkey\tvalue\twith tab").unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(matches!(err, Error::ValueContainsTab { .. }));
    }

    #[test]
    fn test_scanner_stops_after_error() {
        let mut scanner = Scanner::from_str("a\n b\nc");
        assert!(scanner.next().unwrap().is_ok());
        assert!(scanner.next().unwrap().is_err());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_lex_line_recovers() {
        let lexed = lex_line("  \tkey\tv\tw").unwrap();
        assert_eq!(lexed.indent, 1);
        assert_eq!(lexed.key, "key");
        assert_eq!(lexed.value, Some("v\tw"));
        assert_eq!(
            lexed.faults,
            vec![
                LexicalFault::IndentationUsesSpaces,
                LexicalFault::ValueContainsTab
            ]
        );
    }
}
