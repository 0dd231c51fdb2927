//! Error types for TAML parsing, coercion and file handling.
//!
//! Every parse failure carries the 1-based line number it was detected on and,
//! where one exists, the raw text of that line.
//!
//! ## Error Categories
//!
//! - **Lexical**: spaces in indentation, mixed tabs and spaces, tabs inside a value
//! - **Structural**: ambiguous container shape, indentation jumps, duplicate keys
//! - **Conversion**: a raw scalar that does not parse as the requested kind
//! - **I/O**: file reading/writing failures
//!
//! ## Examples
//!
//! ```rust
//! use taml::{from_str, Error, ErrorCategory};
//!
//! let err = from_str("name\tJohn\n  age\t25").unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Lexical);
//! assert_eq!(err.line(), Some(2));
//! assert!(err.to_string().starts_with("Line 2: "));
//! ```

use crate::scalar::ScalarKind;
use std::fmt;
use thiserror::Error;

/// Longest stretch of a source line echoed back in an error message.
const MAX_CONTEXT_CHARS: usize = 50;

/// Represents all possible errors produced by the TAML codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The indentation run starts with a space.
    #[error("Line {line}: Indentation must use tabs, not spaces{}", context(.line_text))]
    IndentationUsesSpaces { line: usize, line_text: String },

    /// A space follows at least one tab in the indentation run.
    #[error("Line {line}: Mixed spaces and tabs in indentation{}", context(.line_text))]
    MixedIndentation { line: usize, line_text: String },

    /// The value part of a `key<TAB>value` line contains another tab.
    #[error("Line {line}: Value contains invalid tab character{}", context(.line_text))]
    ValueContainsTab { line: usize, line_text: String },

    /// Keyed members and bare sequence items share one scope.
    #[error("Line {line}: Keyed entry mixed into a sequence scope{}", context(.line_text))]
    AmbiguousContainerShape { line: usize, line_text: String },

    /// A line is indented more than one level past its scope.
    #[error(
        "Line {line}: Indentation jumps to level {found}, expected at most {expected}{}",
        context(.line_text)
    )]
    InvalidIndentationJump {
        line: usize,
        expected: usize,
        found: usize,
        line_text: String,
    },

    /// The same key appears twice in one mapping scope.
    #[error("Line {line}: Duplicate key '{key}'{}", context(.line_text))]
    DuplicateKey {
        line: usize,
        key: String,
        line_text: String,
    },

    /// A document was expected to be a mapping.
    #[error("Document root must be a mapping, found {found}")]
    InvalidDocumentRoot { found: &'static str },

    /// A raw scalar could not be converted to the requested kind.
    #[error("Cannot convert '{raw}' to {target}")]
    ScalarConversion { raw: String, target: ScalarKind },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// Coarse grouping of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Structural,
    Conversion,
    Io,
    /// Errors raised through serde or by input that is not text.
    Other,
}

fn context(line_text: &str) -> String {
    if line_text.is_empty() {
        return String::new();
    }
    if line_text.chars().count() > MAX_CONTEXT_CHARS {
        let truncated: String = line_text.chars().take(MAX_CONTEXT_CHARS).collect();
        format!("\n  {}...", truncated)
    } else {
        format!("\n  {}", line_text)
    }
}

impl Error {
    /// Creates an error for an indentation run that starts with a space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::Error;
    ///
    /// let err = Error::indentation_uses_spaces(3, "  age\t25");
    /// assert!(err.to_string().contains("Line 3"));
    /// ```
    pub fn indentation_uses_spaces(line: usize, line_text: &str) -> Self {
        Error::IndentationUsesSpaces {
            line,
            line_text: line_text.to_string(),
        }
    }

    /// Creates an error for a space found after a tab in the indentation run.
    pub fn mixed_indentation(line: usize, line_text: &str) -> Self {
        Error::MixedIndentation {
            line,
            line_text: line_text.to_string(),
        }
    }

    /// Creates an error for a value that contains a tab character.
    pub fn value_contains_tab(line: usize, line_text: &str) -> Self {
        Error::ValueContainsTab {
            line,
            line_text: line_text.to_string(),
        }
    }

    /// Creates an error for a keyed entry found in a sequence scope.
    pub fn ambiguous_container_shape(line: usize, line_text: &str) -> Self {
        Error::AmbiguousContainerShape {
            line,
            line_text: line_text.to_string(),
        }
    }

    /// Creates an error for a line indented past its scope.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::Error;
    ///
    /// let err = Error::invalid_indentation_jump(4, 1, 3, "\t\t\tdeep\t1");
    /// assert!(err.to_string().contains("expected at most 1"));
    /// ```
    pub fn invalid_indentation_jump(
        line: usize,
        expected: usize,
        found: usize,
        line_text: &str,
    ) -> Self {
        Error::InvalidIndentationJump {
            line,
            expected,
            found,
            line_text: line_text.to_string(),
        }
    }

    /// Creates an error for a key repeated within one mapping.
    pub fn duplicate_key(line: usize, key: &str, line_text: &str) -> Self {
        Error::DuplicateKey {
            line,
            key: key.to_string(),
            line_text: line_text.to_string(),
        }
    }

    /// Creates a conversion error for a raw scalar and its target kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::{Error, ScalarKind};
    ///
    /// let err = Error::scalar_conversion("abc", ScalarKind::Int);
    /// assert_eq!(err.to_string(), "Cannot convert 'abc' to integer");
    /// ```
    pub fn scalar_conversion(raw: &str, target: ScalarKind) -> Self {
        Error::ScalarConversion {
            raw: raw.to_string(),
            target,
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// The 1-based source line the error was detected on, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::IndentationUsesSpaces { line, .. }
            | Error::MixedIndentation { line, .. }
            | Error::ValueContainsTab { line, .. }
            | Error::AmbiguousContainerShape { line, .. }
            | Error::InvalidIndentationJump { line, .. }
            | Error::DuplicateKey { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The raw text of the offending line, if any.
    #[must_use]
    pub fn line_text(&self) -> Option<&str> {
        match self {
            Error::IndentationUsesSpaces { line_text, .. }
            | Error::MixedIndentation { line_text, .. }
            | Error::ValueContainsTab { line_text, .. }
            | Error::AmbiguousContainerShape { line_text, .. }
            | Error::InvalidIndentationJump { line_text, .. }
            | Error::DuplicateKey { line_text, .. } => Some(line_text),
            _ => None,
        }
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::IndentationUsesSpaces { .. }
            | Error::MixedIndentation { .. }
            | Error::ValueContainsTab { .. } => ErrorCategory::Lexical,
            Error::AmbiguousContainerShape { .. }
            | Error::InvalidIndentationJump { .. }
            | Error::DuplicateKey { .. }
            | Error::InvalidDocumentRoot { .. } => ErrorCategory::Structural,
            Error::ScalarConversion { .. } => ErrorCategory::Conversion,
            Error::Io(_) => ErrorCategory::Io,
            Error::Custom(_) => ErrorCategory::Other,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context() {
        let err = Error::mixed_indentation(7, "\t  key\tvalue");
        assert_eq!(
            err.to_string(),
            "Line 7: Mixed spaces and tabs in indentation\n  \t  key\tvalue"
        );
    }

    #[test]
    fn test_long_line_is_truncated() {
        let line = "x".repeat(80);
        let err = Error::value_contains_tab(1, &line);
        let expected = format!("Line 1: Value contains invalid tab character\n  {}...", "x".repeat(50));
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.line_text(), Some(line.as_str()));
    }

    #[test]
    fn test_positions_and_categories() {
        let err = Error::invalid_indentation_jump(4, 1, 3, "\t\t\tdeep");
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.category(), ErrorCategory::Structural);

        let err = Error::scalar_conversion("1.2.3", ScalarKind::Float);
        assert_eq!(err.line(), None);
        assert_eq!(err.category(), ErrorCategory::Conversion);

        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::Io);

        let err = Error::custom("map key must be a string");
        assert_eq!(err.line(), None);
        assert_eq!(err.category(), ErrorCategory::Other);
    }
}
