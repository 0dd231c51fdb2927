//! Structural validation without building a tree.
//!
//! [`validate`] runs the scanner's lexical rules over every line and checks
//! that indentation never deepens by more than one level past a parent line.
//! Unlike [`crate::from_str`] it does not stop at the first problem; every
//! offending line is reported.
//!
//! ```rust
//! use taml::validate;
//!
//! assert!(validate("name\tJohn\nage\t25").is_valid);
//!
//! let result = validate("name\tJohn\n  age\t25");
//! assert!(!result.is_valid);
//! assert_eq!(result.errors[0].line, 2);
//! ```

use crate::scan::{lex_line, physical_lines, LexicalFault};
use std::fmt;

/// What a [`ValidationError`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Lexical(LexicalFault),
    /// A line is indented deeper than its predecessor allows.
    InvalidIndentationLevel,
}

/// One problem found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
    /// 1-based.
    pub line: usize,
    pub line_text: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// The outcome of [`validate`]. `is_valid` holds exactly when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LineInfo {
    indent: usize,
    is_parent: bool,
}

/// Checks TAML text for lexical and indentation errors.
///
/// Never fails; problems are collected into the returned result. A line with
/// spaces in its indentation is still measured by its tabs, so one bad line
/// does not hide problems further down. Text that is only whitespace is a
/// null document and is valid.
///
/// # Examples
///
/// ```rust
/// use taml::{validate, ValidationErrorKind};
///
/// let result = validate("a\n\t\t\tb\tc\td");
/// let kinds: Vec<_> = result.errors.iter().map(|e| e.kind).collect();
/// assert_eq!(kinds.len(), 2);
/// assert_eq!(kinds[1], ValidationErrorKind::InvalidIndentationLevel);
/// ```
#[must_use]
pub fn validate(text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult::from_errors(Vec::new());
    }

    let mut errors = Vec::new();
    let mut prev = LineInfo {
        indent: 0,
        is_parent: false,
    };

    for (line_number, line) in physical_lines(text) {
        let Some(lexed) = lex_line(line) else {
            continue;
        };

        for fault in &lexed.faults {
            errors.push(ValidationError {
                kind: ValidationErrorKind::Lexical(*fault),
                message: fault.message().to_string(),
                line: line_number,
                line_text: Some(line.to_string()),
            });
        }
        if lexed.blank {
            continue;
        }

        let allowed = prev.indent + usize::from(prev.is_parent);
        if lexed.indent > allowed {
            errors.push(ValidationError {
                kind: ValidationErrorKind::InvalidIndentationLevel,
                message: format!(
                    "Invalid indentation level: expected at most {allowed}, found {}",
                    lexed.indent
                ),
                line: line_number,
                line_text: Some(line.to_string()),
            });
        }

        prev = LineInfo {
            indent: lexed.indent,
            is_parent: !lexed.has_value,
        };
    }

    tracing::debug!(errors = errors.len(), "validated TAML text");
    ValidationResult::from_errors(errors)
}
