//! Configuration options for TAML rendering.
//!
//! - [`RenderOptions`]: main configuration struct
//! - [`LineEnding`]: `\n` or `\r\n` line terminators
//! - [`NullToken`]: the token written for a null member or item
//!
//! Every option produces text the parser reads back to the same value.
//!
//! ## Examples
//!
//! ```rust
//! use taml::{taml, to_string_with_options, LineEnding, NullToken, RenderOptions};
//!
//! let data = taml!({ "name": "Alice", "nickname": null });
//!
//! let options = RenderOptions::new().with_null_token(NullToken::Word);
//! assert_eq!(to_string_with_options(&data, options).unwrap(), "name\tAlice\nnickname\tnull\n");
//!
//! let options = RenderOptions::new().with_line_ending(LineEnding::CrLf);
//! assert_eq!(to_string_with_options(&data, options).unwrap(), "name\tAlice\r\nnickname\t~\r\n");
//! ```

use crate::scalar::{NULL_TOKEN, NULL_WORD};

/// Line terminator written after every rendered line.
///
/// # Examples
///
/// ```rust
/// use taml::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Token written for `Null` members and sequence items.
///
/// A `Null` document is always written as `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NullToken {
    /// `~`
    #[default]
    Tilde,
    /// `null`
    Word,
}

impl NullToken {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NullToken::Tilde => NULL_TOKEN,
            NullToken::Word => NULL_WORD,
        }
    }
}

/// Configuration options for TAML rendering.
///
/// # Examples
///
/// ```rust
/// use taml::{LineEnding, RenderOptions};
///
/// let options = RenderOptions::new();
/// assert_eq!(options.base_indent, 0);
///
/// let options = RenderOptions::new()
///     .with_base_indent(1)
///     .with_line_ending(LineEnding::CrLf);
/// assert_eq!(options.indent(2), "\t\t\t");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Tabs written before every line, in addition to nesting depth.
    pub base_indent: usize,
    pub line_ending: LineEnding,
    pub null_token: NullToken,
}

impl RenderOptions {
    /// Creates default options (no base indent, `\n` endings, `~` for null).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of tabs prefixed to every line.
    ///
    /// Useful when embedding a rendered value under an existing key. A
    /// document rendered with a base indent does not parse on its own.
    #[must_use]
    pub fn with_base_indent(mut self, base_indent: usize) -> Self {
        self.base_indent = base_indent;
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    #[must_use]
    pub fn with_null_token(mut self, null_token: NullToken) -> Self {
        self.null_token = null_token;
        self
    }

    /// The indentation prefix for a line at nesting `depth`.
    #[must_use]
    pub fn indent(&self, depth: usize) -> String {
        "\t".repeat(self.base_indent + depth)
    }
}
