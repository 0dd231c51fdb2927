//! TAML Format Reference
//!
//! This module documents the TAML text format as read and written by this
//! library.
//!
//! # Overview
//!
//! TAML is a line-oriented data format in the spirit of YAML. Structure comes
//! from indentation alone, and the indentation unit is exactly one tab. There
//! are no colons, braces, brackets or quotes.
//!
//! # Lines
//!
//! Every physical line is one of:
//!
//! | Line | Meaning |
//! |------|---------|
//! | `# text` | comment, only when `#` is the first character |
//! | empty or tabs only | ignored |
//! | `key<TAB>value` | a member with a scalar value |
//! | `key<TAB>` | a member whose value is null |
//! | `key` | a bare line: a container opener or a sequence item |
//!
//! Leading tabs give the nesting depth. A space anywhere in the leading
//! whitespace is an error, even on a line with nothing else on it. Extra tabs between key and value are part of the
//! separator, but a tab inside the value is an error. Lines end with `\n` or
//! `\r\n`.
//!
//! # Mappings
//!
//! ```text
//! server
//! 	host	localhost
//! 	port	8080
//! 	tls
//! 		enabled	true
//! ```
//!
//! A bare line followed by deeper lines opens a container. If the first
//! deeper line has a value, or has lines under it, the container is a
//! mapping, and every line in it must have a value or lines under it; a
//! bare line with nothing under it is an error there, whichever line comes
//! first. Write a null member as `key<TAB>~`. Keys are unique within one
//! mapping and keep their written order.
//!
//! # Sequences
//!
//! ```text
//! fruits
//! 	apple
//! 	banana
//! 	~
//! ```
//!
//! If the first deeper line is a bare line with nothing under it, the
//! container is a sequence, and every line in it is one scalar item. A keyed
//! line in a sequence is an error, so sequences cannot hold containers.
//!
//! # Scalars
//!
//! | Token | Value |
//! |-------|-------|
//! | `~` or `null` | null |
//! | `""` | empty string |
//! | `-12`, `7` | integer (64-bit) |
//! | `2.5`, `1e-3`, `NaN`, `inf`, `-inf` | float |
//! | `true`, `false` | boolean |
//! | anything else | string, taken verbatim |
//!
//! Strings are never quoted, so a string that spells another kind, such as
//! `"42"` or `"true"`, reads back as that kind.
//!
//! # Documents
//!
//! An empty document, or one that is just `null`, is null. A document of a
//! single bare line with no line break after it is that scalar; `apple` is a
//! string while `apple` followed by a line break is a one-item sequence.
//! Anything else is a mapping or sequence whose members start at depth 0.
//!
//! # Limitations
//!
//! - **Nested sequences**: a sequence item cannot be a container
//! - **Empty containers**: written as `key<TAB>~`, they read back as null
//! - **Tabs in text**: keys and values cannot contain a tab
//! - **Leading `#`**: a top-level key or item starting with `#` reads as a comment
//! - **Leading space**: a key or item starting with a space does not read back
