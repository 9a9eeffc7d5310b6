//! # Literal Escaping
//!
//! Markdown with the autolink literal extension turns bare `www.`-domains,
//! `scheme://` URLs and email addresses into links, whatever the tree said.
//! Writing a plain text node therefore has to break up any character
//! sequence the recognizer would pick up, and nothing else:
//!
//! | char | escaped when                                          | example             |
//! |------|-------------------------------------------------------|---------------------|
//! | `@`  | a local part ends before it and a domain follows      | `a b\@c.d`          |
//! | `.`  | it follows a `www` that can start a literal           | `a www\.b.c`        |
//! | `:`  | it follows a known scheme and precedes `/`            | `https\:/`          |
//!
//! The recognizer scans raw characters across node boundaries, so decisions
//! use the surrounding text from [`EscapeContext`]. Text in label,
//! destination, identifier or alt slots is never scanned and passes through
//! verbatim.

mod context;
mod options;
mod scanner;

use std::borrow::Cow;

pub use context::{EscapeContext, TextSlot};
pub use options::{EscapeOptions, OptionsError};

pub(crate) use options::scheme_regex;

/// Escapes `@`, `.` and `:` that would read as the start of an autolink
/// literal.
#[derive(Debug, Clone, Default)]
pub struct LiteralEscaper {
    options: EscapeOptions,
}

impl LiteralEscaper {
    pub fn new(options: EscapeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EscapeOptions {
        &self.options
    }

    /// The markdown for a text node's `value` in `ctx`.
    ///
    /// Never fails; returns `value` borrowed when nothing needs escaping.
    pub fn escape<'v>(&self, value: &'v str, ctx: &EscapeContext<'_>) -> Cow<'v, str> {
        scanner::escape(value, ctx, &self.options)
    }
}

/// [`LiteralEscaper::escape`] with default options.
pub fn escape_literals<'v>(value: &'v str, ctx: &EscapeContext<'_>) -> Cow<'v, str> {
    LiteralEscaper::default().escape(value, ctx)
}
