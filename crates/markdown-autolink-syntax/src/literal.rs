//! Autolink literal token spans, as delivered by the upstream tokenizer.

use std::fmt;

/// Classification of an autolink literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// `www.example.com`
    Www,
    /// `https://example.com` (any scheme the tokenizer accepts)
    Http,
    /// `contact@example.com`
    Email,
}

impl LiteralKind {
    /// Prefix added to the literal text to form the link URL.
    pub fn url_prefix(self) -> &'static str {
        match self {
            LiteralKind::Www => "http://",
            LiteralKind::Http => "",
            LiteralKind::Email => "mailto:",
        }
    }

    /// The link URL for a literal of this kind.
    ///
    /// The literal is trusted verbatim: no validation, no escaping.
    pub fn url_for(self, literal: &str) -> String {
        let prefix = self.url_prefix();
        let mut url = String::with_capacity(prefix.len() + literal.len());
        url.push_str(prefix);
        url.push_str(literal);
        url
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LiteralKind::Www => "www",
            LiteralKind::Http => "http",
            LiteralKind::Email => "email",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified literal in the source: `source[start..end] == text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSpan<'a> {
    pub kind: LiteralKind,
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

impl<'a> LiteralSpan<'a> {
    /// Span over `source[start..end]`.
    ///
    /// # Panics
    ///
    /// If the range is reversed, out of bounds, or splits a character.
    pub fn new(kind: LiteralKind, source: &'a str, start: usize, end: usize) -> Self {
        assert!(start <= end, "literal span {start}..{end} is reversed");
        let text = source
            .get(start..end)
            .unwrap_or_else(|| panic!("literal span {start}..{end} is not a valid source range"));
        Self {
            kind,
            start,
            end,
            text,
        }
    }

    pub fn url(&self) -> String {
        self.kind.url_for(self.text)
    }
}
