//! # markdown-autolink-syntax
//!
//! The parse direction of autolink literals: an mdast-shaped tree model and
//! the builder that turns classified literal spans (`www`, `http`, `email`)
//! into `link` nodes with exact source positions.
//!
//! ## Architecture Overview
//!
//! Scanning raw text for literals is the job of an upstream tokenizer. This
//! crate starts where the tokenizer stops:
//!
//! ```text
//! Source + LiteralSpans → TreeBuilder (owned frame stack) → Node tree
//!                         └── LiteralNodeBuilder for each span
//! ```
//!
//! | kind    | link url                 | text value       |
//! |---------|--------------------------|------------------|
//! | `http`  | literal                  | literal          |
//! | `www`   | `http://` + literal      | literal          |
//! | `email` | `mailto:` + literal      | literal          |
//!
//! ## Module Structure
//!
//! ```text
//! markdown-autolink-syntax/
//! ├── lib.rs          # This file - public API
//! ├── ast.rs          # Node enum, Point, Position
//! ├── line_index.rs   # byte offset → line/column
//! ├── literal.rs      # LiteralKind, LiteralSpan
//! └── builder/
//!     ├── mod.rs      # TreeBuilder: enter/exit/chars over a frame stack
//!     ├── literal.rs  # LiteralNodeBuilder
//!     └── phrasing.rs # build_paragraph()
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use markdown_autolink_syntax::{build_paragraph, LiteralKind, LiteralSpan, Node};
//!
//! let source = "see www.example.com";
//! let spans = [LiteralSpan::new(LiteralKind::Www, source, 4, 19)];
//! let tree = build_paragraph(source, &spans);
//!
//! let paragraph = &tree.children().unwrap()[0];
//! let Node::Link(link) = &paragraph.children().unwrap()[1] else { panic!() };
//! assert_eq!(link.url, "http://www.example.com");
//! ```

pub mod ast;
pub mod builder;
pub mod line_index;
pub mod literal;

pub use ast::{
    Definition, Emphasis, Image, ImageReference, Link, LinkReference, Node, Paragraph, Point,
    Position, ReferenceKind, Root, Strong, Text,
};
pub use builder::{LiteralNodeBuilder, TreeBuilder, build_paragraph};
pub use line_index::LineIndex;
pub use literal::{LiteralKind, LiteralSpan};
