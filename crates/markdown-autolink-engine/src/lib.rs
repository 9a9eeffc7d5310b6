//! # markdown-autolink-engine
//!
//! The serialize direction of autolink literals. When a tree is written
//! back to markdown, plain text that happens to look like `www.x.y`,
//! `https://x` or `a@b.c` would come back as a link on the next parse. The
//! [`LiteralEscaper`] inserts the minimal backslashes that prevent this, and
//! [`MarkdownWriter`] drives it with the surrounding context of every text
//! node.
//!
//! ## Module Structure
//!
//! ```text
//! markdown-autolink-engine/
//! ├── lib.rs          # This file - public API
//! ├── escape/
//! │   ├── mod.rs      # LiteralEscaper, escape_literals()
//! │   ├── context.rs  # EscapeContext, TextSlot
//! │   ├── options.rs  # EscapeOptions (schemes, www, email)
//! │   └── scanner.rs  # the single-pass character scan
//! └── writer.rs       # MarkdownWriter, to_markdown()
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use markdown_autolink_engine::{to_markdown, escape_literals, EscapeContext};
//! use markdown_autolink_syntax::{Node, Paragraph};
//!
//! let escaped = escape_literals("mail a@b.co", &EscapeContext::standalone());
//! assert_eq!(escaped, r"mail a\@b.co");
//!
//! let tree = Node::Paragraph(Paragraph {
//!     children: vec![Node::text("see www.example.com")],
//!     position: None,
//! });
//! assert_eq!(to_markdown(&tree), "see www\\.example.com\n");
//! ```

pub mod escape;
pub mod writer;

pub use escape::{
    EscapeContext, EscapeOptions, LiteralEscaper, OptionsError, TextSlot, escape_literals,
};
pub use writer::{MarkdownWriter, to_markdown};
