//! Link nodes for autolink literal spans.

use crate::ast::{Link, Node};
use crate::literal::LiteralSpan;

use super::TreeBuilder;

/// Turns classified literal spans into `link > text` fragments.
///
/// The builder is stateless: everything in progress lives on the
/// [`TreeBuilder`] stack. `enter` and `exit` mirror the tokenizer's
/// enter/exit of a span; [`LiteralNodeBuilder::build`] does both.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralNodeBuilder;

impl LiteralNodeBuilder {
    /// Open the link and its text child, and take in the span's characters.
    ///
    /// The literal is used verbatim for the text; only the URL gets the
    /// scheme prefix for its kind.
    pub fn enter(builder: &mut TreeBuilder<'_>, span: &LiteralSpan<'_>) {
        debug_assert_eq!(
            builder.source().get(span.start..span.end),
            Some(span.text),
            "literal span text does not match the source"
        );
        log::debug!("{} literal {:?} at {}..{}", span.kind, span.text, span.start, span.end);
        let link = Node::Link(Link {
            url: span.url(),
            title: None,
            children: Vec::new(),
            position: None,
        });
        builder.enter(link, span.start);
        builder.enter(Node::text(""), span.start);
        builder.chars(span.start..span.end);
    }

    /// Close the text and link opened by [`LiteralNodeBuilder::enter`].
    ///
    /// # Panics
    ///
    /// If the innermost open nodes are not the text and link of a literal.
    pub fn exit(builder: &mut TreeBuilder<'_>, span: &LiteralSpan<'_>) {
        assert!(
            matches!(builder.current(), Node::Text(_)),
            "literal exit without an open literal text"
        );
        builder.exit(span.end);
        assert!(
            matches!(builder.current(), Node::Link(_)),
            "literal exit without an open literal link"
        );
        builder.exit(span.end);
    }

    /// Enter and exit `span` in one go.
    pub fn build(builder: &mut TreeBuilder<'_>, span: &LiteralSpan<'_>) {
        Self::enter(builder, span);
        Self::exit(builder, span);
    }
}
