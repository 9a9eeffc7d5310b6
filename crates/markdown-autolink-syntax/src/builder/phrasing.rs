use crate::ast::{Node, Paragraph};
use crate::literal::LiteralSpan;

use super::{LiteralNodeBuilder, TreeBuilder};

/// Build `root > paragraph` for one block of text and its literal spans.
///
/// Text between spans accumulates into `text` nodes; each span becomes a
/// link via [`LiteralNodeBuilder`]. The paragraph ends before any trailing
/// line endings, the root at the end of `source`. A blank source yields an
/// empty root.
///
/// # Panics
///
/// If spans are out of source order, overlap, or reach past the paragraph.
pub fn build_paragraph(source: &str, spans: &[LiteralSpan<'_>]) -> Node {
    let mut builder = TreeBuilder::new(source);
    if source.trim().is_empty() {
        assert!(spans.is_empty(), "literal spans in a blank source");
        return builder.finish();
    }

    let content_end = source.trim_end_matches(['\n', '\r']).len();
    builder.enter(Node::Paragraph(Paragraph::default()), 0);

    let mut cursor = 0;
    for span in spans {
        assert!(
            span.start >= cursor,
            "literal span {}..{} overlaps or precedes offset {cursor}",
            span.start,
            span.end
        );
        assert!(
            span.end <= content_end,
            "literal span {}..{} reaches past the paragraph end {content_end}",
            span.start,
            span.end
        );
        builder.chars(cursor..span.start);
        LiteralNodeBuilder::build(&mut builder, span);
        cursor = span.end;
    }
    builder.chars(cursor..content_end);

    builder.exit(content_end);
    builder.finish()
}
