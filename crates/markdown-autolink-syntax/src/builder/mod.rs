//! # Tree Construction
//!
//! [`TreeBuilder`] is the tree-construction context the parse direction works
//! against. It owns a **stack of in-progress frames**: `enter` pushes a node
//! together with the point it started at, `exit` pops the top frame, stamps
//! its position and appends it to the frame below. The root frame is opened
//! by [`TreeBuilder::new`] and closed by [`TreeBuilder::finish`].
//!
//! ```text
//! enter(link)  → [root, link]
//! enter(text)  → [root, link, text]
//! chars(..)    → text.value += "www.example.com"
//! exit         → [root, link{text}]
//! exit         → [root{link}]
//! ```
//!
//! Unbalanced calls (exiting the root, nesting inside a leaf, finishing with
//! frames still open) are caller bugs and panic.
//!
//! ## Modules
//!
//! - [`literal`] - `LiteralNodeBuilder`, turning literal spans into link nodes
//! - [`phrasing`] - drives a builder over one block of text and its spans

pub mod literal;
pub mod phrasing;

use std::ops::Range;

use crate::ast::{Node, Point, Position, Root, Text};
use crate::line_index::LineIndex;

pub use literal::LiteralNodeBuilder;
pub use phrasing::build_paragraph;

#[derive(Debug)]
struct Frame {
    node: Node,
    start: Point,
}

/// Builds a tree from enter/exit/chars calls over a source string.
#[derive(Debug)]
pub struct TreeBuilder<'s> {
    index: LineIndex<'s>,
    stack: Vec<Frame>,
}

impl<'s> TreeBuilder<'s> {
    /// Create a builder with an open root node starting at offset 0.
    pub fn new(source: &'s str) -> Self {
        let index = LineIndex::new(source);
        let start = index.point(0);
        Self {
            index,
            stack: vec![Frame {
                node: Node::Root(Root::default()),
                start,
            }],
        }
    }

    pub fn source(&self) -> &'s str {
        self.index.source()
    }

    /// Number of open frames, the root included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The innermost open node.
    pub fn current(&self) -> &Node {
        &self.top().node
    }

    /// Open `node` at `offset`.
    pub fn enter(&mut self, node: Node, offset: usize) {
        assert!(
            self.current().children().is_some(),
            "cannot open a {} inside a {}",
            node.kind_name(),
            self.current().kind_name()
        );
        let start = self.index.point(offset);
        log::debug!("open {} at {start}", node.kind_name());
        self.stack.push(Frame { node, start });
    }

    /// Close the innermost node at `offset` and attach it to its parent.
    pub fn exit(&mut self, offset: usize) -> &Node {
        assert!(self.stack.len() > 1, "cannot exit the root node");
        let Frame { mut node, start } = self.stack.pop().expect("stack holds a frame");
        assert!(
            offset >= start.offset,
            "{} closed at {offset} before it opened at {}",
            node.kind_name(),
            start.offset
        );
        let end = self.index.point(offset);
        log::debug!("close {} at {end}", node.kind_name());
        node.set_position(Some(Position::new(start, end)));

        let parent = self.top_mut();
        let children = parent
            .node
            .children_mut()
            .expect("enter only opens frames inside parents");
        children.push(node);
        &children[children.len() - 1]
    }

    /// Accumulate the source characters in `range` as phrasing text.
    ///
    /// Appends to an open text node, or to a text sibling that ends exactly at
    /// `range.start`, or starts a new text node.
    pub fn chars(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let source = self.index.source();
        let value = source.get(range.clone()).unwrap_or_else(|| {
            panic!(
                "range {}..{} is not a valid source range",
                range.start, range.end
            )
        });
        let end = self.index.point(range.end);
        let start = self.index.point(range.start);

        let top = self.top_mut();
        if let Node::Text(text) = &mut top.node {
            text.value.push_str(value);
            return;
        }

        let children = top
            .node
            .children_mut()
            .expect("open frames other than text are parents");
        if let Some(Node::Text(last)) = children.last_mut()
            && let Some(position) = &mut last.position
            && position.end.offset == range.start
        {
            last.value.push_str(value);
            position.end = end;
            return;
        }

        children.push(Node::Text(Text {
            value: value.to_string(),
            position: Some(Position::new(start, end)),
        }));
    }

    /// Close the root at the end of the source and return the tree.
    pub fn finish(mut self) -> Node {
        assert!(
            self.stack.len() == 1,
            "{} node(s) still open at finish",
            self.stack.len() - 1
        );
        let Frame { mut node, start } = self.stack.pop().expect("root frame");
        let end = self.index.point(self.index.source().len());
        node.set_position(Some(Position::new(start, end)));
        node
    }

    fn top(&self) -> &Frame {
        self.stack.last().expect("root frame is always open")
    }

    fn top_mut(&mut self) -> &mut Frame {
        self.stack.last_mut().expect("root frame is always open")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Paragraph;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_source_builds_empty_root() {
        let tree = TreeBuilder::new("").finish();
        assert_eq!(
            tree,
            Node::Root(Root {
                children: vec![],
                position: Some(Position::new(Point::new(1, 1, 0), Point::new(1, 1, 0))),
            })
        );
    }

    #[test]
    fn chars_merge_adjacent_text() {
        let source = "hello world";
        let mut builder = TreeBuilder::new(source);
        builder.enter(Node::Paragraph(Paragraph::default()), 0);
        builder.chars(0..5);
        builder.chars(5..11);
        builder.exit(11);
        let tree = builder.finish();

        let paragraph = &tree.children().unwrap()[0];
        let children = paragraph.children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(
            children[0],
            Node::Text(Text {
                value: "hello world".into(),
                position: Some(Position::new(Point::new(1, 1, 0), Point::new(1, 12, 11))),
            })
        );
    }

    #[test]
    fn chars_do_not_merge_across_gaps() {
        let mut builder = TreeBuilder::new("ab cd");
        builder.enter(Node::Paragraph(Paragraph::default()), 0);
        builder.chars(0..2);
        builder.chars(3..5);
        builder.exit(5);
        let tree = builder.finish();

        assert_eq!(tree.children().unwrap()[0].children().unwrap().len(), 2);
    }

    #[test]
    fn exit_returns_closed_node_with_position() {
        let mut builder = TreeBuilder::new("abc");
        builder.enter(Node::Paragraph(Paragraph::default()), 1);
        let closed = builder.exit(2);
        assert_eq!(
            closed.position(),
            Some(Position::new(Point::new(1, 2, 1), Point::new(1, 3, 2)))
        );
        assert_eq!(builder.depth(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot exit the root")]
    fn exiting_root_panics() {
        TreeBuilder::new("a").exit(1);
    }

    #[test]
    #[should_panic(expected = "still open")]
    fn finishing_with_open_frames_panics() {
        let mut builder = TreeBuilder::new("a");
        builder.enter(Node::Paragraph(Paragraph::default()), 0);
        builder.finish();
    }

    #[test]
    #[should_panic(expected = "cannot open a paragraph inside a text")]
    fn nesting_inside_leaf_panics() {
        let mut builder = TreeBuilder::new("a");
        builder.enter(Node::text(""), 0);
        builder.enter(Node::Paragraph(Paragraph::default()), 0);
    }
}
