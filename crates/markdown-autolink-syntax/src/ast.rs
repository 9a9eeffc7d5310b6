//! # Tree Model
//!
//! An mdast-shaped syntax tree: one enum variant per node type, each backed by
//! a plain struct that owns its children. Only the node types that matter to
//! autolink literals are modelled; block containers other than `root` and
//! `paragraph` are out of scope.
//!
//! Every node carries an optional [`Position`]. Positions exist for round-trip
//! fidelity only: two trees that differ only in positions describe the same
//! document (see [`Node::without_positions`]).

use std::fmt;

/// A place in the source.
///
/// `line` and `column` are 1-based (columns count characters), `offset` is a
/// 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The source range a node was built from, `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// How a reference names its definition (mdast `referenceType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReferenceKind {
    /// `[text]`
    #[default]
    Shortcut,
    /// `[text][]`
    Collapsed,
    /// `[text][label]`
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Root {
    pub children: Vec<Node>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub children: Vec<Node>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Emphasis {
    pub children: Vec<Node>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Strong {
    pub children: Vec<Node>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub value: String,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Link {
    pub url: String,
    /// `None` is mdast's `title: null`.
    pub title: Option<String>,
    pub children: Vec<Node>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkReference {
    pub identifier: String,
    pub label: Option<String>,
    pub reference_kind: ReferenceKind,
    pub children: Vec<Node>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub alt: String,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageReference {
    pub identifier: String,
    pub label: Option<String>,
    pub reference_kind: ReferenceKind,
    pub alt: String,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Definition {
    pub identifier: String,
    pub label: Option<String>,
    pub url: String,
    pub title: Option<String>,
    pub position: Option<Position>,
}

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root(Root),
    Paragraph(Paragraph),
    Emphasis(Emphasis),
    Strong(Strong),
    Text(Text),
    Link(Link),
    LinkReference(LinkReference),
    Image(Image),
    ImageReference(ImageReference),
    Definition(Definition),
}

impl Node {
    /// A text node without position.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
            position: None,
        })
    }

    /// The mdast type name (`"root"`, `"linkReference"`, ...).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Paragraph(_) => "paragraph",
            Node::Emphasis(_) => "emphasis",
            Node::Strong(_) => "strong",
            Node::Text(_) => "text",
            Node::Link(_) => "link",
            Node::LinkReference(_) => "linkReference",
            Node::Image(_) => "image",
            Node::ImageReference(_) => "imageReference",
            Node::Definition(_) => "definition",
        }
    }

    /// Children of a parent node, `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(n) => Some(&n.children),
            Node::Paragraph(n) => Some(&n.children),
            Node::Emphasis(n) => Some(&n.children),
            Node::Strong(n) => Some(&n.children),
            Node::Link(n) => Some(&n.children),
            Node::LinkReference(n) => Some(&n.children),
            Node::Text(_) | Node::Image(_) | Node::ImageReference(_) | Node::Definition(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(n) => Some(&mut n.children),
            Node::Paragraph(n) => Some(&mut n.children),
            Node::Emphasis(n) => Some(&mut n.children),
            Node::Strong(n) => Some(&mut n.children),
            Node::Link(n) => Some(&mut n.children),
            Node::LinkReference(n) => Some(&mut n.children),
            Node::Text(_) | Node::Image(_) | Node::ImageReference(_) | Node::Definition(_) => None,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Node::Root(n) => n.position,
            Node::Paragraph(n) => n.position,
            Node::Emphasis(n) => n.position,
            Node::Strong(n) => n.position,
            Node::Text(n) => n.position,
            Node::Link(n) => n.position,
            Node::LinkReference(n) => n.position,
            Node::Image(n) => n.position,
            Node::ImageReference(n) => n.position,
            Node::Definition(n) => n.position,
        }
    }

    pub fn set_position(&mut self, position: Option<Position>) {
        let slot = match self {
            Node::Root(n) => &mut n.position,
            Node::Paragraph(n) => &mut n.position,
            Node::Emphasis(n) => &mut n.position,
            Node::Strong(n) => &mut n.position,
            Node::Text(n) => &mut n.position,
            Node::Link(n) => &mut n.position,
            Node::LinkReference(n) => &mut n.position,
            Node::Image(n) => &mut n.position,
            Node::ImageReference(n) => &mut n.position,
            Node::Definition(n) => &mut n.position,
        };
        *slot = position;
    }

    /// A copy of this subtree with every position cleared.
    ///
    /// Round-trip comparisons use this, since re-parsed markdown rarely lines
    /// up with the source it was serialized from.
    pub fn without_positions(&self) -> Node {
        let mut copy = self.clone();
        copy.clear_positions();
        copy
    }

    fn clear_positions(&mut self) {
        self.set_position(None);
        if let Some(children) = self.children_mut() {
            for child in children {
                child.clear_positions();
            }
        }
    }

    /// The concatenated text content of this subtree (mdast `toString`).
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&t.value),
            Node::Image(i) => out.push_str(&i.alt),
            Node::ImageReference(i) => out.push_str(&i.alt),
            _ => {
                for child in self.children().unwrap_or_default() {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pos(start: usize, end: usize) -> Option<Position> {
        Some(Position::new(
            Point::new(1, start + 1, start),
            Point::new(1, end + 1, end),
        ))
    }

    #[test]
    fn leaves_have_no_children() {
        assert!(Node::text("a").children().is_none());
        assert!(Node::Definition(Definition::default()).children().is_none());
        assert!(Node::Root(Root::default()).children().is_some());
    }

    #[test]
    fn without_positions_strips_recursively() {
        let tree = Node::Paragraph(Paragraph {
            children: vec![Node::Link(Link {
                url: "https://a.b".into(),
                title: None,
                children: vec![Node::Text(Text {
                    value: "https://a.b".into(),
                    position: pos(0, 11),
                })],
                position: pos(0, 11),
            })],
            position: pos(0, 11),
        });

        let expected = Node::Paragraph(Paragraph {
            children: vec![Node::Link(Link {
                url: "https://a.b".into(),
                title: None,
                children: vec![Node::text("https://a.b")],
                position: None,
            })],
            position: None,
        });

        assert_eq!(tree.without_positions(), expected);
    }

    #[test]
    fn plain_text_includes_alt() {
        let tree = Node::Paragraph(Paragraph {
            children: vec![
                Node::text("see "),
                Node::Image(Image {
                    alt: "logo".into(),
                    ..Image::default()
                }),
            ],
            position: None,
        });
        assert_eq!(tree.to_plain_text(), "see logo");
    }

    #[test]
    fn position_display() {
        let p = pos(0, 15).unwrap();
        assert_eq!(p.to_string(), "1:1-1:16");
    }
}
