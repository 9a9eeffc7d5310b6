//! # Markdown Writer
//!
//! Writes the supported node subset back to markdown, routing every text
//! node through the [`LiteralEscaper`]. The writer's job in this crate is to
//! supply the escaper with honest context:
//!
//! - `before` is everything written so far, so a previous sibling's trailing
//!   `www` or local part is visible;
//! - `after` is the text of the following text siblings, up to and
//!   including the leading text of the next other node (or the closing
//!   delimiter of the enclosing construct);
//! - the slot is [`TextSlot::Label`] inside link and reference text.
//!
//! Ordinary markdown escaping (`*`, `_`, `[`, ...) is not applied.

use std::borrow::Cow;

use markdown_autolink_syntax::{
    Definition, Image, ImageReference, Link, LinkReference, Node, ReferenceKind,
};

use crate::escape::{EscapeContext, LiteralEscaper, TextSlot, scheme_regex};

/// Serializes trees to markdown.
#[derive(Debug, Clone, Default)]
pub struct MarkdownWriter {
    escaper: LiteralEscaper,
}

impl MarkdownWriter {
    pub fn new(escaper: LiteralEscaper) -> Self {
        Self { escaper }
    }

    pub fn escaper(&self) -> &LiteralEscaper {
        &self.escaper
    }

    /// Markdown for `node`, ending in a newline unless empty.
    pub fn write(&self, node: &Node) -> String {
        let mut out = String::new();
        match node {
            Node::Root(root) => self.flow(&root.children, &mut out),
            other => self.flow(std::slice::from_ref(other), &mut out),
        }
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    fn flow(&self, children: &[Node], out: &mut String) {
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            match child {
                Node::Root(root) => self.flow(&root.children, out),
                Node::Paragraph(paragraph) => {
                    self.phrasing(&paragraph.children, TextSlot::Phrasing, "", out)
                }
                Node::Definition(definition) => self.definition(definition, out),
                phrasing => self.phrasing(
                    std::slice::from_ref(phrasing),
                    TextSlot::Phrasing,
                    "",
                    out,
                ),
            }
        }
    }

    /// Write a run of phrasing siblings. `closing` is what follows the run.
    fn phrasing(&self, children: &[Node], slot: TextSlot, closing: &str, out: &mut String) {
        for (i, child) in children.iter().enumerate() {
            match child {
                Node::Text(text) => {
                    let after = self.following_text(&children[i + 1..], closing);
                    let ctx = EscapeContext::new(out.as_str(), &after, slot);
                    let escaped = self.escaper.escape(&text.value, &ctx);
                    out.push_str(&escaped);
                }
                Node::Emphasis(emphasis) => {
                    out.push('*');
                    self.phrasing(&emphasis.children, slot, "*", out);
                    out.push('*');
                }
                Node::Strong(strong) => {
                    out.push_str("**");
                    self.phrasing(&strong.children, slot, "**", out);
                    out.push_str("**");
                }
                Node::Link(link) => self.link(link, out),
                Node::LinkReference(reference) => self.link_reference(reference, out),
                Node::Image(image) => self.image(image, out),
                Node::ImageReference(reference) => self.image_reference(reference, out),
                Node::Definition(definition) => self.definition(definition, out),
                Node::Root(_) | Node::Paragraph(_) => {
                    let nested = child.children().unwrap_or_default();
                    self.phrasing(nested, slot, closing, out);
                }
            }
        }
    }

    /// Everything the recognizer reads after a text node: the run of text
    /// siblings that follows it, then the leading text of whatever ends the
    /// run.
    fn following_text<'n>(&self, siblings: &'n [Node], closing: &'n str) -> Cow<'n, str> {
        let run = siblings
            .iter()
            .take_while(|node| matches!(node, Node::Text(_)))
            .count();
        let tail = match siblings.get(run) {
            Some(next) => self.leading_text(next),
            None => Cow::Borrowed(closing),
        };
        match &siblings[..run] {
            [] => tail,
            [Node::Text(only)] if tail.is_empty() => Cow::Borrowed(only.value.as_str()),
            texts => {
                let mut after = String::new();
                for node in texts {
                    if let Node::Text(text) = node {
                        after.push_str(&text.value);
                    }
                }
                after.push_str(&tail);
                Cow::Owned(after)
            }
        }
    }

    /// What the recognizer sees first when `node` is written.
    fn leading_text<'n>(&self, node: &'n Node) -> Cow<'n, str> {
        match node {
            Node::Text(text) => Cow::Borrowed(text.value.as_str()),
            Node::Emphasis(_) => Cow::Borrowed("*"),
            Node::Strong(_) => Cow::Borrowed("**"),
            Node::Link(link) if as_autolink(link).is_some() => Cow::Borrowed("<"),
            Node::Link(_) | Node::LinkReference(_) | Node::Definition(_) => Cow::Borrowed("["),
            Node::Image(_) | Node::ImageReference(_) => Cow::Borrowed("!"),
            Node::Root(_) | Node::Paragraph(_) => match node.children().and_then(|c| c.first()) {
                Some(first) => self.leading_text(first),
                None => Cow::Borrowed(""),
            },
        }
    }

    fn link(&self, link: &Link, out: &mut String) {
        if let Some(text) = as_autolink(link) {
            out.push('<');
            out.push_str(text);
            out.push('>');
            return;
        }
        out.push('[');
        self.phrasing(&link.children, TextSlot::Label, "]", out);
        out.push_str("](");
        push_destination(&link.url, out);
        push_title(link.title.as_deref(), out);
        out.push(')');
    }

    fn link_reference(&self, reference: &LinkReference, out: &mut String) {
        out.push('[');
        self.phrasing(&reference.children, TextSlot::Label, "]", out);
        out.push(']');
        push_reference(
            reference.reference_kind,
            reference.label.as_deref(),
            &reference.identifier,
            out,
        );
    }

    fn image(&self, image: &Image, out: &mut String) {
        out.push_str("![");
        out.push_str(&image.alt);
        out.push_str("](");
        push_destination(&image.url, out);
        push_title(image.title.as_deref(), out);
        out.push(')');
    }

    fn image_reference(&self, reference: &ImageReference, out: &mut String) {
        out.push_str("![");
        out.push_str(&reference.alt);
        out.push(']');
        push_reference(
            reference.reference_kind,
            reference.label.as_deref(),
            &reference.identifier,
            out,
        );
    }

    fn definition(&self, definition: &Definition, out: &mut String) {
        out.push('[');
        out.push_str(
            definition
                .label
                .as_deref()
                .unwrap_or(&definition.identifier),
        );
        out.push_str("]: ");
        push_destination(&definition.url, out);
        push_title(definition.title.as_deref(), out);
    }
}

/// The text to write between `<` and `>` when `link` reads the same as its
/// URL.
fn as_autolink(link: &Link) -> Option<&str> {
    if link.title.is_some() {
        return None;
    }
    let [Node::Text(text)] = link.children.as_slice() else {
        return None;
    };
    let value = text.value.as_str();
    let same = value == link.url || link.url.strip_prefix("mailto:") == Some(value);
    let scheme = link
        .url
        .split_once(':')
        .is_some_and(|(scheme, _)| scheme.len() > 1 && scheme_regex().is_match(scheme));
    let plain = !link
        .url
        .contains(|c: char| c.is_whitespace() || c.is_control() || c == '<' || c == '>');
    (same && scheme && plain).then_some(value)
}

fn push_destination(url: &str, out: &mut String) {
    if url.is_empty() || url.contains(|c: char| c.is_whitespace() || c.is_control()) {
        out.push('<');
        out.push_str(url);
        out.push('>');
    } else {
        out.push_str(url);
    }
}

fn push_title(title: Option<&str>, out: &mut String) {
    if let Some(title) = title {
        out.push_str(" \"");
        out.push_str(&title.replace('"', "\\\""));
        out.push('"');
    }
}

fn push_reference(kind: ReferenceKind, label: Option<&str>, identifier: &str, out: &mut String) {
    match kind {
        ReferenceKind::Full => {
            out.push('[');
            out.push_str(label.unwrap_or(identifier));
            out.push(']');
        }
        ReferenceKind::Collapsed => out.push_str("[]"),
        ReferenceKind::Shortcut => {}
    }
}

/// [`MarkdownWriter::write`] with default escape options.
pub fn to_markdown(node: &Node) -> String {
    MarkdownWriter::default().write(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_autolink_syntax::{Emphasis, Paragraph, Strong};
    use pretty_assertions::assert_eq;

    fn paragraph(children: Vec<Node>) -> Node {
        Node::Paragraph(Paragraph {
            children,
            position: None,
        })
    }

    fn link(url: &str, text: &str) -> Node {
        Node::Link(Link {
            url: url.into(),
            title: None,
            children: vec![Node::text(text)],
            position: None,
        })
    }

    #[test]
    fn empty_root_writes_nothing() {
        assert_eq!(to_markdown(&Node::Root(Default::default())), "");
    }

    #[test]
    fn autolink_forms() {
        assert_eq!(
            to_markdown(&paragraph(vec![link("https://a.b", "https://a.b")])),
            "<https://a.b>\n"
        );
        assert_eq!(
            to_markdown(&paragraph(vec![link("mailto:a@b.c", "a@b.c")])),
            "<a@b.c>\n"
        );
    }

    #[test]
    fn www_links_keep_resource_form() {
        assert_eq!(
            to_markdown(&paragraph(vec![link(
                "http://www.example.com",
                "www.example.com"
            )])),
            "[www.example.com](http://www.example.com)\n"
        );
    }

    #[test]
    fn scheme_less_url_is_not_an_autolink() {
        assert_eq!(
            to_markdown(&paragraph(vec![link("a.b", "a.b")])),
            "[a.b](a.b)\n"
        );
    }

    #[test]
    fn titles_and_odd_destinations() {
        let node = paragraph(vec![Node::Link(Link {
            url: "a b".into(),
            title: Some("say \"hi\"".into()),
            children: vec![Node::text("x")],
            position: None,
        })]);
        assert_eq!(to_markdown(&node), "[x](<a b> \"say \\\"hi\\\"\")\n");
    }

    #[test]
    fn emphasis_closing_delimiter_is_after_context() {
        let node = paragraph(vec![
            Node::Emphasis(Emphasis {
                children: vec![Node::text("www.a.b")],
                position: None,
            }),
            Node::Strong(Strong {
                children: vec![Node::text("a@b.c")],
                position: None,
            }),
        ]);
        assert_eq!(to_markdown(&node), "*www\\.a.b***a\\@b.c**\n");
    }

    #[test]
    fn image_forms() {
        let node = paragraph(vec![
            Node::Image(Image {
                url: "https://a.b/i.png".into(),
                title: None,
                alt: "www.a.b".into(),
                position: None,
            }),
            Node::text(" "),
            Node::ImageReference(ImageReference {
                identifier: "logo".into(),
                label: Some("Logo".into()),
                reference_kind: ReferenceKind::Full,
                alt: "x@y.z".into(),
                position: None,
            }),
        ]);
        assert_eq!(
            to_markdown(&node),
            "![www.a.b](https://a.b/i.png) ![x@y.z][Logo]\n"
        );
    }
}
