/// Where a text node sits, structurally.
///
/// Only [`TextSlot::Phrasing`] text is re-scanned for autolink literals when
/// markdown is parsed; the other slots are delimited by bracket, paren or
/// definition syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextSlot {
    /// Ordinary prose.
    #[default]
    Phrasing,
    /// Link text, reference label, definition label.
    Label,
    /// Link, image or definition destination.
    Destination,
    /// Reference or definition identifier.
    Identifier,
    /// Image alt text.
    Alt,
}

impl TextSlot {
    /// Whether the autolink recognizer sees text in this slot.
    pub fn is_scanned(self) -> bool {
        matches!(self, TextSlot::Phrasing)
    }
}

/// What surrounds a text node when it is written out.
///
/// `before` is markdown already emitted right before the text (escape
/// markers included), `after` is the raw text that will follow it. Either
/// may be empty when nothing adjacent is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapeContext<'a> {
    pub before: &'a str,
    pub after: &'a str,
    pub slot: TextSlot,
}

impl<'a> EscapeContext<'a> {
    /// Prose with no neighbours.
    pub fn standalone() -> Self {
        Self::default()
    }

    pub fn new(before: &'a str, after: &'a str, slot: TextSlot) -> Self {
        Self {
            before,
            after,
            slot,
        }
    }

    pub fn with_slot(self, slot: TextSlot) -> Self {
        Self { slot, ..self }
    }
}
