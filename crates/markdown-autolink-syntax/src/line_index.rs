//! Offset to line/column conversion.

use crate::ast::Point;

/// Precomputed line starts for a source string.
///
/// Recognizes `\n`, `\r\n` and a lone `\r` as line endings, the same set
/// CommonMark does.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        Self {
            source,
            line_starts,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The point at a byte offset.
    ///
    /// # Panics
    ///
    /// If `offset` is past the end of the source or not on a char boundary.
    /// Offsets come from the tokenizer, so either case is a caller bug.
    pub fn point(&self, offset: usize) -> Point {
        assert!(
            offset <= self.source.len(),
            "offset {offset} out of range for source of length {}",
            self.source.len()
        );
        assert!(
            self.source.is_char_boundary(offset),
            "offset {offset} is not on a char boundary"
        );

        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.source[line_start..offset].chars().count() + 1;

        Point::new(line, column, offset)
    }
}
