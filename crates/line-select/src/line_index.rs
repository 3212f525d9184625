//! Logical Line Index
//!
//! Line access for the selection transforms. [`LineDocument`] is the small capability the
//! transforms need from a document; [`LineIndex`] implements it over a Rope, giving O(log N)
//! line lookup.

use crate::selection::{Position, TextRange};
use ropey::{Rope, RopeSlice};

/// A single logical line and its extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Zero-based line index.
    pub line_number: usize,
    /// Extent of the line content, excluding the line break.
    pub range: TextRange,
    /// Extent of the line including its trailing line break.
    ///
    /// The end is `(line_number, content_len + break_len)`. For a final line without a
    /// terminator this equals [`Line::range`].
    pub range_including_line_break: TextRange,
}

impl Line {
    /// Character count of the line content, excluding the line break.
    pub fn len(&self) -> usize {
        self.range.end.character
    }

    /// `true` if the line has no content (it may still have a line break).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character count of the line including its line break.
    pub fn len_including_line_break(&self) -> usize {
        self.range_including_line_break.end.character
    }

    /// `true` if the line ends with a line break.
    pub fn has_line_break(&self) -> bool {
        self.len_including_line_break() > self.len()
    }
}

/// Read access to a document as a sequence of lines.
///
/// Implementations must always report at least one line.
pub trait LineDocument {
    /// Total number of lines (always `>= 1`).
    fn line_count(&self) -> usize;

    /// The line at `line`. Indices past the end resolve to the last line.
    fn line_at(&self, line: usize) -> Line;

    /// The line containing `pos`.
    fn line_at_position(&self, pos: Position) -> Line {
        self.line_at(pos.line)
    }

    /// Index of the last line.
    fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    /// Clamp a line index into `0..line_count()`.
    fn clamp_line(&self, line: usize) -> usize {
        line.min(self.last_line())
    }
}

/// Logical line index - implemented using Rope data structure
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty document (one empty line).
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build line index from text
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get the line at `line_number`, or `None` if out of range.
    pub fn get_line(&self, line_number: usize) -> Option<Line> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let slice = self.rope.line(line_number);
        let full_len = slice.len_chars();
        let content_len = full_len - line_break_len(slice);

        Some(Line {
            line_number,
            range: TextRange::new(
                Position::new(line_number, 0),
                Position::new(line_number, content_len),
            ),
            range_including_line_break: TextRange::new(
                Position::new(line_number, 0),
                Position::new(line_number, full_len),
            ),
        })
    }

    /// Get character offset from a position.
    ///
    /// Lines past the end map to the end of the document; characters past the line-break
    /// inclusive end of a line are clamped to it.
    pub fn position_to_char_offset(&self, pos: Position) -> usize {
        if pos.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start = self.rope.line_to_char(pos.line);
        let line_len = self.rope.line(pos.line).len_chars();
        line_start + pos.character.min(line_len)
    }

    /// Text covered by `range`.
    pub fn text_in_range(&self, range: TextRange) -> String {
        let start = self.position_to_char_offset(range.start);
        let end = self.position_to_char_offset(range.end);
        self.rope.slice(start..end.max(start)).to_string()
    }
}

impl LineDocument for LineIndex {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_at(&self, line: usize) -> Line {
        let line = self.clamp_line(line);
        // Rope always has at least one line, so the clamped index is in range.
        self.get_line(line).unwrap_or(Line {
            line_number: line,
            range: TextRange::new(Position::new(line, 0), Position::new(line, 0)),
            range_including_line_break: TextRange::new(
                Position::new(line, 0),
                Position::new(line, 0),
            ),
        })
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LineIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineIndex")
            .field("line_count", &self.rope.len_lines())
            .field("char_count", &self.rope.len_chars())
            .finish()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Length in chars of the line break terminating `slice` (0, 1 or 2 for CRLF).
fn line_break_len(slice: RopeSlice<'_>) -> usize {
    let len = slice.len_chars();
    if len == 0 {
        return 0;
    }

    let last = slice.char(len - 1);
    if last == '\n' && len >= 2 && slice.char(len - 2) == '\r' {
        2
    } else if is_line_break(last) {
        1
    } else {
        0
    }
}
