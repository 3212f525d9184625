//! Position, range and selection primitives.
//!
//! Coordinates are logical: a zero-based line index plus a zero-based character offset
//! (Unicode scalar values) within that line.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Position coordinates (line and character offset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based character offset within the logical line.
    pub character: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Copy of this position with a different character offset.
    pub fn with_character(self, character: usize) -> Self {
        Self { character, ..self }
    }

    /// Start of the line this position sits on.
    pub fn line_start(self) -> Self {
        Self::new(self.line, 0)
    }

    /// `true` if `self` comes strictly before `other`.
    pub fn is_before(&self, other: &Position) -> bool {
        self < other
    }

    /// `true` if `self` comes strictly after `other`.
    pub fn is_after(&self, other: &Position) -> bool {
        self > other
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.character.cmp(&other.character))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A normalized range (`start <= end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl TextRange {
    /// Build a range from two positions in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// `true` if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionDirection {
    /// Active end at or after the anchor.
    Forward,
    /// Active end before the anchor.
    Reversed,
}

/// Selection with a fixed anchor and a moving active end.
///
/// `start`/`end` are derived as the min/max of the two endpoints, so they never invert.
/// Which endpoint is the anchor is a property of the selection and is carried through every
/// transform (see [`SelectionDirection`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Fixed end of the selection.
    pub anchor: Position,
    /// Moving end of the selection (the caret).
    pub active: Position,
}

impl Selection {
    /// Create a selection from its anchor and active positions.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Create a caret (empty selection) at `pos`.
    pub fn collapsed(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// Build a selection spanning `start..end` with the given direction.
    pub fn from_range(start: Position, end: Position, direction: SelectionDirection) -> Self {
        match direction {
            SelectionDirection::Forward => Self::new(start, end),
            SelectionDirection::Reversed => Self::new(end, start),
        }
    }

    /// Smaller of the two endpoints.
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// Larger of the two endpoints.
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// Normalized range covered by this selection.
    pub fn range(&self) -> TextRange {
        TextRange::new(self.anchor, self.active)
    }

    /// `true` if anchor and active coincide.
    pub fn is_empty(&self) -> bool {
        self.range().is_empty()
    }

    /// `true` if the active end sits before the anchor.
    pub fn is_reversed(&self) -> bool {
        self.active.is_before(&self.anchor)
    }

    /// Direction of this selection.
    pub fn direction(&self) -> SelectionDirection {
        if self.is_reversed() {
            SelectionDirection::Reversed
        } else {
            SelectionDirection::Forward
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert!(Position::new(2, 3).is_after(&Position::new(2, 1)));
        assert!(!Position::new(2, 3).is_before(&Position::new(2, 3)));
    }

    #[test]
    fn test_position_with() {
        let pos = Position::new(3, 7);
        assert_eq!(pos.with_character(0), Position::new(3, 0));
        assert_eq!(pos.line_start(), Position::new(3, 0));
        assert_eq!(pos, Position::new(3, 7));
    }

    #[test]
    fn test_selection_start_end() {
        let sel = Selection::new(Position::new(2, 0), Position::new(0, 3));
        assert_eq!(sel.start(), Position::new(0, 3));
        assert_eq!(sel.end(), Position::new(2, 0));
        assert!(sel.is_reversed());
        assert_eq!(sel.direction(), SelectionDirection::Reversed);
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_collapsed_is_forward() {
        let sel = Selection::collapsed(Position::new(1, 1));
        assert!(sel.is_empty());
        assert_eq!(sel.direction(), SelectionDirection::Forward);
    }

    #[test]
    fn test_from_range_respects_direction() {
        let a = Position::new(0, 0);
        let b = Position::new(1, 0);
        let fwd = Selection::from_range(a, b, SelectionDirection::Forward);
        let rev = Selection::from_range(a, b, SelectionDirection::Reversed);
        assert_eq!((fwd.anchor, fwd.active), (a, b));
        assert_eq!((rev.anchor, rev.active), (b, a));
        assert_eq!(fwd.range(), rev.range());
    }

    #[test]
    fn test_text_range_normalizes() {
        let r = TextRange::new(Position::new(4, 0), Position::new(1, 2));
        assert_eq!(r.start, Position::new(1, 2));
        assert_eq!(r.end, Position::new(4, 0));
        assert!(!r.is_empty());
        assert!(TextRange::new(r.end, r.end).is_empty());
    }
}
