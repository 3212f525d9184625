//! Line-granular selection transforms.
//!
//! Each transform maps `(document, selection)` to a new selection. New boundaries always sit at
//! a line start (character 0) or at a line's line-break inclusive end, and line indices stay
//! within `0..line_count`. The direction of the input selection is preserved: a reversed input
//! yields a reversed output, with the new endpoints swapped accordingly.

use crate::line_index::LineDocument;
use crate::selection::{Position, Selection};

/// Rebuild `selection` over `new_start..new_end`, keeping its direction.
///
/// A reversed selection (active before anchor) gets `anchor = new_end, active = new_start`;
/// otherwise `anchor = new_start, active = new_end`.
pub fn rebuild(selection: &Selection, new_start: Position, new_end: Position) -> Selection {
    Selection::from_range(new_start, new_end, selection.direction())
}

/// Grow the selection so it covers whole lines, down to the end of the line holding `end`.
///
/// The start snaps back to the beginning of its line. The end moves to the line-break
/// inclusive end of the line containing it, even when it already sits at character 0.
pub fn expand_down<D: LineDocument + ?Sized>(doc: &D, selection: &Selection) -> Selection {
    let new_start = selection.start().line_start();
    let new_end = doc
        .line_at_position(selection.end())
        .range_including_line_break
        .end;
    rebuild(selection, new_start, new_end)
}

/// Grow the selection one line upwards.
///
/// The start moves to the beginning of the previous line (line 0 stays at line 0). The end is
/// extended to its line's line-break inclusive end unless it already sits at a line start of
/// a non-empty selection.
pub fn expand_up<D: LineDocument + ?Sized>(doc: &D, selection: &Selection) -> Selection {
    let start = selection.start();
    let end = selection.end();

    let new_start = Position::new(start.line.saturating_sub(1), 0);
    let new_end = if selection.is_empty() || end.character > 0 {
        doc.line_at_position(end).range_including_line_break.end
    } else {
        end
    };
    rebuild(selection, new_start, new_end)
}

/// Shed the bottom line: move the end to the start of the line before it.
///
/// Never retracts past the start; if the previous line start comes before `start` the
/// selection collapses onto `start`.
pub fn retract_from_bottom<D: LineDocument + ?Sized>(doc: &D, selection: &Selection) -> Selection {
    let start = selection.start();
    let end_line = doc.clamp_line(selection.end().line);

    let new_end = match end_line.checked_sub(1) {
        Some(prev_line) => {
            let prev_bol = Position::new(prev_line, 0);
            if prev_bol.is_before(&start) {
                start
            } else {
                prev_bol
            }
        }
        None => start,
    };
    rebuild(selection, start, new_end)
}

/// Shed the top line: move the start to the start of the line after it.
///
/// Never retracts past the end; if the next line start comes after `end`, or the start is
/// already on the last line, the selection collapses onto `end`.
pub fn retract_from_top<D: LineDocument + ?Sized>(doc: &D, selection: &Selection) -> Selection {
    let start = selection.start();
    let end = selection.end();

    let next_line = start.line + 1;
    let new_start = if next_line > doc.last_line() {
        end
    } else {
        let next_bol = Position::new(next_line, 0);
        if next_bol.is_after(&end) {
            end
        } else {
            next_bol
        }
    };
    rebuild(selection, new_start, end)
}
