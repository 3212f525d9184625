use line_select::{
    LineDocument, LineIndex, Position, Selection, expand_down, expand_up, retract_from_bottom,
    retract_from_top,
};
use pretty_assertions::assert_eq;

fn sel(anchor: (usize, usize), active: (usize, usize)) -> Selection {
    Selection::new(
        Position::new(anchor.0, anchor.1),
        Position::new(active.0, active.1),
    )
}

fn abc_doc() -> LineIndex {
    LineIndex::from_text("abc\ndef\nghi\n")
}

#[test]
fn test_expand_down_mid_line_snaps_to_whole_line() {
    let out = expand_down(&abc_doc(), &sel((0, 1), (0, 2)));

    assert_eq!(out.start(), Position::new(0, 0));
    assert_eq!(out.end(), Position::new(0, 4));
    assert_eq!(out, sel((0, 0), (0, 4)));
}

#[test]
fn test_expand_up_on_top_line_clamps_start_and_extends_end() {
    let out = expand_up(&abc_doc(), &sel((0, 1), (0, 2)));

    assert_eq!(out.start(), Position::new(0, 0));
    assert_eq!(out.end(), Position::new(0, 4));
}

#[test]
fn test_retract_from_bottom_drops_last_covered_line() {
    let out = retract_from_bottom(&abc_doc(), &sel((0, 0), (2, 0)));
    assert_eq!(out, sel((0, 0), (1, 0)));
}

#[test]
fn test_retract_from_top_drops_first_covered_line() {
    let out = retract_from_top(&abc_doc(), &sel((0, 0), (2, 0)));
    assert_eq!(out, sel((1, 0), (2, 0)));
}

#[test]
fn test_expand_down_is_stable_once_whole_lines() {
    let doc = abc_doc();
    let once = expand_down(&doc, &sel((1, 2), (1, 2)));
    let twice = expand_down(&doc, &once);

    assert_eq!(once, sel((1, 0), (1, 4)));
    assert_eq!(twice, once);
}

#[test]
fn test_expand_down_end_on_line_start_pulls_in_that_line() {
    // End exactly at a line boundary still expands through the line it sits on.
    let out = expand_down(&abc_doc(), &sel((0, 0), (2, 0)));
    assert_eq!(out, sel((0, 0), (2, 4)));
}

#[test]
fn test_expand_up_repeatedly_climbs_to_top() {
    let doc = abc_doc();
    let mut s = Selection::collapsed(Position::new(2, 1));

    s = expand_up(&doc, &s);
    assert_eq!(s, sel((1, 0), (2, 4)));

    s = expand_up(&doc, &s);
    assert_eq!(s, sel((0, 0), (2, 4)));

    s = expand_up(&doc, &s);
    assert_eq!(s, sel((0, 0), (2, 4)));
}

#[test]
fn test_expand_up_then_retract_from_top_restores_line_aligned_start() {
    let doc = abc_doc();
    let original = sel((1, 0), (2, 0));

    let grown = expand_up(&doc, &original);
    assert_eq!(grown, sel((0, 0), (2, 0)));

    let shrunk = retract_from_top(&doc, &grown);
    assert_eq!(shrunk.start(), original.start());
    assert_eq!(shrunk, original);
}

#[test]
fn test_retract_single_line_collapses_and_stays() {
    let doc = abc_doc();
    let line = sel((1, 0), (1, 4));

    let bottom = retract_from_bottom(&doc, &line);
    assert_eq!(bottom, Selection::collapsed(Position::new(1, 0)));
    assert_eq!(retract_from_bottom(&doc, &bottom), bottom);

    let top = retract_from_top(&doc, &line);
    assert_eq!(top, Selection::collapsed(Position::new(1, 4)));
    assert_eq!(retract_from_top(&doc, &top), top);
}

#[test]
fn test_retract_from_bottom_on_first_line_collapses_to_start() {
    let out = retract_from_bottom(&abc_doc(), &sel((0, 1), (0, 3)));
    assert_eq!(out, Selection::collapsed(Position::new(0, 1)));
}

#[test]
fn test_retract_from_top_on_last_line_collapses_to_end() {
    let doc = LineIndex::from_text("abc\ndef");
    let out = retract_from_top(&doc, &sel((1, 0), (1, 3)));
    assert_eq!(out, Selection::collapsed(Position::new(1, 3)));
}

#[test]
fn test_last_line_without_terminator() {
    let doc = LineIndex::from_text("abc\nxyz");
    let out = expand_down(&doc, &Selection::collapsed(Position::new(1, 1)));
    assert_eq!(out, sel((1, 0), (1, 3)));
}

#[test]
fn test_crlf_line_break_is_included() {
    let doc = LineIndex::from_text("ab\r\ncd\r\n");
    let out = expand_down(&doc, &Selection::collapsed(Position::new(0, 1)));
    assert_eq!(out, sel((0, 0), (0, 4)));
    assert_eq!(doc.line_at(0).len(), 2);
}

#[test]
fn test_empty_document() {
    let doc = LineIndex::new();
    let caret = Selection::collapsed(Position::new(0, 0));

    assert_eq!(expand_down(&doc, &caret), caret);
    assert_eq!(expand_up(&doc, &caret), caret);
    assert_eq!(retract_from_bottom(&doc, &caret), caret);
    assert_eq!(retract_from_top(&doc, &caret), caret);
}

#[test]
fn test_unicode_lengths_are_in_chars() {
    let doc = LineIndex::from_text("héllo wörld\n日本\n");
    let out = expand_down(&doc, &Selection::collapsed(Position::new(1, 1)));
    assert_eq!(out, sel((1, 0), (1, 3)));
}
