//! Editor host
//!
//! [`SelectionHost`] is what the batch applier needs from an editor: the document, the current
//! selections, a way to replace them, and a viewport reveal request. [`LineSelectEditor`] is a
//! headless implementation that also tracks a scroll position and notifies subscribers of
//! selection and viewport changes.
//!
//! # Example
//!
//! ```rust
//! use line_select::{LineCommand, LineSelectEditor, Position, Selection};
//!
//! let mut editor = LineSelectEditor::new("one\ntwo\nthree\nfour\nfive\n");
//! editor.set_viewport_height(2);
//! editor
//!     .try_set_selections(vec![Selection::collapsed(Position::new(2, 1))])
//!     .unwrap();
//!
//! editor.subscribe(|change| {
//!     println!("{:?} -> version {}", change.change_type, change.new_version);
//! });
//!
//! editor.execute(LineCommand::ExpandDown);
//! assert_eq!(editor.selections()[0].active, Position::new(2, 6));
//! assert_eq!(editor.scroll_top(), 2);
//! ```

use crate::commands::{CommandError, LineCommand, apply_line_command_with_reveal};
use crate::config::LineSelectConfig;
use crate::line_index::{LineDocument, LineIndex};
use crate::selection::{Position, Selection, TextRange};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How a host should scroll to bring a range into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealType {
    /// Scroll as little as possible.
    #[default]
    Default,
    /// Always center the range.
    InCenter,
    /// Center the range only when it is outside the viewport.
    InCenterIfOutsideViewport,
    /// Put the start of the range at the top of the viewport.
    AtTop,
}

/// A request to bring `range` into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealRequest {
    /// Range that should become visible.
    pub range: TextRange,
    /// Scrolling policy.
    pub reveal_type: RevealType,
}

/// Editor capabilities required by the line commands.
pub trait SelectionHost {
    /// Document the selections refer to.
    fn document(&self) -> &dyn LineDocument;

    /// Current selections, primary first.
    fn selections(&self) -> &[Selection];

    /// Replace the full selection list.
    fn set_selections(&mut self, selections: Vec<Selection>);

    /// Scroll so that `range` is visible.
    fn reveal_range(&mut self, range: TextRange, reveal_type: RevealType);
}

/// State change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChangeType {
    /// Selection list changed
    SelectionChanged,
    /// Scroll position changed
    ViewportChanged,
}

/// State change record
#[derive(Debug, Clone)]
pub struct StateChange {
    /// Change type
    pub change_type: StateChangeType,
    /// Old version number
    pub old_version: u64,
    /// New version number
    pub new_version: u64,
}

/// State change callback function type
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;

/// Headless editor holding a document, its selections and a viewport.
///
/// - Version number increments on every selection or scroll change
/// - Subscribers are notified after each change
/// - With a known viewport height, reveal requests adjust [`scroll_top`](Self::scroll_top)
pub struct LineSelectEditor {
    document: LineIndex,
    selections: Vec<Selection>,
    scroll_top: usize,
    viewport_height: Option<usize>,
    last_reveal: Option<RevealRequest>,
    reveal_type: RevealType,
    version: u64,
    callbacks: Vec<StateChangeCallback>,
}

impl LineSelectEditor {
    /// Create an editor over `text` with a single caret at the document start.
    pub fn new(text: &str) -> Self {
        Self {
            document: LineIndex::from_text(text),
            selections: vec![Selection::collapsed(Position::default())],
            scroll_top: 0,
            viewport_height: None,
            last_reveal: None,
            reveal_type: RevealType::Default,
            version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Create an editor with viewport and reveal settings taken from `config`.
    pub fn with_config(text: &str, config: &LineSelectConfig) -> Self {
        let mut editor = Self::new(text);
        editor.viewport_height = config.viewport_height;
        editor.reveal_type = config.reveal_type;
        editor
    }

    /// Backing document.
    pub fn line_index(&self) -> &LineIndex {
        &self.document
    }

    /// Current selections, primary first.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Primary (first) selection, if any.
    pub fn primary_selection(&self) -> Option<&Selection> {
        self.selections.first()
    }

    /// Validate and replace the selection list.
    ///
    /// Fails if any endpoint's line is outside the document. Character offsets past a line's
    /// line-break inclusive length are clamped. An empty list is accepted.
    pub fn try_set_selections(&mut self, selections: Vec<Selection>) -> Result<(), CommandError> {
        let line_count = self.document.line_count();
        for sel in &selections {
            for pos in [sel.anchor, sel.active] {
                if pos.line >= line_count {
                    return Err(CommandError::InvalidPosition {
                        line: pos.line,
                        character: pos.character,
                    });
                }
            }
        }

        let selections = selections
            .into_iter()
            .map(|sel| {
                Selection::new(
                    self.clamp_position(sel.anchor),
                    self.clamp_position(sel.active),
                )
            })
            .collect();
        self.replace_selections(selections);
        Ok(())
    }

    /// Run `command` over all selections using this editor's reveal type.
    pub fn execute(&mut self, command: LineCommand) -> Option<RevealRequest> {
        let reveal_type = self.reveal_type;
        apply_line_command_with_reveal(self, command, reveal_type)
    }

    /// Set viewport height (in lines)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = Some(height);
    }

    /// Viewport height, if known.
    pub fn viewport_height(&self) -> Option<usize> {
        self.viewport_height
    }

    /// First visible line.
    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Set scroll position
    pub fn set_scroll_top(&mut self, scroll_top: usize) {
        let scroll_top = self.document.clamp_line(scroll_top);
        if scroll_top != self.scroll_top {
            self.scroll_top = scroll_top;
            self.notify_change(StateChangeType::ViewportChanged);
        }
    }

    /// Visible line range, if the viewport height is known.
    pub fn visible_lines(&self) -> Option<Range<usize>> {
        let height = self.viewport_height?;
        let end = self
            .scroll_top
            .saturating_add(height)
            .min(self.document.line_count());
        Some(self.scroll_top..end)
    }

    /// Last reveal request received.
    pub fn last_reveal(&self) -> Option<&RevealRequest> {
        self.last_reveal.as_ref()
    }

    /// Get current version number
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Subscribe to state changes
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    fn clamp_position(&self, pos: Position) -> Position {
        let line = self.document.line_at(pos.line);
        pos.with_character(pos.character.min(line.len_including_line_break()))
    }

    fn replace_selections(&mut self, selections: Vec<Selection>) {
        if selections != self.selections {
            self.selections = selections;
            self.notify_change(StateChangeType::SelectionChanged);
        }
    }

    fn notify_change(&mut self, change_type: StateChangeType) {
        let old_version = self.version;
        self.version += 1;

        let change = StateChange {
            change_type,
            old_version,
            new_version: self.version,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }

    /// Scroll position that makes lines `first..=last` visible under `reveal_type`.
    fn scroll_top_for(
        &self,
        first: usize,
        last: usize,
        height: usize,
        reveal_type: RevealType,
    ) -> usize {
        let centered = || (first + (last - first) / 2).saturating_sub(height / 2);
        let bottom = self.scroll_top.saturating_add(height);
        let outside = first < self.scroll_top || last >= bottom;

        match reveal_type {
            RevealType::Default => {
                let mut top = self.scroll_top;
                if last >= bottom {
                    // `bottom` did not saturate, so `height <= last`.
                    top = last - height + 1;
                }
                if first < top {
                    top = first;
                }
                top
            }
            RevealType::InCenter => centered(),
            RevealType::InCenterIfOutsideViewport if outside => centered(),
            RevealType::InCenterIfOutsideViewport => self.scroll_top,
            RevealType::AtTop => first,
        }
    }
}

impl SelectionHost for LineSelectEditor {
    fn document(&self) -> &dyn LineDocument {
        &self.document
    }

    fn selections(&self) -> &[Selection] {
        &self.selections
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        self.replace_selections(selections);
    }

    fn reveal_range(&mut self, range: TextRange, reveal_type: RevealType) {
        self.last_reveal = Some(RevealRequest { range, reveal_type });

        let Some(height) = self.viewport_height.filter(|h| *h > 0) else {
            return;
        };

        let top = self.scroll_top_for(range.start.line, range.end.line, height, reveal_type);
        tracing::debug!(from = self.scroll_top, to = top, "reveal range");
        self.set_scroll_top(top);
    }
}

impl std::fmt::Debug for LineSelectEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSelectEditor")
            .field("document", &self.document)
            .field("selections", &self.selections)
            .field("scroll_top", &self.scroll_top)
            .field("viewport_height", &self.viewport_height)
            .field("version", &self.version)
            .finish()
    }
}
