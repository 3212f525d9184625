#![warn(missing_docs)]
//! Line Select - Line-Granular Selection Adjustment
//!
//! # Overview
//!
//! `line-select` grows and shrinks editor selections one whole line at a time. Given a document
//! and a list of directional selections (anchor + active endpoint) it computes the adjusted
//! selections and asks the host to keep the moving edge of the primary selection visible.
//!
//! It does not render anything or own an event loop: the host supplies the document and the
//! selections and receives new selections plus a reveal request.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Registry (activate / deactivate)   │  ← Host-facing API
//! ├─────────────────────────────────────────────┤
//! │  Batch Applier + Viewport Follow            │  ← Per-editor orchestration
//! ├─────────────────────────────────────────────┤
//! │  Line Transforms (expand / retract)         │  ← Selection arithmetic
//! ├─────────────────────────────────────────────┤
//! │  Line Index (Rope-based)                    │  ← Line Access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use line_select::{LineCommand, LineSelectEditor, Position, Selection};
//!
//! let mut editor = LineSelectEditor::new("abc\ndef\nghi\n");
//! editor
//!     .try_set_selections(vec![Selection::new(Position::new(0, 0), Position::new(2, 0))])
//!     .unwrap();
//!
//! // Shed the last covered line.
//! editor.execute(LineCommand::RetractFromBottom);
//! assert_eq!(
//!     editor.selections(),
//!     &[Selection::new(Position::new(0, 0), Position::new(1, 0))]
//! );
//! ```
//!
//! # Module Description
//!
//! - [`selection`] - positions, ranges and directional selections
//! - [`line_index`] - line access trait and the Rope-backed document
//! - [`transform`] - the four line transforms
//! - [`commands`] - named commands, batch applier and registration table
//! - [`editor`] - host trait and a headless editor with viewport tracking
//! - [`config`] - JSON configuration

pub mod commands;
pub mod config;
pub mod editor;
pub mod line_index;
pub mod selection;
pub mod transform;

pub use commands::{
    CommandError, CommandRegistry, DEFAULT_COMMAND_NAMESPACE, LineCommand, RevealEdge,
    apply_line_command, apply_line_command_with_reveal,
};
pub use config::{ConfigError, LineSelectConfig};
pub use editor::{
    LineSelectEditor, RevealRequest, RevealType, SelectionHost, StateChange, StateChangeCallback,
    StateChangeType,
};
pub use line_index::{Line, LineDocument, LineIndex};
pub use selection::{Position, Selection, SelectionDirection, TextRange};
pub use transform::{expand_down, expand_up, rebuild, retract_from_bottom, retract_from_top};
