//! Command Interface Layer
//!
//! Wraps the line transforms in named commands that a host can register and invoke.
//!
//! # Overview
//!
//! - [`LineCommand`] - the four line commands and the transform/reveal rule each one uses
//! - [`apply_line_command`] - maps every selection of a [`SelectionHost`] through one command
//!   and asks the host to bring the primary selection's moving edge into view
//! - [`CommandRegistry`] - activation/deactivation of the commands under a namespace
//!
//! # Example
//!
//! ```rust
//! use line_select::{CommandRegistry, LineSelectEditor, Position, Selection};
//!
//! let mut editor = LineSelectEditor::new("abc\ndef\nghi\n");
//! editor
//!     .try_set_selections(vec![Selection::new(Position::new(0, 1), Position::new(0, 2))])
//!     .unwrap();
//!
//! let mut registry = CommandRegistry::new();
//! registry.activate("karmchenki-expand-selection-to-line").unwrap();
//! registry
//!     .execute(
//!         "karmchenki-expand-selection-to-line.expandSelectionsDownByLine",
//!         &mut editor,
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     editor.selections(),
//!     &[Selection::new(Position::new(0, 0), Position::new(0, 4))]
//! );
//! ```

use crate::config::{ConfigError, LineSelectConfig};
use crate::editor::{RevealRequest, RevealType, SelectionHost};
use crate::line_index::LineDocument;
use crate::selection::{Position, Selection, TextRange};
use crate::transform::{expand_down, expand_up, retract_from_bottom, retract_from_top};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace the commands are registered under when none is configured.
pub const DEFAULT_COMMAND_NAMESPACE: &str = "karmchenki-expand-selection-to-line";

/// Line selection commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineCommand {
    /// Grow every selection to cover whole lines, down through the line holding its end.
    ExpandDown,
    /// Grow every selection one line upwards.
    ExpandUp,
    /// Shed the bottom line of every selection.
    RetractFromBottom,
    /// Shed the top line of every selection.
    RetractFromTop,
}

/// Which endpoint of the primary selection is brought into view after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEdge {
    /// The anchor endpoint.
    Anchor,
    /// The active endpoint.
    Active,
}

impl LineCommand {
    /// All commands, in registration order.
    pub const ALL: [LineCommand; 4] = [
        LineCommand::ExpandDown,
        LineCommand::ExpandUp,
        LineCommand::RetractFromBottom,
        LineCommand::RetractFromTop,
    ];

    /// Stable command name (without namespace).
    pub fn name(self) -> &'static str {
        match self {
            LineCommand::ExpandDown => "expandSelectionsDownByLine",
            LineCommand::ExpandUp => "expandSelectionsUpByLine",
            LineCommand::RetractFromBottom => "retractSelectionsFromBottom",
            LineCommand::RetractFromTop => "retractSelectionsFromTop",
        }
    }

    /// Apply this command's transform to a single selection.
    pub fn apply<D: LineDocument + ?Sized>(self, doc: &D, selection: &Selection) -> Selection {
        match self {
            LineCommand::ExpandDown => expand_down(doc, selection),
            LineCommand::ExpandUp => expand_up(doc, selection),
            LineCommand::RetractFromBottom => retract_from_bottom(doc, selection),
            LineCommand::RetractFromTop => retract_from_top(doc, selection),
        }
    }

    /// Endpoint of the primary selection that should stay visible.
    pub fn reveal_edge(self) -> RevealEdge {
        match self {
            LineCommand::ExpandDown | LineCommand::RetractFromBottom => RevealEdge::Active,
            LineCommand::ExpandUp | LineCommand::RetractFromTop => RevealEdge::Anchor,
        }
    }

    /// Line offset, in the direction of travel, of the extra line revealed past the edge.
    pub fn line_delta(self) -> isize {
        match self {
            LineCommand::ExpandDown | LineCommand::RetractFromBottom => 1,
            LineCommand::ExpandUp | LineCommand::RetractFromTop => -1,
        }
    }

    /// Range to reveal for `primary` after this command ran.
    ///
    /// Spans from the relevant endpoint to the start of the line one step further in the
    /// direction of travel, clamped into the document.
    pub fn reveal_range<D: LineDocument + ?Sized>(self, doc: &D, primary: &Selection) -> TextRange {
        let from = match self.reveal_edge() {
            RevealEdge::Anchor => primary.anchor,
            RevealEdge::Active => primary.active,
        };

        let target_line = if self.line_delta() >= 0 {
            from.line.saturating_add(self.line_delta().unsigned_abs())
        } else {
            from.line.saturating_sub(self.line_delta().unsigned_abs())
        };

        TextRange::new(from, Position::new(doc.clamp_line(target_line), 0))
    }
}

impl fmt::Display for LineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineCommand::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

/// Command error type
#[derive(Debug, Error)]
pub enum CommandError {
    /// No command is registered under this id.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// [`CommandRegistry::activate`] was called while already active.
    #[error("commands are already registered under namespace '{0}'")]
    AlreadyActive(String),

    /// A selection endpoint lies outside the document.
    #[error("invalid position: line {line}, character {character}")]
    InvalidPosition {
        /// Logical line index.
        line: usize,
        /// Character offset within the line.
        character: usize,
    },

    /// Loading or validating the configuration failed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Map every selection of `host` through `command`, then reveal the primary selection's
/// moving edge with [`RevealType::Default`].
///
/// See [`apply_line_command_with_reveal`].
pub fn apply_line_command<H: SelectionHost + ?Sized>(
    host: &mut H,
    command: LineCommand,
) -> Option<RevealRequest> {
    apply_line_command_with_reveal(host, command, RevealType::Default)
}

/// Map every selection of `host` through `command` and follow the primary selection.
///
/// Selections are transformed independently and keep their order; the full list is replaced
/// in one call. The reveal request targets the first selection and is skipped when there are
/// no selections. Returns the reveal request that was sent to the host, if any.
pub fn apply_line_command_with_reveal<H: SelectionHost + ?Sized>(
    host: &mut H,
    command: LineCommand,
    reveal_type: RevealType,
) -> Option<RevealRequest> {
    let (selections, reveal) = {
        let doc = host.document();
        let selections: Vec<Selection> = host
            .selections()
            .iter()
            .map(|selection| command.apply(doc, selection))
            .collect();
        let reveal = selections.first().map(|primary| RevealRequest {
            range: command.reveal_range(doc, primary),
            reveal_type,
        });
        (selections, reveal)
    };

    tracing::trace!(
        command = command.name(),
        selections = selections.len(),
        "applied line command"
    );

    host.set_selections(selections);
    if let Some(request) = reveal {
        host.reveal_range(request.range, request.reveal_type);
    }
    reveal
}

/// Registration table for the line commands.
///
/// Commands are registered under `"<namespace>.<name>"` ids by [`activate`](Self::activate)
/// and dropped again by [`deactivate`](Self::deactivate).
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    namespace: Option<String>,
    commands: BTreeMap<String, LineCommand>,
    reveal_type: RevealType,
}

impl CommandRegistry {
    /// Create an inactive registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inactive registry that reveals with the configured [`RevealType`].
    pub fn from_config(config: &LineSelectConfig) -> Self {
        Self {
            reveal_type: config.reveal_type,
            ..Self::default()
        }
    }

    /// Register all commands under `namespace`.
    pub fn activate(&mut self, namespace: &str) -> Result<(), CommandError> {
        if let Some(current) = &self.namespace {
            return Err(CommandError::AlreadyActive(current.clone()));
        }

        for command in LineCommand::ALL {
            let id = format!("{}.{}", namespace, command.name());
            tracing::debug!(%id, "registering command");
            self.commands.insert(id, command);
        }
        self.namespace = Some(namespace.to_string());
        Ok(())
    }

    /// Validate `config` and register all commands under its namespace.
    pub fn activate_with_config(&mut self, config: &LineSelectConfig) -> Result<(), CommandError> {
        config.validate()?;
        self.reveal_type = config.reveal_type;
        self.activate(&config.command_namespace)
    }

    /// Unregister every command. Does nothing when inactive.
    pub fn deactivate(&mut self) {
        if let Some(namespace) = self.namespace.take() {
            tracing::debug!(%namespace, "unregistering commands");
        }
        self.commands.clear();
    }

    /// `true` between [`activate`](Self::activate) and [`deactivate`](Self::deactivate).
    pub fn is_active(&self) -> bool {
        self.namespace.is_some()
    }

    /// Namespace the commands are registered under, if active.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Reveal type passed to hosts on execution.
    pub fn reveal_type(&self) -> RevealType {
        self.reveal_type
    }

    /// Registered command ids, sorted.
    pub fn command_ids(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Look up a registered command.
    pub fn resolve(&self, id: &str) -> Result<LineCommand, CommandError> {
        self.commands
            .get(id)
            .copied()
            .ok_or_else(|| CommandError::UnknownCommand(id.to_string()))
    }

    /// Run the command registered under `id` against `host`.
    pub fn execute<H: SelectionHost + ?Sized>(
        &self,
        id: &str,
        host: &mut H,
    ) -> Result<Option<RevealRequest>, CommandError> {
        let command = self.resolve(id)?;
        tracing::debug!(%id, "executing command");
        Ok(apply_line_command_with_reveal(host, command, self.reveal_type))
    }
}
