//! Editor state management
//!
//! This module contains the EditorState struct which owns the complete
//! state of one editor instance: the text buffer, the tracked selection and
//! the undo/redo history. JavaScript drives it through the WASM API; every
//! mutating call returns an [`EditOutcome`] describing what was committed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::format::{apply_formatting, FormatCommand};
use crate::models::config::EditorConfig;
use crate::text::{Selection, TextBuffer};
use crate::undo::History;

/// The last user-visible action, used for the status line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LastAction {
    Ready,
    Edited,
    Formatted(FormatCommand),
    Undo,
    Redo,
    NothingToUndo,
    NothingToRedo,
    HistoryCleared,
}

impl fmt::Display for LastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastAction::Ready => f.write_str("Ready"),
            LastAction::Edited => f.write_str("Edited text"),
            LastAction::Formatted(command) => write!(f, "Applied {}", command),
            LastAction::Undo => f.write_str("Undo"),
            LastAction::Redo => f.write_str("Redo"),
            LastAction::NothingToUndo => f.write_str("Nothing to undo"),
            LastAction::NothingToRedo => f.write_str("Nothing to redo"),
            LastAction::HistoryCleared => f.write_str("History cleared"),
        }
    }
}

/// Post-commit request for the UI to focus the textarea and place the cursor
///
/// Executed by the JavaScript side after the call returns. The core never
/// waits on it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusRequest {
    pub selection: Selection,
}

/// Result of a mutating editor operation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    /// Buffer content after the operation
    pub text: String,
    /// Tracked selection after the operation
    pub selection: Selection,
    /// Whether the buffer was replaced
    pub changed: bool,
    pub focus: Option<FocusRequest>,
}

/// Diagnostic view of the editor, for display and export
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub text: String,
    pub selection: Selection,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub status: String,
}

impl EditorSnapshot {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| EditorError::Serialization(e.to_string()))
    }
}

/// Complete editor state (WASM-owned source of truth)
#[derive(Clone, Debug)]
pub struct EditorState {
    config: EditorConfig,
    buffer: TextBuffer,
    selection: Selection,
    history: History,
    last_action: LastAction,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorState {
    /// Create an editor holding the configured initial text
    ///
    /// The initial text is the sole undo entry. The cursor starts at the end.
    pub fn new(config: EditorConfig) -> Self {
        let buffer = TextBuffer::new(config.initial_text.clone());
        let selection = Selection::collapsed(buffer.len());
        let history = History::new(buffer.as_str());
        log::info!("Editor initialized with {} UTF-16 units", buffer.len());

        Self {
            config,
            buffer,
            selection,
            history,
            last_action: LastAction::Ready,
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Human-readable summary of the last action and stack depths
    pub fn status(&self) -> String {
        format!(
            "{} | Undo stack: {} | Redo stack: {}",
            self.last_action,
            self.history.undo_depth(),
            self.history.redo_depth()
        )
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            text: self.buffer.as_str().to_string(),
            selection: self.selection,
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            status: self.status(),
        }
    }

    /// Track a selection change from the textarea
    ///
    /// Reversed endpoints are ordered, out-of-range values clamped and
    /// offsets inside a surrogate pair snapped to the character start. Never
    /// touches history.
    pub fn set_selection(&mut self, start: usize, end: usize) -> Selection {
        let len = self.buffer.len();
        if start.max(end) > len {
            log::warn!("Selection {}..{} clamped to buffer length {}", start, end, len);
        }
        self.selection = self.buffer.snap_selection(Selection::new(start, end));
        self.selection
    }

    /// Accept new content from the textarea
    ///
    /// Identical content is ignored so redundant input events do not create
    /// history entries.
    pub fn on_text_change(&mut self, new_content: &str) -> EditOutcome {
        if new_content == self.buffer.as_str() {
            return self.outcome(false, None);
        }

        self.commit(new_content.to_string());
        self.selection = self.buffer.snap_selection(self.selection);
        self.last_action = LastAction::Edited;
        self.outcome(true, None)
    }

    /// Apply a formatting command to the tracked selection
    pub fn apply_format(&mut self, command: FormatCommand) -> Result<EditOutcome> {
        let spec = match command {
            FormatCommand::Heading => self
                .config
                .heading
                .positioned_heading(&self.buffer, self.selection.start),
            _ => self.config.spec(command).clone(),
        };

        let formatted = apply_formatting(&self.buffer, self.selection, &spec)?;
        log::debug!(
            "Applied {} at {}..{} -> cursor {}",
            command,
            self.selection.start,
            self.selection.end,
            formatted.selection.start
        );

        self.commit(formatted.text);
        self.selection = formatted.selection;
        self.last_action = LastAction::Formatted(command);
        let focus = FocusRequest { selection: self.selection };
        Ok(self.outcome(true, Some(focus)))
    }

    pub fn bold(&mut self) -> Result<EditOutcome> {
        self.apply_format(FormatCommand::Bold)
    }

    pub fn italic(&mut self) -> Result<EditOutcome> {
        self.apply_format(FormatCommand::Italic)
    }

    pub fn heading(&mut self) -> Result<EditOutcome> {
        self.apply_format(FormatCommand::Heading)
    }

    /// Restore the previous snapshot; a no-op at the history floor
    pub fn undo(&mut self) -> EditOutcome {
        match self.history.undo(self.buffer.as_str()) {
            Some(restored) => {
                self.restore(restored);
                self.last_action = LastAction::Undo;
                log::debug!("Undo -> {}", self.status());
                let focus = FocusRequest { selection: self.selection };
                self.outcome(true, Some(focus))
            }
            None => {
                self.last_action = LastAction::NothingToUndo;
                self.outcome(false, None)
            }
        }
    }

    /// Reapply the most recently undone snapshot; a no-op when none exists
    pub fn redo(&mut self) -> EditOutcome {
        match self.history.redo(self.buffer.as_str()) {
            Some(restored) => {
                self.restore(restored);
                self.last_action = LastAction::Redo;
                log::debug!("Redo -> {}", self.status());
                let focus = FocusRequest { selection: self.selection };
                self.outcome(true, Some(focus))
            }
            None => {
                self.last_action = LastAction::NothingToRedo;
                self.outcome(false, None)
            }
        }
    }

    /// Drop all history, keeping the current content as the new floor
    pub fn clear_history(&mut self) -> EditOutcome {
        self.history.clear(self.buffer.as_str());
        self.last_action = LastAction::HistoryCleared;
        log::debug!("History cleared");
        self.outcome(false, None)
    }

    /// Snapshot the pre-action buffer and install new content
    fn commit(&mut self, text: String) {
        let previous = self.buffer.replace(text);
        self.history.record_snapshot(previous);
    }

    /// Install restored content without recording history
    fn restore(&mut self, text: String) {
        self.buffer.replace(text);
        self.selection = Selection::collapsed(self.buffer.len());
    }

    fn outcome(&self, changed: bool, focus: Option<FocusRequest>) -> EditOutcome {
        EditOutcome {
            text: self.buffer.as_str().to_string(),
            selection: self.selection,
            changed,
            focus,
        }
    }
}
