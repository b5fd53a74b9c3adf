//! Error types for editor operations
//!
//! Boundary conditions inside the editor (undo at the floor, redo with an
//! empty stack) are no-ops, not errors. These variants cover caller mistakes
//! at the API edge.

use thiserror::Error;

/// Top-level editor error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Selection start lies after its end
    #[error("Invalid selection: start {start} > end {end}")]
    InvalidSelection { start: usize, end: usize },

    /// Selection reaches past the end of the buffer
    #[error("Selection {start}..{end} out of bounds (buffer length {len})")]
    SelectionOutOfBounds { start: usize, end: usize, len: usize },

    /// Format command name not recognised
    #[error("Unknown format command: '{0}' (expected bold, italic or heading)")]
    UnknownCommand(String),

    /// Editor configuration could not be read
    #[error("Invalid editor config: {0}")]
    InvalidConfig(String),

    /// Diagnostic state could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;
