//! Models module for the Markdown Editor
//!
//! This module contains the editor state, its configuration and the
//! result types handed back to JavaScript.

pub mod config;
pub mod editor_state;

// Re-export commonly used types
pub use config::{EditorConfig, WELCOME_TEXT};
pub use editor_state::{EditOutcome, EditorSnapshot, EditorState, FocusRequest, LastAction};
