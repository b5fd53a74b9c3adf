//! Markdown Editor WASM API
//!
//! This module provides the JavaScript-facing API for the editor.
//!
//! # Module Structure
//!
//! - `editor`: The `MarkdownEditor` class and free functions
//! - `helpers`: Shared utilities for serialization and error conversion

pub mod editor;
pub mod helpers;

pub use editor::{default_welcome_text, set_log_level, MarkdownEditor};
