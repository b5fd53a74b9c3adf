//! Markdown Editor WASM Module
//!
//! Core of an in-browser markdown text editor: a single text buffer with a
//! tracked selection, snapshot-based undo/redo, and inline formatting
//! (bold, italic, heading). Rendering and DOM wiring stay in JavaScript.

pub mod api;
pub mod error;
pub mod format;
pub mod models;
pub mod text;
pub mod undo;

// Re-export commonly used types
pub use api::MarkdownEditor;
pub use error::EditorError;
pub use format::{apply_formatting, FormatCommand, FormatSpec, Formatted};
pub use models::*;
pub use text::{Selection, TextBuffer};
pub use undo::History;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        // A logger is already installed (e.g. the module was started twice)
        log::warn!("Logger not initialized: {}", e);
    }

    log::info!("Markdown Editor WASM module initialized");
}
