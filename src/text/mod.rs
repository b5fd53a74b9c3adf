//! Text editor core
//!
//! Plain text storage and selection with no knowledge of markdown.
//!
//! ## Modules
//!
//! - `buffer`: Whole-buffer text storage and UTF-16 offset conversion
//! - `selection`: Selection ranges (text positions)

pub mod buffer;
pub mod selection;

// Re-exports for convenience
pub use buffer::{utf16_len, TextBuffer};
pub use selection::Selection;
