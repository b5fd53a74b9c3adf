//! Inline markdown formatting
//!
//! Formatting wraps the selected text (or a placeholder when nothing is
//! selected) in a prefix and suffix and splices the result back into the
//! buffer. It is a pure function of its inputs; recording history is the
//! caller's job.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::text::{utf16_len, Selection, TextBuffer};

/// Prefix, suffix and placeholder for one formatting command
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    pub prefix: String,
    pub suffix: String,
    /// Inserted when the selection is empty
    pub default_text: String,
}

impl FormatSpec {
    pub fn new(prefix: &str, suffix: &str, default_text: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            default_text: default_text.to_string(),
        }
    }

    pub fn bold() -> Self {
        Self::new("**", "**", "Bold text")
    }

    pub fn italic() -> Self {
        Self::new("_", "_", "Italic text")
    }

    /// Heading spec with the line-start prefix
    ///
    /// See [`FormatSpec::positioned_heading`] for the newline rule.
    pub fn heading() -> Self {
        Self::new("# ", "", "Heading")
    }

    /// Adjust a heading spec to the insertion point
    ///
    /// When `start` is not at the beginning of a line a newline is
    /// prepended to the prefix so the heading lands on its own line. Only
    /// the preceding character is inspected.
    pub fn positioned_heading(&self, buffer: &TextBuffer, start: usize) -> Self {
        let at_line_start = start == 0 || buffer.char_before(start) == Some('\n');
        if at_line_start {
            self.clone()
        } else {
            Self {
                prefix: format!("\n{}", self.prefix),
                ..self.clone()
            }
        }
    }
}

/// Formatting commands exposed to the toolbar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatCommand {
    Bold,
    Italic,
    Heading,
}

impl FormatCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Heading => "heading",
        }
    }
}

impl fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatCommand {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bold" => Ok(FormatCommand::Bold),
            "italic" => Ok(FormatCommand::Italic),
            "heading" => Ok(FormatCommand::Heading),
            _ => Err(EditorError::UnknownCommand(s.to_string())),
        }
    }
}

/// Result of a formatting splice
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    /// Collapsed cursor just after the inserted text
    pub selection: Selection,
}

/// Wrap the selection in `spec` and splice it into the buffer
///
/// The selection must be ordered and lie within the buffer. Endpoints inside
/// a surrogate pair snap to the start of that character. The returned cursor
/// sits at `start + len(prefix + wrapped + suffix)`.
pub fn apply_formatting(
    buffer: &TextBuffer,
    selection: Selection,
    spec: &FormatSpec,
) -> Result<Formatted> {
    let len = buffer.len();
    if !selection.fits(len) {
        let Selection { start, end } = selection;
        return Err(if start > end {
            EditorError::InvalidSelection { start, end }
        } else {
            EditorError::SelectionOutOfBounds { start, end, len }
        });
    }
    let selection = buffer.snap_selection(selection);

    let text_to_wrap = if selection.is_empty() {
        spec.default_text.as_str()
    } else {
        buffer.slice(selection)
    };
    let formatted = format!("{}{}{}", spec.prefix, text_to_wrap, spec.suffix);

    let source = buffer.as_str();
    let head = &source[..buffer.byte_index(selection.start)];
    let tail = &source[buffer.byte_index(selection.end)..];

    let mut text = String::with_capacity(head.len() + formatted.len() + tail.len());
    text.push_str(head);
    text.push_str(&formatted);
    text.push_str(tail);

    Ok(Formatted {
        text,
        selection: Selection::collapsed(selection.start + utf16_len(&formatted)),
    })
}
