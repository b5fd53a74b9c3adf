//! Text buffer implementation
//!
//! Immutable-at-a-point-in-time text. Edits never mutate in place: the
//! buffer is replaced wholesale by a new string.

use super::selection::Selection;

/// Whole-document text buffer addressed by UTF-16 offsets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Create a buffer from a string
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in UTF-16 code units
    pub fn len(&self) -> usize {
        utf16_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole content, returning the previous value
    pub fn replace(&mut self, text: String) -> String {
        std::mem::replace(&mut self.text, text)
    }

    /// Convert a UTF-16 offset to a byte index
    ///
    /// Offsets past the end map to the end; an offset inside a surrogate
    /// pair floors to the start of that character.
    pub fn byte_index(&self, offset: usize) -> usize {
        byte_index(&self.text, offset)
    }

    /// Snap a UTF-16 offset onto a character boundary inside the buffer
    pub fn snap(&self, offset: usize) -> usize {
        utf16_len(&self.text[..self.byte_index(offset)])
    }

    /// Clamp a selection into the buffer and snap both endpoints
    pub fn snap_selection(&self, selection: Selection) -> Selection {
        let clamped = selection.clamped(self.len());
        Selection::new(self.snap(clamped.start), self.snap(clamped.end))
    }

    /// Text covered by a selection
    pub fn slice(&self, selection: Selection) -> &str {
        let start = self.byte_index(selection.start);
        let end = self.byte_index(selection.end).max(start);
        &self.text[start..end]
    }

    /// Character immediately before a UTF-16 offset
    pub fn char_before(&self, offset: usize) -> Option<char> {
        self.text[..self.byte_index(offset)].chars().next_back()
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Length of a string in UTF-16 code units
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Byte index of a UTF-16 offset in `s`
pub fn byte_index(s: &str, offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in s.char_indices() {
        let next = units + ch.len_utf16();
        if next > offset {
            return idx;
        }
        units = next;
    }
    s.len()
}
