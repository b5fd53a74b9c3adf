//! Selection management for the text buffer
//!
//! Offsets are UTF-16 code units, matching `selectionStart`/`selectionEnd`
//! on a DOM textarea.

use serde::{Deserialize, Serialize};

/// A selection from start (inclusive) to end (exclusive)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection, ordering the endpoints
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed selection (cursor only)
    pub fn collapsed(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    /// Check if the selection is collapsed (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in UTF-16 code units
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Clamp both endpoints into `0..=len`
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Check whether the selection fits in a buffer of `len` units
    pub fn fits(&self, len: usize) -> bool {
        self.start <= self.end && self.end <= len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_endpoints() {
        // Backward selection (dragged right to left)
        let sel = Selection::new(5, 2);
        assert_eq!(sel.start, 2);
        assert_eq!(sel.end, 5);
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn test_collapsed() {
        let sel = Selection::collapsed(4);
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Selection::new(3, 40).clamped(10), Selection::new(3, 10));
        assert_eq!(Selection::new(20, 40).clamped(10), Selection::collapsed(10));
    }

    #[test]
    fn test_fits() {
        assert!(Selection::new(0, 5).fits(5));
        assert!(!Selection::new(0, 6).fits(5));
        assert!(!Selection { start: 3, end: 1 }.fits(5));
    }
}
