/// Linear undo/redo history of whole-buffer snapshots
///
/// The undo stack always holds at least one entry, the state the history
/// was created (or last cleared) with. That floor entry is never popped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    /// Snapshots that can be restored by undo (last is most recent)
    undo_stack: Vec<String>,
    /// Snapshots that were undone and can be reapplied
    redo_stack: Vec<String>,
}

impl History {
    /// Create a history whose floor entry is `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            undo_stack: vec![initial.into()],
            redo_stack: Vec::new(),
        }
    }

    /// Record the pre-action content and invalidate the redo path
    pub fn record_snapshot(&mut self, current: impl Into<String>) {
        self.undo_stack.push(current.into());
        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo snapshot(s)", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Step back one snapshot
    ///
    /// `current` is the content being left; it becomes redoable. Returns the
    /// content to restore, or `None` at the floor (nothing is mutated).
    pub fn undo(&mut self, current: &str) -> Option<String> {
        if !self.can_undo() {
            return None;
        }

        let restored = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_string());
        Some(restored)
    }

    /// Reapply the most recently undone snapshot
    ///
    /// `current` is pushed back onto the undo stack. Returns `None` when
    /// there is nothing to redo.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push(current.to_string());
        Some(restored)
    }

    /// Reset to a single floor entry holding `current`
    pub fn clear(&mut self, current: impl Into<String>) {
        self.undo_stack.clear();
        self.undo_stack.push(current.into());
        self.redo_stack.clear();
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of entries on the undo stack, floor included
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of entries on the redo stack
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_has_floor_only() {
        let history = History::new("welcome");
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_floor_is_noop() {
        let mut history = History::new("welcome");
        assert_eq!(history.undo("welcome"), None);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new("a");

        // Edit "a" -> "ab"
        history.record_snapshot("a");
        assert!(history.can_undo());

        let restored = history.undo("ab");
        assert_eq!(restored.as_deref(), Some("a"));
        assert!(history.can_redo());

        let reapplied = history.redo("a");
        assert_eq!(reapplied.as_deref(), Some("ab"));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_on_empty_is_noop() {
        let mut history = History::new("a");
        history.record_snapshot("a");
        assert_eq!(history.redo("ab"), None);
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new("a");
        history.record_snapshot("a");
        history.undo("ab");
        assert_eq!(history.redo_depth(), 1);

        history.record_snapshot("a");
        assert_eq!(history.redo_depth(), 0);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_floor_survives_repeated_undo() {
        let mut history = History::new("v0");
        history.record_snapshot("v0");
        history.record_snapshot("v1");

        assert_eq!(history.undo("v2").as_deref(), Some("v1"));
        assert_eq!(history.undo("v1").as_deref(), Some("v0"));
        assert_eq!(history.undo("v0"), None);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new("a");
        history.record_snapshot("a");
        history.record_snapshot("ab");
        history.undo("abc");

        history.clear("ab");
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
