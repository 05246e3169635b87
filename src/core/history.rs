//! Linear state history with an undo buffer.
//!
//! The history is an ordered log of visited states, seeded with the initial
//! state. Undoing moves the newest entry onto the undo buffer; redoing moves
//! it back. Recording a fresh state discards the undo buffer.

use super::state::StateId;

/// Ordered log of visited states plus the states that were undone.
///
/// The log is never empty and its first entry is fixed at construction.
///
/// # Example
///
/// ```rust
/// use rewind::core::History;
///
/// let mut history = History::new("a".into());
/// history.record("b".into());
/// history.record("c".into());
///
/// assert_eq!(history.undo().map(|s| s.as_str()), Some("b"));
/// assert_eq!(history.redo().map(|s| s.as_str()), Some("c"));
/// assert!(history.redo().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    entries: Vec<StateId>,
    undone: Vec<StateId>,
}

impl History {
    /// Create a history holding only the initial state.
    pub fn new(initial: StateId) -> Self {
        Self {
            entries: vec![initial],
            undone: Vec::new(),
        }
    }

    /// Append a state and drop everything that could have been redone.
    pub fn record(&mut self, state: StateId) {
        self.entries.push(state);
        self.undone.clear();
    }

    /// Step back one entry.
    ///
    /// Returns the entry that is now newest, or `None` without touching
    /// anything when only the initial entry is left.
    pub fn undo(&mut self) -> Option<&StateId> {
        if self.entries.len() < 2 {
            return None;
        }
        let popped = self.entries.pop()?;
        self.undone.push(popped);
        self.entries.last()
    }

    /// Re-apply the most recently undone entry.
    ///
    /// Returns the restored entry, or `None` when the undo buffer is empty.
    pub fn redo(&mut self) -> Option<&StateId> {
        let restored = self.undone.pop()?;
        self.entries.push(restored);
        self.entries.last()
    }

    /// Truncate the log back to its first entry. The undo buffer is kept.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
    }

    /// First entry; always the machine's initial state.
    pub fn first(&self) -> &StateId {
        &self.entries[0]
    }

    /// Newest entry.
    pub fn last(&self) -> &StateId {
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[StateId] {
        &self.entries
    }

    /// States available to [`redo`](Self::redo), oldest undo first.
    pub fn undone(&self) -> &[StateId] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of entries in the log, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(states: &[&str]) -> Vec<StateId> {
        states.iter().map(|s| StateId::from(*s)).collect()
    }

    #[test]
    fn new_history_holds_only_initial() {
        let history = History::new("idle".into());

        assert_eq!(history.entries(), ids(&["idle"]).as_slice());
        assert!(history.undone().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.first(), &StateId::from("idle"));
    }

    #[test]
    fn undo_on_initial_is_a_no_op() {
        let mut history = History::new("idle".into());

        assert!(history.undo().is_none());
        assert_eq!(history.len(), 1);
        assert!(history.undone().is_empty());
    }

    #[test]
    fn undo_moves_newest_entry_to_buffer() {
        let mut history = History::new("a".into());
        history.record("b".into());
        history.record("c".into());

        assert_eq!(history.undo(), Some(&StateId::from("b")));
        assert_eq!(history.entries(), ids(&["a", "b"]).as_slice());
        assert_eq!(history.undone(), ids(&["c"]).as_slice());
    }

    #[test]
    fn redo_restores_in_reverse_undo_order() {
        let mut history = History::new("a".into());
        history.record("b".into());
        history.record("c".into());
        history.undo();
        history.undo();

        assert_eq!(history.redo(), Some(&StateId::from("b")));
        assert_eq!(history.redo(), Some(&StateId::from("c")));
        assert!(history.redo().is_none());
        assert_eq!(history.entries(), ids(&["a", "b", "c"]).as_slice());
    }

    #[test]
    fn record_discards_redo_path() {
        let mut history = History::new("a".into());
        history.record("b".into());
        history.undo();
        history.record("c".into());

        assert!(!history.can_redo());
        assert_eq!(history.entries(), ids(&["a", "c"]).as_slice());
    }

    #[test]
    fn clear_keeps_first_entry_and_undo_buffer() {
        let mut history = History::new("a".into());
        history.record("b".into());
        history.record("c".into());
        history.undo();
        history.clear();

        assert_eq!(history.entries(), ids(&["a"]).as_slice());
        assert_eq!(history.first(), &StateId::from("a"));
        assert_eq!(history.last(), &StateId::from("a"));
        assert_eq!(history.undone(), ids(&["c"]).as_slice());
        assert!(!history.can_undo());
    }

    #[test]
    fn repeated_states_are_kept() {
        let mut history = History::new("a".into());
        history.record("a".into());
        history.record("a".into());

        assert_eq!(history.len(), 3);
        assert!(history.can_undo());
    }
}
