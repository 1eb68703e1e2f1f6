//! Pending/committed value editing for the date popovers.
//!
//! A popover edits a copy of its date: choices accumulate in the pending
//! slot while the edit session is open, and only an explicit commit moves
//! the pending value into the committed one. Cancel closes the session and
//! puts the pending copy back in sync with the committed value.

/// A value edited in two phases.
///
/// The holder tracks whether an edit session is open, but stays permissive
/// about order of operations; callers that need hard preconditions check
/// [`TwoPhase::is_editing`] themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoPhase<T: Copy + PartialEq> {
    committed: Option<T>,
    pending: Option<T>,
    editing: bool,
}

impl<T: Copy + PartialEq> TwoPhase<T> {
    pub fn new() -> Self {
        Self {
            committed: None,
            pending: None,
            editing: false,
        }
    }

    /// The value visible outside any edit session.
    pub fn committed(&self) -> Option<T> {
        self.committed
    }

    /// The in-progress value, meaningful while an edit session is open.
    pub fn pending(&self) -> Option<T> {
        self.pending
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Open an edit session with the given seed as the pending value.
    pub fn begin(&mut self, seed: Option<T>) {
        self.pending = seed;
        self.editing = true;
    }

    /// Replace the pending value.
    pub fn set_pending(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Drop the pending value without closing the session.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Close the session, adopting the pending value if one is present.
    /// Returns true when the committed value actually changed.
    pub fn commit(&mut self) -> bool {
        let before = self.committed;
        if let Some(value) = self.pending {
            self.committed = Some(value);
        }
        self.editing = false;
        self.committed != before
    }

    /// Close the session and reset the pending value to the committed one.
    pub fn discard(&mut self) {
        self.pending = self.committed;
        self.editing = false;
    }

    /// Overwrite the committed value outside the edit cycle. Used when a
    /// cross-field rule forces a value rather than the user choosing one.
    pub fn set_committed(&mut self, value: T) {
        self.committed = Some(value);
    }
}

impl<T: Copy + PartialEq> Default for TwoPhase<T> {
    fn default() -> Self {
        Self::new()
    }
}
