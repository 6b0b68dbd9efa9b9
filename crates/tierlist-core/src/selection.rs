//! Generic selection state utilities.
//!
//! Holds at most one pending selection. Used by the board session for
//! click-to-place: an item is selected first, then a container is clicked.

/// State for a single pending selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState<T> {
    selected: Option<T>,
}

impl<T> Default for SelectionState<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T> SelectionState<T> {
    /// Create a new selection state with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current selection.
    pub fn get(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Replace the current selection.
    pub fn select(&mut self, value: T) {
        self.selected = Some(value);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Remove and return the current selection.
    pub fn take(&mut self) -> Option<T> {
        self.selected.take()
    }
}
