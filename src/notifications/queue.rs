// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of live toasts.
//!
//! Arrival order is the only order: `add` appends, `remove` deletes in place,
//! nothing else reorders. The newest toast is last.

use super::toast::Toast;
use crate::domain::error::ToastError;
use crate::domain::toast::ToastId;

/// The toasts currently on screen, oldest first.
#[derive(Debug, Default, Clone)]
pub struct Queue {
    toasts: Vec<Toast>,
}

impl Queue {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast.
    pub fn add(&mut self, toast: Toast) {
        debug_assert!(
            !self.contains(toast.id()),
            "toast {} added twice",
            toast.id()
        );
        self.toasts.push(toast);
    }

    /// Removes a toast by id and returns it, flagged as being removed.
    ///
    /// # Errors
    ///
    /// Returns [`ToastError::NotFound`] if no toast has this id.
    pub fn remove(&mut self, id: ToastId) -> Result<Toast, ToastError> {
        let pos = self.position(id).ok_or(ToastError::NotFound(id))?;
        self.toasts[pos].is_being_removed = true;
        Ok(self.toasts.remove(pos))
    }

    /// Returns the toast with this id.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    /// Returns the toast with this id, mutably.
    pub fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.position(id).is_some()
    }

    /// Returns how many toasts are newer than this one (0 for the newest).
    #[must_use]
    pub fn depth(&self, id: ToastId) -> Option<usize> {
        self.position(id).map(|pos| self.toasts.len() - 1 - pos)
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Returns the ids, oldest to newest.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.toasts.iter().map(Toast::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn position(&self, id: ToastId) -> Option<usize> {
        self.toasts.iter().position(|t| t.id() == id)
    }
}
