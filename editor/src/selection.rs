//! Selection model: an ordered set of element ids with one primary.
//!
//! The primary is the element the overlay and property panel follow and the
//! pivot for drag/resize/rotate. Members keep insertion order so "the first
//! remaining member" is well defined when the primary is toggled away.
//!
//! This type only tracks ids. `EditorContext` routes every change through
//! one method that also recomputes the overlay.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::doc::ElementId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    members: Vec<ElementId>,
    primary: Option<ElementId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with exactly `id`.
    pub fn select_single(&mut self, id: ElementId) {
        self.members.clear();
        self.members.push(id);
        self.primary = Some(id);
    }

    /// Add `id` as the new primary, or remove it if already selected.
    ///
    /// Removing the primary promotes the first remaining member.
    pub fn toggle(&mut self, id: ElementId) {
        if let Some(idx) = self.members.iter().position(|m| *m == id) {
            self.members.remove(idx);
            if self.primary == Some(id) {
                self.primary = self.members.first().copied();
            }
        } else {
            self.members.push(id);
            self.primary = Some(id);
        }
    }

    /// Replace the selection with `ids`. The last id becomes primary.
    pub fn select_many<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.members.clear();
        self.primary = None;
        self.extend(ids);
    }

    /// Append `ids` not already selected. The last id given becomes primary.
    pub fn extend<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ElementId>,
    {
        for id in ids {
            if !self.members.contains(&id) {
                self.members.push(id);
            }
            self.primary = Some(id);
        }
    }

    /// Make an already-selected id primary. Returns false if `id` is not selected.
    pub fn set_primary(&mut self, id: ElementId) -> bool {
        if !self.contains(&id) {
            return false;
        }
        self.primary = Some(id);
        true
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.primary = None;
    }

    /// Drop members for which `keep` is false, re-electing the primary if it went away.
    ///
    /// Returns true if anything was dropped.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&ElementId) -> bool,
    {
        let before = self.members.len();
        self.members.retain(|id| keep(id));
        if let Some(p) = self.primary {
            if !self.members.contains(&p) {
                self.primary = self.members.last().copied();
            }
        }
        self.members.len() != before
    }

    #[must_use]
    pub fn primary(&self) -> Option<ElementId> {
        self.primary
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.members.contains(id)
    }

    /// Selected ids in selection order.
    #[must_use]
    pub fn ids(&self) -> &[ElementId] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
