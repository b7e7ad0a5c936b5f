//! Bounded undo/redo over full scene snapshots.
//!
//! The undo stack always holds the current state on top; the bottom entry
//! is the oldest state still reachable. A fresh history starts with one
//! baseline entry, so the first undoable edit is the second commit.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use tracing::debug;

use crate::consts::HISTORY_DEPTH;
use crate::doc::Snapshot;

#[derive(Debug, Clone)]
pub struct History {
    /// Oldest at the front, current state at the back.
    undo: VecDeque<Snapshot>,
    /// Most recently undone at the back.
    redo: Vec<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_DEPTH, Snapshot::empty())
    }
}

impl History {
    /// Start a history whose only entry is `baseline`. `capacity` is raised to at least 1.
    #[must_use]
    pub fn new(capacity: usize, baseline: Snapshot) -> Self {
        let mut undo = VecDeque::new();
        undo.push_back(baseline);
        Self { undo, redo: Vec::new(), capacity: capacity.max(1) }
    }

    /// Record `snapshot` as the new current state, discarding any redo entries.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.redo.clear();
        self.undo.push_back(snapshot);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
        debug!(depth = self.undo.len(), elements = self.current().map_or(0, Snapshot::len), "history commit");
    }

    /// Step back one entry and return the state to restore. `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.undo.len() <= 1 {
            return None;
        }
        let top = self.undo.pop_back()?;
        self.redo.push(top);
        debug!(depth = self.undo.len(), redo = self.redo.len(), "history undo");
        self.undo.back()
    }

    /// Step forward one entry and return the state to restore. `None` if nothing was undone.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(next);
        debug!(depth = self.undo.len(), redo = self.redo.len(), "history redo");
        self.undo.back()
    }

    /// Drop every entry and start again from `baseline`.
    pub fn reset(&mut self, baseline: Snapshot) {
        self.undo.clear();
        self.redo.clear();
        self.undo.push_back(baseline);
    }

    /// The state the scene should currently match.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo.back()
    }

    /// Number of entries on the undo stack, current state included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
