//! # Undo/Redo History
//!
//! Snapshot-based history for the workspace.
//!
//! ## Design
//!
//! - Before every structural edit the reducer checkpoints a full snapshot of
//!   the state as it was (pages, source registry, selection)
//! - Undo swaps the current state with the newest past snapshot
//! - Redo swaps it back with the nearest future snapshot
//! - A new checkpoint clears the future
//! - Both stacks are bounded; the deepest entries are evicted first
//!
//! Snapshots never hold nested history, so their size does not grow with
//! the number of edits.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new();
//!
//! history.checkpoint(state.snapshot());
//! // ... mutate state ...
//!
//! if let Some(previous) = history.undo(state.snapshot()) {
//!     state.restore(previous);
//! }
//! ```

use crate::{Document, Page, PageId};
use std::collections::{BTreeSet, VecDeque};

/// Default number of undo levels
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Independent copy of the editable part of the workspace
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub pages: Vec<Page>,
    pub documents: Vec<Document>,
    pub selection: BTreeSet<PageId>,
}

/// Bounded undo/redo stacks of snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    /// Past states (most recent last)
    past: VecDeque<Snapshot>,

    /// Undone states (nearest first)
    future: VecDeque<Snapshot>,

    /// Maximum entries per stack (0 = history disabled)
    limit: usize,
}

impl History {
    /// Create a history with the default limit (50)
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit,
        }
    }

    /// Record the state as it was right before a structural edit
    pub fn checkpoint(&mut self, snapshot: Snapshot) {
        // New action invalidates the redo path
        self.future.clear();

        self.past.push_back(snapshot);
        self.trim_past();
    }

    /// Step back. Returns the snapshot to restore, or `None` when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop_back()?;

        self.future.push_front(current);
        if self.future.len() > self.limit {
            self.future.truncate(self.limit);
        }

        Some(previous)
    }

    /// Step forward again. Returns the snapshot to restore, or `None` when
    /// there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop_front()?;

        self.past.push_back(current);
        self.trim_past();

        Some(next)
    }

    fn trim_past(&mut self) {
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo levels available
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of redo levels available
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
