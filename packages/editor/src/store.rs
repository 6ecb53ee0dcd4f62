//! # Workspace Store
//!
//! Owns the current [`WorkspaceState`] and serializes edits through
//! `dispatch`. Taking `&mut self` makes the store the single writer; intent
//! producers hand it one operation at a time.

use crate::{Operation, Outcome, WorkspaceState};

#[derive(Debug, Default)]
pub struct WorkspaceStore {
    state: WorkspaceState,

    /// Increments every time dispatch changes the state
    revision: u64,
}

impl WorkspaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            state: WorkspaceState::with_history_limit(limit),
            revision: 0,
        }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an operation and return the resulting state
    pub fn dispatch(&mut self, operation: Operation) -> &WorkspaceState {
        if self.state.apply(operation) != Outcome::Noop {
            self.revision += 1;
        }
        &self.state
    }

    /// Apply operations in order
    pub fn dispatch_all(&mut self, operations: impl IntoIterator<Item = Operation>) -> &WorkspaceState {
        for operation in operations {
            self.dispatch(operation);
        }
        &self.state
    }
}
