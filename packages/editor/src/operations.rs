//! # Workspace Operations
//!
//! The complete set of edits the workspace understands. Intent producers
//! (keyboard, drag and drop, scripts) emit these; the reducer in
//! [`crate::state`] interprets them.
//!
//! ## Semantics
//!
//! ### Structural edits
//! AddDocument, ReorderPages, DeletePages and RotatePage checkpoint history
//! before mutating, so each is one undo step.
//!
//! ### Selection
//! SelectPages and ClearSelection never touch history.
//!
//! ### Stale references
//! Ids that no longer exist are skipped; the rest of the operation still
//! applies. No operation fails.

use crate::{Document, PageId, Rotation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// Register a source document and append its pages to the workspace
    AddDocument { document: Document },

    /// Move the named pages to the front, in the given order
    #[serde(rename_all = "camelCase")]
    ReorderPages { page_ids: Vec<PageId> },

    #[serde(rename_all = "camelCase")]
    DeletePages { page_ids: Vec<PageId> },

    /// Set the absolute rotation of one page
    #[serde(rename_all = "camelCase")]
    RotatePage { page_id: PageId, rotation: Rotation },

    #[serde(rename_all = "camelCase")]
    SelectPages {
        page_ids: Vec<PageId>,
        #[serde(default)]
        append: bool,
    },

    ClearSelection,

    Undo,

    Redo,

    /// Discard everything, history included
    Reset,
}

impl Operation {
    /// Whether the operation consumes an undo level
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Operation::AddDocument { .. }
                | Operation::ReorderPages { .. }
                | Operation::DeletePages { .. }
                | Operation::RotatePage { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddDocument { .. } => "add_document",
            Operation::ReorderPages { .. } => "reorder_pages",
            Operation::DeletePages { .. } => "delete_pages",
            Operation::RotatePage { .. } => "rotate_page",
            Operation::SelectPages { .. } => "select_pages",
            Operation::ClearSelection => "clear_selection",
            Operation::Undo => "undo",
            Operation::Redo => "redo",
            Operation::Reset => "reset",
        }
    }
}

/// What an applied operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Undo/redo with an empty stack
    Noop,
    Reset,
}
