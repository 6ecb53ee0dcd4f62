//! # Paperflow Editor
//!
//! Workspace state and history engine for Paperflow.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ intents: keyboard, drag/drop, scripts       │
//! └─────────────────────────────────────────────┘
//!                     ↓ Operation
//! ┌─────────────────────────────────────────────┐
//! │ editor: WorkspaceState + reducer            │
//! │  - Checkpoint before structural edits       │
//! │  - Bounded snapshot undo/redo (50 levels)   │
//! │  - Source registry keyed by document id     │
//! └─────────────────────────────────────────────┘
//!                     ↓ pages_for_export
//! ┌─────────────────────────────────────────────┐
//! │ composer: source pages → output document    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Pages are references**: a page is a source document id plus the
//!    original page number; reordering never touches either
//! 2. **Snapshots, not inverses**: undo restores a stored copy, so no edit
//!    needs an inverse
//! 3. **Stale ids are skipped**: no operation fails because one id is gone
//! 4. **Selection is free**: selecting never consumes undo history
//!
//! ## Usage
//!
//! ```rust
//! use paperflow_editor::{Document, Operation, Rotation, WorkspaceStore};
//!
//! let mut store = WorkspaceStore::new();
//! store.dispatch(Operation::AddDocument {
//!     document: Document::with_page_count("doc-1".into(), "report.pdf", 3),
//! });
//! store.dispatch(Operation::RotatePage {
//!     page_id: "doc-1-page-1".into(),
//!     rotation: Rotation::Deg90,
//! });
//! store.dispatch(Operation::Undo);
//!
//! assert_eq!(store.state().pages()[1].rotation, Rotation::Deg0);
//! ```

mod document;
mod errors;
mod history;
mod ids;
mod operations;
mod page;
mod state;
mod store;

pub use document::Document;
pub use errors::EditorError;
pub use history::{History, Snapshot, DEFAULT_HISTORY_LIMIT};
pub use ids::{DocumentId, IdGenerator, PageId};
pub use operations::{Operation, Outcome};
pub use page::{Page, Rotation, Thumbnail};
pub use state::{reduce, ExportScope, WorkspaceState};
pub use store::WorkspaceStore;
