//! # Workspace State
//!
//! The editable page sequence, the registry of uploaded source documents,
//! the selection and the undo/redo history, plus the reducer that moves
//! between states.
//!
//! The first uploaded document names the workspace, and every later upload
//! appends its pages to the same sequence. Each uploaded document stays in
//! the registry so any workspace page can be traced back to its source by
//! `source_document_id`.

use crate::history::{History, Snapshot};
use crate::{Document, DocumentId, Operation, Outcome, Page, PageId, Rotation};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Which pages an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
    #[default]
    All,
    /// Selected pages only, in workspace order
    SelectedOnly,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkspaceState {
    /// Workspace page sequence (display order)
    pages: Vec<Page>,

    /// Uploaded source documents, in upload order
    documents: Vec<Document>,

    selection: BTreeSet<PageId>,

    history: History,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: History::with_limit(limit),
            ..Self::default()
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|page| &page.id == id)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| &doc.id == id)
    }

    /// The first uploaded document, which names the workspace
    pub fn workspace_document(&self) -> Option<&Document> {
        self.documents.first()
    }

    pub fn selection(&self) -> &BTreeSet<PageId> {
        &self.selection
    }

    pub fn is_selected(&self, id: &PageId) -> bool {
        self.selection.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.documents.is_empty()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Pages to hand to the exporter, in workspace order
    pub fn pages_for_export(&self, scope: ExportScope) -> Vec<Page> {
        match scope {
            ExportScope::All => self.pages.clone(),
            ExportScope::SelectedOnly => self
                .pages
                .iter()
                .filter(|page| self.selection.contains(&page.id))
                .cloned()
                .collect(),
        }
    }

    /// Delete everything currently selected, if anything is
    pub fn delete_selected(&self) -> Option<Operation> {
        if self.selection.is_empty() {
            return None;
        }

        Some(Operation::DeletePages {
            page_ids: self.selection.iter().cloned().collect(),
        })
    }

    /// Rotate a page a quarter turn clockwise from its current angle
    pub fn rotate_clockwise(&self, id: &PageId) -> Option<Operation> {
        self.page(id).map(|page| Operation::RotatePage {
            page_id: page.id.clone(),
            rotation: page.rotation.rotated_clockwise(),
        })
    }

    /// Deep copy of everything history restores
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pages: self.pages.clone(),
            documents: self.documents.clone(),
            selection: self.selection.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.pages = snapshot.pages;
        self.documents = snapshot.documents;
        self.selection = snapshot.selection;
    }

    fn checkpoint(&mut self) {
        let snapshot = self.snapshot();
        self.history.checkpoint(snapshot);
    }

    /// Apply one operation in place
    pub fn apply(&mut self, operation: Operation) -> Outcome {
        tracing::debug!(operation = operation.name(), "applying workspace operation");

        match operation {
            Operation::AddDocument { document } => {
                self.checkpoint();
                self.add_document(document);
                Outcome::Applied
            }

            Operation::ReorderPages { page_ids } => {
                self.checkpoint();
                self.reorder_pages(&page_ids);
                Outcome::Applied
            }

            Operation::DeletePages { page_ids } => {
                self.checkpoint();
                self.delete_pages(&page_ids);
                Outcome::Applied
            }

            Operation::RotatePage { page_id, rotation } => {
                self.checkpoint();
                self.rotate_page(&page_id, rotation);
                Outcome::Applied
            }

            Operation::SelectPages { page_ids, append } => {
                if !append {
                    self.selection.clear();
                }
                self.selection.extend(page_ids);
                Outcome::Applied
            }

            Operation::ClearSelection => {
                self.selection.clear();
                Outcome::Applied
            }

            Operation::Undo => {
                let current = self.snapshot();
                match self.history.undo(current) {
                    Some(previous) => {
                        self.restore(previous);
                        Outcome::Applied
                    }
                    None => {
                        tracing::debug!("nothing to undo");
                        Outcome::Noop
                    }
                }
            }

            Operation::Redo => {
                let current = self.snapshot();
                match self.history.redo(current) {
                    Some(next) => {
                        self.restore(next);
                        Outcome::Applied
                    }
                    None => {
                        tracing::debug!("nothing to redo");
                        Outcome::Noop
                    }
                }
            }

            Operation::Reset => {
                *self = Self::with_history_limit(self.history.limit());
                Outcome::Reset
            }
        }
    }

    fn add_document(&mut self, document: Document) {
        let mut live: HashSet<PageId> = self.pages.iter().map(|page| page.id.clone()).collect();

        for page in &document.pages {
            if !live.insert(page.id.clone()) {
                tracing::trace!(page = %page.id, "skipping page already in workspace");
                continue;
            }
            self.pages.push(page.clone());
        }

        self.documents.push(document);
    }

    fn reorder_pages(&mut self, page_ids: &[PageId]) {
        let mut remaining: HashMap<PageId, Page> = self
            .pages
            .iter()
            .map(|page| (page.id.clone(), page.clone()))
            .collect();

        let mut reordered = Vec::with_capacity(self.pages.len());

        // Named pages first; unknown and repeated ids fall out here
        for id in page_ids {
            match remaining.remove(id) {
                Some(page) => reordered.push(page),
                None => tracing::trace!(page = %id, "reorder skipped unknown or repeated id"),
            }
        }

        // Everything not named keeps its prior relative order
        for page in &self.pages {
            if let Some(page) = remaining.remove(&page.id) {
                reordered.push(page);
            }
        }

        self.pages = reordered;
    }

    fn delete_pages(&mut self, page_ids: &[PageId]) {
        let doomed: HashSet<&PageId> = page_ids.iter().collect();

        self.pages.retain(|page| !doomed.contains(&page.id));
        self.selection.retain(|id| !doomed.contains(id));
    }

    fn rotate_page(&mut self, page_id: &PageId, rotation: Rotation) {
        match self.pages.iter_mut().find(|page| &page.id == page_id) {
            Some(page) => page.rotation = rotation,
            None => tracing::trace!(page = %page_id, "rotate skipped unknown id"),
        }
    }
}

/// Pure transition: the state after applying `operation` to `state`
pub fn reduce(mut state: WorkspaceState, operation: Operation) -> WorkspaceState {
    state.apply(operation);
    state
}
