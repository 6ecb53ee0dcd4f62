use paperflow_editor::DocumentId;
use std::collections::HashMap;
use std::sync::Arc;

/// Parsed sources keyed by the id of the document they were uploaded as
///
/// Sources are immutable once inserted and shared by `Arc`, so concurrent
/// extractions can read the same source.
#[derive(Debug)]
pub struct SourceLibrary<S> {
    sources: HashMap<DocumentId, Arc<S>>,
}

impl<S> SourceLibrary<S> {
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: DocumentId, source: S) {
        self.sources.insert(id, Arc::new(source));
    }

    pub fn get(&self, id: &DocumentId) -> Option<Arc<S>> {
        self.sources.get(id).cloned()
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.sources.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &DocumentId> {
        self.sources.keys()
    }
}

impl<S> Default for SourceLibrary<S> {
    fn default() -> Self {
        Self::new()
    }
}
