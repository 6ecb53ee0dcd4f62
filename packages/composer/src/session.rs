//! # Editing Session
//!
//! Ties the workspace store to the parsed sources its pages come from.
//!
//! Opening a file parses it, keeps the parsed source in the library under
//! the new document id and dispatches `AddDocument`. Exports read the pages
//! for the requested scope and resolve them against the library.

use crate::export::{Export, Exporter};
use crate::loader::load_document;
use crate::thumbnails::{PlaceholderRenderer, ThumbnailRenderer};
use crate::{CodecError, DocumentCodec, ExportError, PdfCodec, SourceLibrary};
use paperflow_editor::{
    DocumentId, ExportScope, IdGenerator, Operation, WorkspaceState, WorkspaceStore,
    DEFAULT_HISTORY_LIMIT,
};

pub type PdfSession = Session<PdfCodec>;

pub struct Session<C: DocumentCodec> {
    store: WorkspaceStore,
    library: SourceLibrary<C::Source>,
    exporter: Exporter<C>,
    renderer: Box<dyn ThumbnailRenderer<C::Source>>,
    ids: IdGenerator,
}

impl<C: DocumentCodec> Session<C> {
    pub fn new(codec: C) -> Self {
        Self::with_history_limit(codec, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_history_limit(codec: C, limit: usize) -> Self {
        Self {
            store: WorkspaceStore::with_history_limit(limit),
            library: SourceLibrary::new(),
            exporter: Exporter::new(codec),
            renderer: Box::new(PlaceholderRenderer),
            ids: IdGenerator::new(),
        }
    }

    /// Use `renderer` for previews of documents opened from now on
    pub fn with_renderer(mut self, renderer: impl ThumbnailRenderer<C::Source> + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Parse a file and add it to the workspace
    pub fn open(&mut self, name: &str, bytes: &[u8]) -> Result<DocumentId, CodecError> {
        let loaded = load_document(
            self.exporter.codec(),
            self.renderer.as_ref(),
            &mut self.ids,
            name,
            bytes,
        )?;

        let id = loaded.document.id.clone();
        self.library.insert(id.clone(), loaded.source);
        self.store.dispatch(Operation::AddDocument {
            document: loaded.document,
        });

        Ok(id)
    }

    pub fn dispatch(&mut self, operation: Operation) -> &WorkspaceState {
        if matches!(operation, Operation::Reset) {
            self.library = SourceLibrary::new();
        }
        self.store.dispatch(operation)
    }

    pub fn state(&self) -> &WorkspaceState {
        self.store.state()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn library(&self) -> &SourceLibrary<C::Source> {
        &self.library
    }

    pub fn export(&self, scope: ExportScope) -> Result<Export, ExportError> {
        let pages = self.state().pages_for_export(scope);
        self.exporter.export(&pages, &self.library)
    }

    pub async fn export_concurrent(&self, scope: ExportScope) -> Result<Export, ExportError> {
        let pages = self.state().pages_for_export(scope);
        self.exporter.export_concurrent(&pages, &self.library).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{labelled_pdf, page_contents};

    #[test]
    fn test_open_registers_source_and_pages() {
        let mut session = PdfSession::new(PdfCodec);
        let id = session.open("a.pdf", &labelled_pdf(&["a1", "a2"], &[])).unwrap();

        assert!(session.library().contains(&id));
        assert_eq!(session.state().pages().len(), 2);
        assert_eq!(session.revision(), 1);
    }

    #[test]
    fn test_open_garbage_leaves_state_alone() {
        let mut session = PdfSession::new(PdfCodec);
        assert!(session.open("bad.pdf", b"%PDF-garbage").is_err());
        assert!(session.state().is_empty());
        assert!(session.library().is_empty());
    }

    #[test]
    fn test_selected_only_with_empty_selection() {
        let mut session = PdfSession::new(PdfCodec);
        session.open("a.pdf", &labelled_pdf(&["a1"], &[])).unwrap();
        let before = session.state().clone();

        let result = session.export(ExportScope::SelectedOnly);
        assert!(matches!(result, Err(ExportError::EmptyExport)));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_reset_drops_sources() {
        let mut session = PdfSession::new(PdfCodec);
        session.open("a.pdf", &labelled_pdf(&["a1"], &[])).unwrap();
        session.dispatch(Operation::Reset);

        assert!(session.library().is_empty());
        assert!(session.state().is_empty());

        // Ids keep counting after a reset
        let id = session.open("b.pdf", &labelled_pdf(&["b1"], &[])).unwrap();
        assert_eq!(id.as_str(), "doc-2");
    }

    #[test]
    fn test_export_after_undo_of_delete() {
        let mut session = PdfSession::new(PdfCodec);
        session.open("a.pdf", &labelled_pdf(&["first", "second"], &[])).unwrap();

        session.dispatch(Operation::DeletePages {
            page_ids: vec!["doc-1-page-0".into()],
        });
        let export = session.export(ExportScope::All).unwrap();
        assert_eq!(page_contents(&export.bytes).len(), 1);

        session.dispatch(Operation::Undo);
        let export = session.export(ExportScope::All).unwrap();
        let contents = page_contents(&export.bytes);
        assert_eq!(contents.len(), 2);
        assert!(contents[0].contains("first"));
    }
}
