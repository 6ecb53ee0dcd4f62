use crate::CodecError;
use paperflow_editor::Rotation;

/// Result of parsing one uploaded file
#[derive(Debug, Clone)]
pub struct Parsed<S> {
    pub source: S,
    pub page_count: usize,
}

/// Contract between the composer and a concrete paged-document format
///
/// The codec turns bytes into a page-addressable source, lifts single pages
/// out of a source, and writes a list of pages back out as one document.
/// Sources are shared read-only across extractions.
pub trait DocumentCodec: Send + Sync + 'static {
    /// Parsed document content
    type Source: Send + Sync + 'static;

    /// One page lifted out of a source, ready to be written
    type Page: Send + 'static;

    fn parse(&self, bytes: &[u8]) -> Result<Parsed<Self::Source>, CodecError>;

    /// Extract the page at zero-based `index`
    fn extract_page(&self, source: &Self::Source, index: usize) -> Result<Self::Page, CodecError>;

    /// Write pages, in order, as one document. A non-zero rotation replaces
    /// the page's own rotation; zero keeps it.
    fn serialize(&self, pages: Vec<(Self::Page, Rotation)>) -> Result<Vec<u8>, CodecError>;
}
