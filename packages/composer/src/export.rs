//! # Export
//!
//! Rebuilds one output document from an ordered list of workspace pages.
//!
//! Each page is resolved back to its source by `source_document_id` and
//! extracted at `page_number - 1`. A page whose source is gone or whose
//! extraction fails is skipped and reported; the rest of the export carries
//! on. Only an export with nothing left fails as a whole
//! ([`ExportError::EmptyExport`]).
//!
//! The exporter only reads pages and sources. It never touches workspace
//! state, so a failed export leaves the workspace as it was.

use crate::{DocumentCodec, ExportError, SourceLibrary};
use futures::future::join_all;
use paperflow_editor::{Page, PageId};
use std::sync::Arc;
use thiserror::Error;

/// Why a page was left out of an export
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("source document not found")]
    SourceUnresolved,

    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPage {
    pub page_id: PageId,
    pub reason: SkipReason,
}

/// A finished export
#[derive(Debug, Clone)]
pub struct Export {
    /// Output document
    pub bytes: Vec<u8>,

    /// Pages written, in output order
    pub page_ids: Vec<PageId>,

    pub skipped: Vec<SkippedPage>,
}

type Extracted<C> = Result<<C as DocumentCodec>::Page, SkipReason>;

pub struct Exporter<C> {
    codec: Arc<C>,
}

impl<C: DocumentCodec> Exporter<C> {
    pub fn new(codec: C) -> Self {
        Self::from_shared(Arc::new(codec))
    }

    pub fn from_shared(codec: Arc<C>) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Export pages one after another on the calling thread
    pub fn export(
        &self,
        pages: &[Page],
        library: &SourceLibrary<C::Source>,
    ) -> Result<Export, ExportError> {
        let extracted = pages
            .iter()
            .map(|page| {
                let source = library.get(&page.source_document_id);
                extract(&*self.codec, page, source.as_deref())
            })
            .collect();

        assemble(&*self.codec, pages, extracted)
    }

    /// Export with one blocking extraction task per page
    ///
    /// Tasks may finish in any order; results are joined by index so the
    /// output keeps the order of `pages`.
    pub async fn export_concurrent(
        &self,
        pages: &[Page],
        library: &SourceLibrary<C::Source>,
    ) -> Result<Export, ExportError> {
        let tasks = pages.iter().map(|page| {
            let codec = Arc::clone(&self.codec);
            let source = library.get(&page.source_document_id);
            let page = page.clone();

            tokio::task::spawn_blocking(move || extract(&*codec, &page, source.as_deref()))
        });

        // A task that panicked only costs its own page
        let extracted: Vec<Extracted<C>> = join_all(tasks)
            .await
            .into_iter()
            .map(|joined| {
                joined.unwrap_or_else(|e| Err(SkipReason::ExtractionFailed(e.to_string())))
            })
            .collect();

        let codec = Arc::clone(&self.codec);
        let pages = pages.to_vec();
        tokio::task::spawn_blocking(move || assemble(&*codec, &pages, extracted)).await?
    }
}

impl<C> Clone for Exporter<C> {
    fn clone(&self) -> Self {
        Self {
            codec: Arc::clone(&self.codec),
        }
    }
}

fn extract<C: DocumentCodec>(codec: &C, page: &Page, source: Option<&C::Source>) -> Extracted<C> {
    let source = source.ok_or(SkipReason::SourceUnresolved)?;

    let index = page.source_index().ok_or_else(|| {
        SkipReason::ExtractionFailed(format!("invalid page number {}", page.page_number))
    })?;

    codec
        .extract_page(source, index)
        .map_err(|e| SkipReason::ExtractionFailed(e.to_string()))
}

fn assemble<C: DocumentCodec>(
    codec: &C,
    pages: &[Page],
    extracted: Vec<Extracted<C>>,
) -> Result<Export, ExportError> {
    let mut output = Vec::with_capacity(pages.len());
    let mut page_ids = Vec::with_capacity(pages.len());
    let mut skipped = Vec::new();

    for (page, result) in pages.iter().zip(extracted) {
        match result {
            Ok(content) => {
                output.push((content, page.rotation));
                page_ids.push(page.id.clone());
            }
            Err(reason) => {
                tracing::warn!(
                    page = %page.id,
                    source = %page.source_document_id,
                    page_number = page.page_number,
                    %reason,
                    "skipping page in export"
                );
                skipped.push(SkippedPage {
                    page_id: page.id.clone(),
                    reason,
                });
            }
        }
    }

    if output.is_empty() {
        return Err(ExportError::EmptyExport);
    }

    let bytes = codec.serialize(output)?;

    tracing::info!(
        pages = page_ids.len(),
        skipped = skipped.len(),
        bytes = bytes.len(),
        "export complete"
    );

    Ok(Export {
        bytes,
        page_ids,
        skipped,
    })
}
