//! # Source Documents
//!
//! A Document is one uploaded source unit. It keeps the pages it was
//! uploaded with for bookkeeping; editing happens on the workspace page
//! sequence held by [`crate::WorkspaceState`].
//!
//! The parsed binary content is not stored here. The document `id` is the
//! key under which the composer keeps the parsed source, so the model stays
//! plain data.

use crate::{DocumentId, IdGenerator, Page};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,

    /// Display label (usually the uploaded file name)
    pub name: String,

    /// Pages as uploaded, in source order
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(id: DocumentId, name: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            id,
            name: name.into(),
            pages,
        }
    }

    /// Document with `page_count` fresh pages numbered `1..=page_count`
    pub fn with_page_count(id: DocumentId, name: impl Into<String>, page_count: u32) -> Self {
        let pages = (0..page_count)
            .map(|index| {
                Page::new(
                    IdGenerator::page_id(&id, index as usize),
                    id.clone(),
                    index + 1,
                )
            })
            .collect();

        Self::new(id, name, pages)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
