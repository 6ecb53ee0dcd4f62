//! Error types for the composer

use thiserror::Error;

/// Failures reported by a document codec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Page index {index} out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Thumbnail render failed: {0}")]
pub struct RenderError(pub String);

#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing survived to be exported
    #[error("Nothing to export")]
    EmptyExport,

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for ExportError {
    fn from(e: tokio::task::JoinError) -> Self {
        ExportError::Task(e.to_string())
    }
}
