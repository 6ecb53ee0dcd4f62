//! # Paperflow Composer
//!
//! Turns the current workspace arrangement back into a document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ loader: bytes → Document + parsed source    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ session: WorkspaceStore + SourceLibrary     │
//! └─────────────────────────────────────────────┘
//!                     ↓ pages_for_export
//! ┌─────────────────────────────────────────────┐
//! │ exporter: resolve → extract → serialize     │
//! │  - skips unresolved / unreadable pages      │
//! │  - output order = input order               │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The exporter only talks to a [`DocumentCodec`]. [`PdfCodec`] is the PDF
//! implementation, built on lopdf.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paperflow_composer::{ExportScope, PdfCodec, PdfSession};
//!
//! let mut session = PdfSession::new(PdfCodec);
//! session.open("a.pdf", &std::fs::read("a.pdf")?)?;
//! session.open("b.pdf", &std::fs::read("b.pdf")?)?;
//!
//! let export = session.export(ExportScope::All)?;
//! std::fs::write("merged.pdf", export.bytes)?;
//! ```

mod codec;
mod errors;
mod export;
mod library;
mod loader;
mod pdf;
mod session;
mod thumbnails;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod fixtures;

pub use codec::{DocumentCodec, Parsed};
pub use errors::{CodecError, ExportError, RenderError};
pub use export::{Export, Exporter, SkipReason, SkippedPage};
pub use library::SourceLibrary;
pub use loader::{load_document, load_documents, Loaded};
pub use pdf::{PdfCodec, PdfPage};
pub use session::{PdfSession, Session};
pub use thumbnails::{thumbnail_or_placeholder, PlaceholderRenderer, ThumbnailRenderer};

// Re-export editor types for convenience
pub use paperflow_editor::{ExportScope, Operation, WorkspaceState};
