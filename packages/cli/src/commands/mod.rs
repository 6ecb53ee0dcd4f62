pub mod compose;
pub mod init;
pub mod inspect;

pub use compose::{compose, ComposeArgs};
pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};

use anyhow::{Context, Result};
use paperflow_composer::{PdfCodec, PdfSession};
use std::path::{Path, PathBuf};

/// Open every file, in order, into a fresh session
pub(crate) fn open_session(files: &[PathBuf], cwd: &str, history_limit: usize) -> Result<PdfSession> {
    let mut session = PdfSession::with_history_limit(PdfCodec, history_limit);

    for file in files {
        let path = Path::new(cwd).join(file);
        let bytes =
            std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        let name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());

        let id = session
            .open(&name, &bytes)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        tracing::info!(document = %id, file = %path.display(), "opened");
    }

    Ok(session)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{Dictionary, Document, Object, Stream};
    use std::path::{Path, PathBuf};

    /// Write a PDF with one text page per label into `dir`
    pub fn write_pdf(dir: &Path, name: &str, labels: &[&str]) -> PathBuf {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut kids = vec![];
        for label in labels {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tj", vec![Object::string_literal(*label)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));
            let page_id = doc.add_object(Dictionary::from_iter([
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                ("Contents", Object::Reference(content_id)),
                (
                    "MediaBox",
                    Object::Array(vec![0.into(), 0.into(), 612.into(), 792.into()]),
                ),
            ]));
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter([
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Kids", Object::Array(kids)),
                ("Count", Object::Integer(count)),
            ])),
        );
        let catalog_id = doc.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let path = dir.join(name);
        doc.save(&path).unwrap();
        path
    }

    /// Page count and per-page /Rotate of a written PDF
    pub fn read_rotations(path: &Path) -> Vec<i64> {
        let doc = Document::load(path).unwrap();
        doc.get_pages()
            .values()
            .map(|id| {
                doc.get_dictionary(*id)
                    .unwrap()
                    .get(b"Rotate")
                    .and_then(Object::as_i64)
                    .unwrap_or(0)
            })
            .collect()
    }
}
