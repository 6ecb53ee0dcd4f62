use crate::thumbnails::{thumbnail_or_placeholder, ThumbnailRenderer};
use crate::{CodecError, DocumentCodec};
use paperflow_editor::{Document, IdGenerator, Page};

/// A parsed upload: the model document plus the source it refers to
#[derive(Debug)]
pub struct Loaded<S> {
    pub document: Document,
    pub source: S,
}

/// Parse one file into a document with fresh ids
///
/// Pages are numbered `1..=page_count`, unrotated, each with a preview (or
/// the placeholder when rendering fails).
pub fn load_document<C, R>(
    codec: &C,
    renderer: &R,
    ids: &mut IdGenerator,
    name: &str,
    bytes: &[u8],
) -> Result<Loaded<C::Source>, CodecError>
where
    C: DocumentCodec,
    R: ThumbnailRenderer<C::Source> + ?Sized,
{
    let parsed = codec.parse(bytes)?;
    let id = ids.next_document_id();

    let pages = (0..parsed.page_count)
        .map(|index| {
            Page::new(
                IdGenerator::page_id(&id, index),
                id.clone(),
                (index + 1) as u32,
            )
            .with_thumbnail(thumbnail_or_placeholder(renderer, &parsed.source, index))
        })
        .collect();

    tracing::debug!(document = %id, name, page_count = parsed.page_count, "loaded document");

    Ok(Loaded {
        document: Document::new(id, name, pages),
        source: parsed.source,
    })
}

/// Load several files in order. Stops at the first file that fails to parse.
pub fn load_documents<C, R>(
    codec: &C,
    renderer: &R,
    ids: &mut IdGenerator,
    files: &[(String, Vec<u8>)],
) -> Result<Vec<Loaded<C::Source>>, CodecError>
where
    C: DocumentCodec,
    R: ThumbnailRenderer<C::Source> + ?Sized,
{
    files
        .iter()
        .map(|(name, bytes)| load_document(codec, renderer, ids, name, bytes))
        .collect()
}
