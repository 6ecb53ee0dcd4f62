//! # PDF Codec
//!
//! [`DocumentCodec`] over lopdf.
//!
//! Extraction lifts one page out of a parsed source together with every
//! object it needs (content streams, resources, fonts, images,
//! annotations). Attributes a page inherits from the page tree are copied
//! onto the page itself, since the page will sit under a new tree.
//! References into other pages of the source are not followed; when the
//! page is written they become `null`.

use crate::{CodecError, DocumentCodec, Parsed};
use lopdf::{Dictionary, Document, Object, ObjectId};
use paperflow_editor::Rotation;
use std::collections::{BTreeMap, HashMap};

/// Page attributes a page may inherit from its ancestors
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `Parent` chains in broken files
const MAX_TREE_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfCodec;

impl PdfCodec {
    pub fn new() -> Self {
        Self
    }
}

/// One page lifted out of a source document
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Id of the page object in its source
    source_id: ObjectId,

    /// Page dictionary, inherited attributes resolved, without `Parent`
    dictionary: Dictionary,

    /// Objects reachable from the page, keyed by source id
    objects: BTreeMap<ObjectId, Object>,
}

impl PdfPage {
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl DocumentCodec for PdfCodec {
    type Source = Document;
    type Page = PdfPage;

    fn parse(&self, bytes: &[u8]) -> Result<Parsed<Document>, CodecError> {
        let document = Document::load_mem(bytes).map_err(|e| CodecError::Parse(e.to_string()))?;
        let page_count = document.get_pages().len();

        Ok(Parsed {
            source: document,
            page_count,
        })
    }

    fn extract_page(&self, source: &Document, index: usize) -> Result<PdfPage, CodecError> {
        let pages = source.get_pages();
        let page_count = pages.len();

        let source_id = pages
            .values()
            .nth(index)
            .copied()
            .ok_or(CodecError::PageOutOfRange { index, page_count })?;

        let mut dictionary = source
            .get_dictionary(source_id)
            .map_err(|e| CodecError::Malformed(format!("page {}: {}", index, e)))?
            .clone();

        for key in INHERITABLE {
            if dictionary.has(key) {
                continue;
            }
            if let Some(value) = inherited_attribute(source, &dictionary, key) {
                dictionary.set(key.to_vec(), value);
            }
        }
        dictionary.remove(b"Parent");

        let mut pending = Vec::new();
        for (_, value) in dictionary.iter() {
            collect_references(value, &mut pending);
        }

        let mut objects = BTreeMap::new();
        while let Some(id) = pending.pop() {
            if id == source_id || objects.contains_key(&id) {
                continue;
            }

            let object = match source.get_object(id) {
                Ok(object) => object,
                Err(_) => {
                    tracing::trace!(?id, "page references a missing object");
                    continue;
                }
            };

            if is_page_tree_node(object) {
                continue;
            }

            collect_references(object, &mut pending);
            objects.insert(id, object.clone());
        }

        Ok(PdfPage {
            source_id,
            dictionary,
            objects,
        })
    }

    fn serialize(&self, pages: Vec<(PdfPage, Rotation)>) -> Result<Vec<u8>, CodecError> {
        if pages.is_empty() {
            return Err(CodecError::Serialize("no pages to write".to_string()));
        }

        let mut output = Document::with_version("1.5");
        let pages_id = output.new_object_id();
        let mut kids = Vec::with_capacity(pages.len());

        for (page, rotation) in pages {
            let PdfPage {
                source_id,
                mut dictionary,
                objects,
            } = page;

            let page_id = output.new_object_id();
            let mut renumbered = HashMap::with_capacity(objects.len() + 1);
            renumbered.insert(source_id, page_id);
            for id in objects.keys() {
                renumbered.insert(*id, output.new_object_id());
            }

            for (id, mut object) in objects {
                rewrite_references(&mut object, &renumbered);
                if let Some(new_id) = renumbered.get(&id) {
                    output.objects.insert(*new_id, object);
                }
            }

            for (_, value) in dictionary.iter_mut() {
                rewrite_references(value, &renumbered);
            }
            dictionary.set("Parent", Object::Reference(pages_id));
            if !rotation.is_zero() {
                dictionary.set("Rotate", Object::Integer(rotation.degrees()));
            }

            output.objects.insert(page_id, Object::Dictionary(dictionary));
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        let pages_dict = Dictionary::from_iter([
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
        ]);
        output.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = output.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        output.trailer.set("Root", Object::Reference(catalog_id));

        output.compress();

        let mut bytes = Vec::new();
        output
            .save_to(&mut bytes)
            .map_err(|e| CodecError::Serialize(e.to_string()))?;

        Ok(bytes)
    }
}

fn inherited_attribute(source: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    for _ in 0..MAX_TREE_DEPTH {
        let node = source.get_dictionary(parent?).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    None
}

fn is_page_tree_node(object: &Object) -> bool {
    matches!(object.type_name().unwrap_or(""), "Page" | "Pages")
}

fn collect_references(object: &Object, pending: &mut Vec<ObjectId>) {
    match object {
        Object::Reference(id) => pending.push(*id),
        Object::Array(items) => {
            for item in items {
                collect_references(item, pending);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                collect_references(value, pending);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter() {
                collect_references(value, pending);
            }
        }
        _ => {}
    }
}

fn rewrite_references(object: &mut Object, renumbered: &HashMap<ObjectId, ObjectId>) {
    match object {
        Object::Reference(id) => {
            let replacement = renumbered
                .get(id)
                .map_or(Object::Null, |new_id| Object::Reference(*new_id));
            *object = replacement;
        }
        Object::Array(items) => {
            for item in items.iter_mut() {
                rewrite_references(item, renumbered);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter_mut() {
                rewrite_references(value, renumbered);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter_mut() {
                rewrite_references(value, renumbered);
            }
        }
        _ => {}
    }
}
