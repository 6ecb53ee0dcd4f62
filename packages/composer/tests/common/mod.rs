//! PDF builders and readers shared by unit and integration tests
#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};

/// PDF with one page per label. MediaBox and Resources live on the page
/// tree so extraction has to resolve inheritance. `rotate` sets a page's
/// own `/Rotate`.
pub fn labelled_pdf(labels: &[&str], rotate: &[(usize, i64)]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let page_tree_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter([
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));
    let resources_id = doc.add_object(Dictionary::from_iter([(
        "Font",
        Object::Dictionary(Dictionary::from_iter([("F1", Object::Reference(font_id))])),
    )]));

    let mut kids = vec![];
    for (index, label) in labels.iter().enumerate() {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*label)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

        let mut page = Dictionary::from_iter([
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(page_tree_id)),
            ("Contents", Object::Reference(content_id)),
        ]);
        if let Some((_, degrees)) = rotate.iter().find(|(i, _)| *i == index) {
            page.set("Rotate", Object::Integer(*degrees));
        }
        kids.push(Object::Reference(doc.add_object(page)));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        page_tree_id,
        Object::Dictionary(Dictionary::from_iter([
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
            ("Resources", Object::Reference(resources_id)),
            (
                "MediaBox",
                Object::Array(vec![0.into(), 0.into(), 612.into(), 792.into()]),
            ),
        ])),
    );

    let catalog_id = doc.add_object(Dictionary::from_iter([
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(page_tree_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut output = Vec::new();
    doc.save_to(&mut output).unwrap();
    output
}

/// Text content of every page, in page order
pub fn page_contents(bytes: &[u8]) -> Vec<String> {
    describe(bytes).into_iter().map(|(content, _)| content).collect()
}

/// `/Rotate` of every page, in page order (0 when absent)
pub fn page_rotations(bytes: &[u8]) -> Vec<i64> {
    describe(bytes).into_iter().map(|(_, rotate)| rotate).collect()
}

/// (content text, /Rotate) for every page of an output document
pub fn describe(bytes: &[u8]) -> Vec<(String, i64)> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|id| {
            let content = String::from_utf8_lossy(&doc.get_page_content(*id).unwrap()).into_owned();
            let rotate = doc
                .get_dictionary(*id)
                .unwrap()
                .get(b"Rotate")
                .and_then(Object::as_i64)
                .unwrap_or(0);
            (content, rotate)
        })
        .collect()
}

/// Does the page description contain the given label as a text operand
pub fn shows(page: &(String, i64), label: &str) -> bool {
    page.0.contains(&format!("({})", label))
}
