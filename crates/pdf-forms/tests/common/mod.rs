#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, Stream};
use pdf_forms::*;

/// Build a document with `num_pages` empty Letter pages
pub fn create_test_pdf(num_pages: usize) -> Document {
    create_test_pdf_sized(num_pages, 612, 792)
}

pub fn create_test_pdf_sized(num_pages: usize, width: i64, height: i64) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            b"0 0 1 rg 10 10 50 50 re f".to_vec(),
        ));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(width),
                    Object::Integer(height),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

pub fn pdf_bytes(doc: &mut Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// A one-page template with a name field, a notes box and a checkbox
pub fn sample_template() -> Template {
    Template::new(vec![Page::new(vec![
        FieldDescriptor::new("name", FieldKind::Text, Rect::new(100.0, 100.0, 150.0, 30.0))
            .required(),
        FieldDescriptor::new(
            "notes",
            FieldKind::MultilineText,
            Rect::new(100.0, 200.0, 300.0, 60.0),
        )
        .with_font_size(10.0),
        FieldDescriptor::new("agree", FieldKind::Boolean, Rect::new(100.0, 300.0, 20.0, 20.0)),
    ])])
}

pub fn sample_record() -> DataRecord {
    DataRecord::from_iter([
        ("name", FieldValue::from("Ada Lovelace")),
        ("notes", FieldValue::from("first line\nsecond line")),
        ("agree", FieldValue::from(true)),
    ])
}
