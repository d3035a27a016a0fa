#![allow(dead_code)]

use lopdf::{dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

/// Build a PDF where page `i` shows `texts[i]`; an empty string makes an
/// image-only-style page with no text operators.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    let mut doc = build(texts);
    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// A one-page PDF whose trailer declares standard-handler encryption.
pub fn encrypted_pdf() -> Vec<u8> {
    let mut doc = build(&["secret"]);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => Object::Integer(1),
        "R" => Object::Integer(2),
        "Length" => Object::Integer(40),
        "P" => Object::Integer(-44),
        "O" => Object::string_literal(vec![0x11u8; 32]),
        "U" => Object::string_literal(vec![0x22u8; 32]),
    });
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(vec![0x33u8; 16]),
            Object::string_literal(vec![0x33u8; 16]),
        ],
    );

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn build(texts: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for text in texts {
        let content = if text.is_empty() {
            Vec::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET").into_bytes()
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(texts.len() as i64),
    });

    for &page_id in &page_ids {
        if let Ok(dict) = doc.get_object_mut(page_id).and_then(|o| o.as_dict_mut()) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}
