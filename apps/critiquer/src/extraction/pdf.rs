use lopdf::Document;
use tracing::debug;

use super::ExtractionError;

/// Extracts text page by page, in page order. Each page that yields text is
/// appended followed by a newline; blank or undecodable pages are skipped.
///
/// Only a document that cannot be opened at all is an error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let document = Document::load_mem(bytes).map_err(ExtractionError::Malformed)?;
    let pages = document.get_pages();
    debug!("PDF opened with {} pages", pages.len());

    let mut text = String::new();
    // get_pages() is keyed by 1-based page number, so iteration is in page order
    for page_number in pages.keys().copied() {
        match document.extract_text(&[page_number]) {
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(page_text.trim_end());
                text.push('\n');
            }
            Ok(_) => debug!("Page {page_number} has no extractable text"),
            Err(e) => debug!("Skipping page {page_number}: {e}"),
        }
    }

    Ok(text)
}

/// Builds a minimal PDF with one page per entry; an empty entry produces a page
/// with no text operators.
#[cfg(test)]
pub(crate) fn build_test_pdf(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_text in pages {
        let operations = if page_text.is_empty() {
            vec![]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize test PDF");
    buffer
}
