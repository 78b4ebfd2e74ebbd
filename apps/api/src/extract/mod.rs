//! Document text extraction: PDF and Word uploads to plain Unicode text.

use std::io::Read;

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ALLOWED_MIME_TYPES: &[&str] = &[MIME_PDF, MIME_DOC, MIME_DOCX];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Word extraction failed: {0}")]
    Word(String),

    #[error("unsupported MIME type: {0}")]
    UnsupportedType(String),
}

/// Converts an uploaded document into plain text based on its declared MIME
/// type. The caller enforces size and type limits before invoking this.
pub fn extract_text(bytes: &[u8], mime_type: &str) -> Result<String, ExtractError> {
    match mime_type {
        MIME_PDF => extract_pdf_text(bytes),
        MIME_DOC | MIME_DOCX => extract_word_text(bytes),
        other => Err(ExtractError::UnsupportedType(other.to_string())),
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map(|text| text.trim().to_string())
        .map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Reads `word/document.xml` out of the OOXML container and strips markup,
/// emitting a newline per paragraph. Legacy binary `.doc` files are not a zip
/// archive and fail here with a Word extraction error.
fn extract_word_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| ExtractError::Word(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Word(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Word(e.to_string()))?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let fragment = t.unescape().map_err(|e| ExtractError::Word(e.to_string()))?;
                text.push_str(&fragment);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractError::Word(e.to_string())),
        }
    }

    Ok(text.trim().to_string())
}
