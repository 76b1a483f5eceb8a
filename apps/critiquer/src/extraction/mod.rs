//! Extraction: turns an uploaded resume into plain text.
//!
//! PDFs are read page by page with best-effort semantics: a page that yields no
//! text (or fails to decode) contributes nothing. Text uploads are decoded as
//! UTF-8 with undecodable byte sequences dropped.

use bytes::Bytes;
use thiserror::Error;
use tracing::info;

pub mod pdf;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("The uploaded file has no readable content.")]
    NoReadableContent,

    #[error("could not open PDF document: {0}")]
    Malformed(#[source] lopdf::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Text,
}

impl MediaType {
    /// Classifies an upload from its declared content type, falling back to the file
    /// extension when the browser sends something generic.
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Self {
        let declared_pdf = content_type
            .map(|ct| ct.trim().eq_ignore_ascii_case("application/pdf"))
            .unwrap_or(false);
        let named_pdf = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);

        if declared_pdf || named_pdf {
            MediaType::Pdf
        } else {
            MediaType::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Pdf => "pdf",
            MediaType::Text => "text",
        }
    }
}

/// A resume as received from the upload form. Consumed by extraction.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub media_type: MediaType,
    pub content: Bytes,
}

impl UploadedDocument {
    pub fn new(file_name: impl Into<String>, content_type: Option<&str>, content: Bytes) -> Self {
        let file_name = file_name.into();
        let media_type = MediaType::detect(content_type, &file_name);
        Self {
            file_name,
            media_type,
            content,
        }
    }
}

/// Text pulled out of a resume. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: String) -> Result<Self, ExtractionError> {
        if text.trim().is_empty() {
            return Err(ExtractionError::NoReadableContent);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn extract_text(document: UploadedDocument) -> Result<ExtractedText, ExtractionError> {
    info!(
        "Extracting text from {} ({} bytes, {})",
        document.file_name,
        document.content.len(),
        document.media_type.as_str()
    );

    if document.content.is_empty() {
        return Err(ExtractionError::NoReadableContent);
    }

    let text = match document.media_type {
        MediaType::Pdf => pdf::extract_pdf_text(&document.content)?,
        MediaType::Text => decode_utf8_ignoring_invalid(&document.content),
    };

    ExtractedText::new(text)
}

/// Decodes UTF-8, silently dropping invalid byte sequences.
fn decode_utf8_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
