//! Document-to-text extraction for uploaded resumes.
//!
//! `AppState` holds an `Arc<dyn DocumentExtractor>`; the default
//! `LocalExtractor` handles PDF via `pdf-extract` and DOCX by reading
//! `word/document.xml` out of the zip container. Extraction is CPU-bound and
//! runs on the blocking pool.

pub mod docx;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MSWORD_MIME: &str = "application/msword";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document type '{0}'")]
    UnsupportedFormat(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("extracted text is too short ({found} non-whitespace characters, need {min})")]
    TooShort { found: usize, min: usize },

    #[error("{0}")]
    Worker(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    /// Both DOCX and the legacy Word MIME type; a legacy binary `.doc` fails
    /// as an unreadable container.
    Word,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME => Some(DocumentKind::Pdf),
            DOCX_MIME | MSWORD_MIME => Some(DocumentKind::Word),
            _ => None,
        }
    }
}

/// Turns an uploaded document into plain text.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, bytes: Bytes, mime: &str) -> Result<String, ExtractError>;
}

pub struct LocalExtractor;

#[async_trait]
impl DocumentExtractor for LocalExtractor {
    async fn extract(&self, bytes: Bytes, mime: &str) -> Result<String, ExtractError> {
        let kind = DocumentKind::from_mime(mime)
            .ok_or_else(|| ExtractError::UnsupportedFormat(mime.to_string()))?;

        tokio::task::spawn_blocking(move || extract_blocking(kind, &bytes))
            .await
            .map_err(|e| ExtractError::Worker(e.to_string()))?
    }
}

fn extract_blocking(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        DocumentKind::Word => docx::extract_docx_text(bytes),
    }
}

/// Rejects text with fewer than `min_chars` non-whitespace characters.
/// Callers check this before scoring.
pub fn ensure_scorable(text: &str, min_chars: usize) -> Result<(), ExtractError> {
    let found = text.chars().filter(|c| !c.is_whitespace()).count();
    if found < min_chars {
        return Err(ExtractError::TooShort {
            found,
            min: min_chars,
        });
    }
    Ok(())
}
