use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;
use zip::ZipArchive;

use crate::extract::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Largest decompressed `word/document.xml` accepted. Compressed uploads are
/// capped separately, so this bounds the inflation ratio.
pub const MAX_DOCUMENT_XML_BYTES: u64 = 32 * 1024 * 1024;

static PARAGRAPH_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</w:p>").unwrap());
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<w:(?:br|cr)\b[^>]*/>").unwrap());
static TAB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<w:tab\b[^>]*/>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Reads the main document part of a DOCX archive and returns its text, one
/// line per paragraph.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    read_document_part(bytes, MAX_DOCUMENT_XML_BYTES).map(|xml| document_xml_to_text(&xml))
}

fn read_document_part(bytes: &[u8], max_bytes: u64) -> Result<String, ExtractError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Docx(format!("{DOCUMENT_PART}: {e}")))?;

    if part.size() > max_bytes {
        return Err(part_too_large(max_bytes));
    }

    // The declared size can lie; never inflate past the limit.
    let mut raw = Vec::new();
    part.take(max_bytes + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    if raw.len() as u64 > max_bytes {
        return Err(part_too_large(max_bytes));
    }

    String::from_utf8(raw).map_err(|e| ExtractError::Docx(format!("{DOCUMENT_PART}: {e}")))
}

fn part_too_large(max_bytes: u64) -> ExtractError {
    ExtractError::Docx(format!("{DOCUMENT_PART} inflates past {max_bytes} bytes"))
}

/// Strips WordprocessingML markup. Paragraph ends and breaks become newlines,
/// tabs stay tabs, and the five predefined XML entities are decoded.
pub fn document_xml_to_text(xml: &str) -> String {
    let text = PARAGRAPH_END.replace_all(xml, "\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = TAB.replace_all(&text, "\t");
    let text = TAG.replace_all(&text, "");
    decode_entities(&text)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
