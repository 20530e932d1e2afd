//! Full-text front door: sniff the content format, then route to table or
//! plain-text extraction.
//!
//! Fetching the content (Europe PMC, Unpaywall, CrossRef) happens upstream;
//! this module only sees the bytes that came back.

use std::fmt;

use crate::error::{JatsdocError, Result};
use crate::{jats, pdf, xml_tree};

const PDF_MAGIC: &[u8] = b"%PDF";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Detected full-text content format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JATS XML, as served by PMC and Europe PMC.
    Xml,
    /// PDF document.
    Pdf,
}

impl Format {
    /// Detect the format from the leading bytes, not from any file name.
    pub fn detect(data: &[u8]) -> Result<Self> {
        if data.starts_with(PDF_MAGIC) {
            return Ok(Format::Pdf);
        }
        let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        match body.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'<') => Ok(Format::Xml),
            _ => Err(JatsdocError::Document(
                "not a JATS XML or PDF document".into(),
            )),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Xml => "xml",
            Format::Pdf => "pdf",
        })
    }
}

/// Decode XML bytes, dropping a UTF-8 byte order mark.
fn xml_str(data: &[u8]) -> Result<&str> {
    let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    std::str::from_utf8(body)
        .map_err(|e| JatsdocError::Document(format!("XML is not valid UTF-8: {e}")))
}

/// Extract every table as markdown.
///
/// Only JATS XML carries table structure; PDF input is rejected.
pub fn extract_tables(data: &[u8]) -> Result<Vec<String>> {
    match Format::detect(data)? {
        Format::Xml => jats::extract_tables(xml_str(data)?),
        Format::Pdf => Err(JatsdocError::Unsupported("PDF table extraction")),
    }
}

/// Extract the plain text of an article.
///
/// For XML this is every text node of the document in order, markup
/// dropped. For PDF it is the cleaned text of each page.
pub fn extract_text(data: &[u8]) -> Result<String> {
    match Format::detect(data)? {
        Format::Xml => Ok(xml_tree::parse(xml_str(data)?)?.text()),
        Format::Pdf => pdf::extract_text(data),
    }
}
