//! PDF text extraction.
//!
//! Uses [`pdf_extract`] to pull text from PDF files. Since `pdf_extract` can
//! panic on malformed input (rather than returning errors), all calls are
//! wrapped in [`std::panic::catch_unwind`] to convert panics into
//! [`JatsdocError::Document`] errors. Page text is then tidied into
//! paragraphs for reading as one article.

use crate::error::{JatsdocError, Result};
use std::panic::{self, AssertUnwindSafe};

/// Extract pages of text from a PDF byte slice, one `String` per page.
fn extract_pages(data: &[u8]) -> Result<Vec<String>> {
    let data = data.to_vec(); // owned copy for the unwind boundary
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&data)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(JatsdocError::Document(format!(
            "PDF extraction failed: {e}"
        ))),
        Err(_) => Err(JatsdocError::Document(
            "PDF extraction panicked (malformed document)".into(),
        )),
    }
}

/// Whether a line is nothing but a printed page number, e.g. `"1234"`.
fn is_page_number(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.len() <= 5 && line.bytes().all(|b| b.is_ascii_digit())
}

/// Clean one page of article text.
///
/// Trailing whitespace and bare page-number lines are dropped, blank runs
/// collapse to a single paragraph break, and leading/trailing blank lines
/// are removed. Returns an empty string for a page with no text.
fn clean_page(raw: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in raw.lines().map(str::trim_end) {
        if is_page_number(line) {
            continue;
        }
        if line.is_empty() && matches!(lines.last(), None | Some(&"")) {
            continue;
        }
        lines.push(line);
    }
    while lines.last() == Some(&"") {
        lines.pop();
    }
    lines.join("\n")
}

/// Extract the plain text of a PDF article.
///
/// Pages are separated by one blank line, like paragraphs. Empty pages are
/// dropped; a document with no text at all (scanned or image-only) is an
/// error.
pub(crate) fn extract_text(data: &[u8]) -> Result<String> {
    let pages = extract_pages(data)?;
    let cleaned: Vec<String> = pages
        .iter()
        .map(|p| clean_page(p))
        .filter(|p| !p.is_empty())
        .collect();

    if cleaned.is_empty() {
        return Err(JatsdocError::Document(
            "PDF contains no extractable text (may be scanned/image-only)".into(),
        ));
    }
    log::debug!("extracted text from {} of {} PDF page(s)", cleaned.len(), pages.len());

    Ok(cleaned.join("\n\n") + "\n")
}
