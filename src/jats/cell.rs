//! Cell text extraction for `<th>` and `<td>` mixed content.
//!
//! Decisions are made on XML structure, not on the look of the text:
//!
//! - `<xref>` → citation cross-reference, removed
//! - `<sup><xref>25</xref></sup>` → citation wrapper, removed
//! - `<sup>a</sup>` → footnote marker, kept as `" a"`
//! - `<sup>3</sup>`, `<sup>−1</sup>` → exponent, `^3`
//! - `<sub>f</sub>` → subscript, `_f`
//!
//! Tail text after a removed element is always kept.

use crate::xml_tree::{Element, Node};

/// Local name of the JATS cross-reference element.
const XREF: &str = "xref";

/// What a `<sup>` or `<sub>` element stands for inside a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptKind {
    /// Wraps a citation cross-reference; dropped from the output.
    Citation,
    /// Short alphabetic marker keying into the table legend.
    FootnoteMarker(String),
    /// Exponent or subscript text, trimmed.
    Script(String),
    /// No text at all.
    Empty,
}

/// Classify a `<sup>`/`<sub>` element.
///
/// A footnote marker is one or two alphabetic characters. Mixed content such
/// as `a1` is not a marker and is rendered as a script.
pub fn classify_script(elem: &Element) -> ScriptKind {
    if elem.find(XREF).is_some() {
        return ScriptKind::Citation;
    }

    let text = elem.text();
    let text = text.trim();
    if text.is_empty() {
        ScriptKind::Empty
    } else if text.chars().count() <= 2 && text.chars().all(char::is_alphabetic) {
        ScriptKind::FootnoteMarker(text.to_string())
    } else {
        ScriptKind::Script(text.to_string())
    }
}

/// Extract the normalized text of a table cell.
///
/// Whitespace runs (Unicode spaces, newlines, and tabs) collapse to a single
/// space and the result is trimmed. Zero-width characters are left for the
/// renderer.
pub fn cell_text(elem: &Element) -> String {
    let mut parts = String::new();

    for child in &elem.children {
        match child {
            Node::Text(t) => parts.push_str(t),
            Node::Element(e) if e.name == XREF => {}
            Node::Element(e) if e.name == "sup" || e.name == "sub" => match classify_script(e) {
                ScriptKind::Citation => {}
                ScriptKind::FootnoteMarker(marker) => {
                    parts.push(' ');
                    parts.push_str(&marker);
                }
                ScriptKind::Script(text) => {
                    parts.push(if e.name == "sup" { '^' } else { '_' });
                    parts.push_str(&text);
                }
                ScriptKind::Empty => parts.push_str(&cell_text(e)),
            },
            Node::Element(e) => parts.push_str(&cell_text(e)),
        }
    }

    collapse_whitespace(&parts)
}

/// Collapse every whitespace run into one ASCII space and trim the ends.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
