//! Table legend (`<table-wrap-foot>`) → bulleted list.
//!
//! Publishers flatten footnotes in two incompatible ways once the markup is
//! stripped:
//!
//! 1. Semicolon-separated: `"aText for a;bText for b;cText for c"`
//! 2. Inline markers: `"aText for a.bText for b.cText for c."`
//!
//! The inline form is recognised by its shape (a lowercase marker glued to a
//! capitalised sentence) and only trusted when it occurs more than twice;
//! everything else goes through the semicolon splitter.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// One- or two-letter lowercase marker glued to the footnote text.
    static ref MARKER_PREFIX: Regex = Regex::new(r"^([a-z]{1,2})(.+)$").unwrap();
    /// Lowercase marker, capitalised text up to `.` + the next marker, or the
    /// end of input (optionally before one final newline). Never spans lines.
    static ref INLINE_ENTRY: Regex =
        Regex::new(r"([a-z])([A-Z][^\n]*?)(?:\.\s*[a-z][A-Z]|\n?\z)").unwrap();
}

/// Minimum number of inline matches (exclusive) before the inline form wins.
const INLINE_THRESHOLD: usize = 2;

/// One footnote: an optional marker and its explanatory text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub marker: Option<String>,
    pub text: String,
}

impl fmt::Display for LegendEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.marker {
            Some(marker) => write!(f, "- {marker}: {}", self.text),
            None => write!(f, "- {}", self.text),
        }
    }
}

/// Format raw legend text as one `- marker: text` bullet per footnote.
///
/// Falls back to the raw text when no bullet can be produced.
pub fn format_legend(legend: &str) -> String {
    let entries = parse_legend(legend);
    if entries.is_empty() {
        return legend.to_string();
    }
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split raw legend text into entries, picking the encoding heuristically.
pub fn parse_legend(legend: &str) -> Vec<LegendEntry> {
    let inline = inline_matches(legend);
    if inline.len() > INLINE_THRESHOLD {
        let entries: Vec<LegendEntry> = inline
            .into_iter()
            .filter_map(|(marker, text)| {
                let text = text.trim().trim_end_matches('.');
                (!text.is_empty()).then(|| LegendEntry {
                    marker: Some(marker.to_string()),
                    text: text.to_string(),
                })
            })
            .collect();
        if !entries.is_empty() {
            log::debug!("legend uses inline markers ({} entries)", entries.len());
            return entries;
        }
    }

    legend
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match MARKER_PREFIX.captures(part) {
            Some(caps) => LegendEntry {
                marker: Some(caps[1].to_string()),
                text: caps[2].trim().to_string(),
            },
            None => LegendEntry {
                marker: None,
                text: part.to_string(),
            },
        })
        .collect()
}

/// Find inline footnotes as `(marker, text)` pairs; the text keeps any
/// trailing period.
///
/// Each search resumes where the previous text ended, so the `.` + next
/// marker that closed one entry is scanned again as the start of the next.
fn inline_matches(legend: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(caps) = INLINE_ENTRY.captures_at(legend, pos) {
        let (Some(marker), Some(text)) = (caps.get(1), caps.get(2)) else {
            break;
        };
        out.push((marker.as_str(), text.as_str()));
        pos = text.end();
    }
    out
}
