//! Markdown assembly for one [`TableBlock`].
//!
//! Pure formatting: title, GFM pipe table, then the legend. Rows shorter
//! than the header are padded; rows longer than the header are emitted as-is
//! and overflow the table, since source tables are sometimes ragged and
//! dropping cells would lose data.

use super::legend::format_legend;
use super::TableBlock;

/// Unicode characters replaced on every output line.
const UNICODE_REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2009}', " "), // thin space
    ('\u{00A0}', " "), // no-break space
    ('\u{202F}', " "), // narrow no-break space
    ('\u{2002}', " "), // en space
    ('\u{2003}', " "), // em space
    ('\u{200A}', " "), // hair space
    ('\u{200B}', ""),  // zero width space
    ('\u{FEFF}', ""),  // zero width no-break space
];

/// Replace common Unicode spacing with ASCII equivalents.
fn replace_common_unicode(line: &str) -> String {
    UNICODE_REPLACEMENTS
        .iter()
        .fold(line.to_string(), |acc, &(from, to)| {
            if acc.contains(from) {
                acc.replace(from, to)
            } else {
                acc
            }
        })
}

/// Escape pipe characters for markdown table cells.
fn escape_pipe(s: &str) -> String {
    s.replace('|', "\\|")
}

fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<String> = cells.iter().map(|c| escape_pipe(c.as_ref())).collect();
    format!("| {} |", cells.join(" | "))
}

/// Render a table as standalone markdown.
pub fn to_markdown(table: &TableBlock) -> String {
    let mut lines: Vec<String> = Vec::new();
    let (label, caption) = (table.label(), table.caption());

    match (label.is_empty(), caption.is_empty()) {
        (false, false) => lines.push(format!("**{label}: {caption}**\n")),
        (true, false) => lines.push(format!("**{caption}**\n")),
        (false, true) => lines.push(format!("**{label}**\n")),
        (true, true) => {}
    }

    let headers = table.headers();
    if !headers.is_empty() {
        lines.push(table_row(headers));
        lines.push(table_row(&vec!["---"; headers.len()]));
    }

    for row in table.rows() {
        if row.len() < headers.len() {
            let mut padded = row.clone();
            padded.resize(headers.len(), String::new());
            lines.push(table_row(&padded));
        } else {
            lines.push(table_row(row));
        }
    }

    if !table.legend().is_empty() {
        lines.push("\n**Legend:**".to_string());
        lines.push(format_legend(table.legend()));
    }

    lines
        .iter()
        .map(|line| replace_common_unicode(line))
        .collect::<Vec<_>>()
        .join("\n")
}
