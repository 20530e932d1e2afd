//! Header flattening: a `<thead>` with rowspan/colspan → one header row.
//!
//! Header rows are laid out on a grid first, then each column is read
//! top-down and its distinct labels are joined with `" > "`, so a two-row
//! header like
//!
//! ```text
//! |      Group      |
//! |   A    |   B    |
//! ```
//!
//! becomes `["Group > A", "Group > B"]`.

use super::cell::cell_text;
use crate::xml_tree::Element;

/// Separator between the levels of a flattened header.
const LEVEL_SEPARATOR: &str = " > ";

/// Largest span honoured; HTML clamps colspan at the same value.
const MAX_SPAN: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    /// Nothing was placed here.
    Absent,
    /// Covered by a colspan to the left, or padding past the row's end.
    Continuation,
    Text(String),
}

impl Slot {
    fn non_blank(&self) -> Option<&str> {
        match self {
            Slot::Text(t) if !t.trim().is_empty() => Some(t),
            _ => None,
        }
    }
}

/// Transient rows × columns layout of the header cells.
#[derive(Debug)]
struct HeaderGrid {
    slots: Vec<Vec<Slot>>,
    width: usize,
}

impl HeaderGrid {
    /// Place every `<th>` at its row/column position, resolving spans.
    ///
    /// Rows grow only as far as the cells placed on them, so the grid is as
    /// wide as the widest row rather than the sum of all colspans.
    fn build(rows: &[Vec<&Element>]) -> Self {
        let nrows = rows.len();
        let mut slots: Vec<Vec<Slot>> = vec![Vec::new(); nrows];

        for (r, cells) in rows.iter().enumerate() {
            let mut col = 0;
            for th in cells {
                while slots[r].get(col).is_some_and(|slot| *slot != Slot::Absent) {
                    col += 1;
                }

                let text = cell_text(th);
                let rowspan = span(th, "rowspan");
                let colspan = span(th, "colspan");

                for row in &mut slots[r..(r + rowspan).min(nrows)] {
                    if row.len() < col + colspan {
                        row.resize(col + colspan, Slot::Absent);
                    }
                    row[col] = Slot::Text(text.clone());
                    for slot in &mut row[col + 1..col + colspan] {
                        *slot = Slot::Continuation;
                    }
                }

                col += colspan;
            }
        }

        let width = slots.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut slots {
            row.resize(width, Slot::Continuation);
        }

        Self { slots, width }
    }

    /// Collapse each column into one header string.
    fn flatten(&self) -> Vec<String> {
        (0..self.width)
            .map(|col| {
                let mut parts: Vec<&str> = Vec::new();
                for row in &self.slots {
                    let value = match &row[col] {
                        Slot::Absent => None,
                        slot => slot.non_blank().or_else(|| parent_label(row, col)),
                    };
                    if let Some(v) = value {
                        if parts.last() != Some(&v) {
                            parts.push(v);
                        }
                    }
                }
                parts.join(LEVEL_SEPARATOR)
            })
            .collect()
    }
}

/// Nearest non-blank label to the left of `col` in the same row.
fn parent_label(row: &[Slot], col: usize) -> Option<&str> {
    row[..col].iter().rev().find_map(Slot::non_blank)
}

/// Read a span attribute, defaulting to 1.
///
/// Values that are not positive integers are a caller precondition
/// violation; they are treated as 1 rather than aborting the table.
fn span(th: &Element, name: &str) -> usize {
    let Some(raw) = th.attr(name) else {
        return 1;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => n.min(MAX_SPAN),
        _ => {
            log::debug!("{name}={raw:?} is not a positive integer, using 1");
            1
        }
    }
}

/// Flatten a `<thead>` into one header string per final column.
///
/// Returns an empty list when the header has no rows or no cells.
pub fn parse_thead(thead: &Element) -> Vec<String> {
    let rows: Vec<Vec<&Element>> = thead
        .find_all("tr")
        .map(|tr| tr.find_all("th").collect())
        .collect();
    if rows.is_empty() {
        return Vec::new();
    }
    HeaderGrid::build(&rows).flatten()
}
