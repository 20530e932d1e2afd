//! JATS `<table-wrap>` extraction to markdown.
//!
//! Parses the article with [`xml_tree`](crate::xml_tree), walks every
//! `<table-wrap>` in document order and turns it into a [`TableBlock`]:
//! label, caption and footnotes from the wrap, flattened headers from
//! `<thead>` ([`thead`]), rows from `<tbody>` ([`tbody`]), cell text via
//! [`cell`]. Each block renders to standalone GFM markdown ([`render`]).
//!
//! PMC and Europe PMC normalize to JATS. Elsevier, Springer, and Wiley
//! full text might not, and yields no tables here.

pub mod cell;
pub mod legend;
pub mod render;
pub mod tbody;
pub mod thead;

pub use cell::{cell_text, classify_script, ScriptKind};
pub use legend::{format_legend, parse_legend, LegendEntry};
pub use render::to_markdown;
pub use tbody::parse_tbody;
pub use thead::parse_thead;

use crate::error::Result;
use crate::xml_tree::{self, Element};

/// One extracted table, ready to render.
///
/// Rows shorter than the header are padded with empty cells at
/// construction; longer rows are kept whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableBlock {
    label: String,
    caption: String,
    legend: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBlock {
    pub fn new(
        label: String,
        caption: String,
        legend: String,
        headers: Vec<String>,
        mut rows: Vec<Vec<String>>,
    ) -> Self {
        if !headers.is_empty() {
            for row in &mut rows {
                if row.len() < headers.len() {
                    row.resize(headers.len(), String::new());
                }
            }
        }
        Self {
            label,
            caption,
            legend,
            headers,
            rows,
        }
    }

    /// Build a block from a `<table-wrap>`, or `None` if it holds no `<table>`.
    pub fn from_wrap(wrap: &Element) -> Option<Self> {
        let label = child_text(wrap, "label");
        let caption = child_text(wrap, "caption");
        let legend = child_text(wrap, "table-wrap-foot");

        let Some(table) = wrap.find("table") else {
            log::debug!("skipping table-wrap without <table> (label {label:?})");
            return None;
        };

        let headers = table.find("thead").map(parse_thead).unwrap_or_default();
        let rows = table.find("tbody").map(parse_tbody).unwrap_or_default();

        Some(Self::new(label, caption, legend, headers, rows))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Raw footnote text, before bullet formatting.
    pub fn legend(&self) -> &str {
        &self.legend
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn to_markdown(&self) -> String {
        render::to_markdown(self)
    }
}

/// Trimmed text of the first descendant named `name`, or `""`.
fn child_text(wrap: &Element, name: &str) -> String {
    wrap.find(name)
        .map(|e| e.text().trim().to_string())
        .unwrap_or_default()
}

/// Iterate over the tables of a parsed article, in document order.
///
/// The root itself counts when it is a `<table-wrap>`. Wraps without a
/// `<table>` are skipped silently.
pub fn iter_tables(root: &Element) -> impl Iterator<Item = TableBlock> + '_ {
    std::iter::once(root)
        .chain(root.descendants())
        .filter(|e| e.name == "table-wrap")
        .filter_map(TableBlock::from_wrap)
}

/// Parse a JATS article and render each of its tables as markdown.
pub fn extract_tables(xml: &str) -> Result<Vec<String>> {
    let root = xml_tree::parse(xml)?;
    let tables: Vec<String> = iter_tables(&root).map(|t| t.to_markdown()).collect();
    log::debug!("rendered {} table(s)", tables.len());
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(xml: &str) -> Vec<TableBlock> {
        let root = xml_tree::parse(xml).unwrap();
        iter_tables(&root).collect()
    }

    // ── iter_tables ──────────────────────────────────────────────

    #[test]
    fn wrap_without_table_skipped() {
        let xml = r#"<article><body>
            <table-wrap id="T1"><label>Table 1</label>
              <table-wrap-foot><p>aOnly a footnote</p></table-wrap-foot>
            </table-wrap>
        </body></article>"#;
        assert!(blocks(xml).is_empty());
    }

    #[test]
    fn wraps_in_document_order() {
        let xml = r#"<article>
            <sec><table-wrap><label>Table 1</label><table/></table-wrap></sec>
            <sec><table-wrap><label>Table 2</label><table/></table-wrap></sec>
        </article>"#;
        let labels: Vec<String> = blocks(xml).iter().map(|b| b.label().to_string()).collect();
        assert_eq!(labels, vec!["Table 1", "Table 2"]);
    }

    #[test]
    fn root_wrap_counted() {
        let b = blocks("<table-wrap><caption><p>Solo</p></caption><table/></table-wrap>");
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].caption(), "Solo");
    }

    #[test]
    fn missing_parts_degrade_to_empty() {
        let b = blocks("<article><table-wrap><table><tr><td>x</td></tr></table></table-wrap></article>");
        assert_eq!(b.len(), 1);
        assert_eq!(b[0], TableBlock::default());
    }

    #[test]
    fn label_caption_legend_trimmed() {
        let xml = "<table-wrap>
            <label>
              Table 3
            </label>
            <caption><title>Brightness</title> of <italic>variants</italic></caption>
            <table><tbody><tr><td>1</td></tr></tbody></table>
            <table-wrap-foot><fn><p>aFirst</p></fn><fn><p>;bSecond</p></fn></table-wrap-foot>
        </table-wrap>";
        let b = &blocks(xml)[0];
        assert_eq!(b.label(), "Table 3");
        assert_eq!(b.caption(), "Brightness of variants");
        assert_eq!(b.legend(), "aFirst;bSecond");
        assert_eq!(b.rows(), &[vec!["1".to_string()]]);
    }

    // ── TableBlock::new ──────────────────────────────────────────

    #[test]
    fn rows_padded_to_headers() {
        let b = TableBlock::new(
            String::new(),
            String::new(),
            String::new(),
            vec!["A".into(), "B".into()],
            vec![vec!["1".into()], vec!["1".into(), "2".into(), "3".into()]],
        );
        assert_eq!(b.rows()[0], vec!["1", ""]);
        assert_eq!(b.rows()[1].len(), 3);
    }

    // ── extract_tables ───────────────────────────────────────────

    #[test]
    fn extract_tables_propagates_parse_errors() {
        assert!(extract_tables("<article><table-wrap></article>").is_err());
    }

    #[test]
    fn extract_tables_no_tables() {
        assert!(extract_tables("<article><p>text</p></article>").unwrap().is_empty());
    }
}
