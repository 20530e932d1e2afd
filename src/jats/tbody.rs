//! Body rows: a `<tbody>` → rows of cell strings.
//!
//! Unlike the header, body spans are not resolved. Each `<td>` contributes
//! exactly one cell at the position it is encountered; ragged rows are left
//! ragged for the renderer to pad.

use super::cell::cell_text;
use crate::xml_tree::Element;

/// Parse every `<tr>` of a `<tbody>` into its `<td>` texts, in document order.
pub fn parse_tbody(tbody: &Element) -> Vec<Vec<String>> {
    tbody
        .find_all("tr")
        .map(|tr| tr.find_all("td").map(cell_text).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml_tree;

    fn rows(xml: &str) -> Vec<Vec<String>> {
        parse_tbody(&xml_tree::parse(xml).unwrap())
    }

    #[test]
    fn rectangular_body() {
        let r = rows(
            "<tbody>
               <tr><td>EGFP</td><td>488</td><td>507</td></tr>
               <tr><td>mCherry</td><td>587</td><td>610</td></tr>
             </tbody>",
        );
        assert_eq!(
            r,
            vec![vec!["EGFP", "488", "507"], vec!["mCherry", "587", "610"]]
        );
    }

    #[test]
    fn spans_not_resolved() {
        let r = rows(
            r#"<tbody>
                 <tr><td rowspan="2">A</td><td>1</td></tr>
                 <tr><td>2</td></tr>
                 <tr><td colspan="2">wide</td></tr>
               </tbody>"#,
        );
        assert_eq!(r, vec![vec!["A", "1"], vec!["2"], vec!["wide"]]);
    }

    #[test]
    fn cells_use_cell_rules() {
        let r = rows("<tbody><tr><td>0.93<sup>a</sup><sup><xref>4</xref></sup></td></tr></tbody>");
        assert_eq!(r, vec![vec!["0.93 a"]]);
    }

    #[test]
    fn empty_body() {
        assert!(rows("<tbody/>").is_empty());
        assert_eq!(rows("<tbody><tr/></tbody>"), vec![Vec::<String>::new()]);
    }
}
