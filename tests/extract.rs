//! End-to-end tests for the public extraction API with inline JATS fixtures.

use jatsdoc::fulltext;
use jatsdoc::jats::{self, TableBlock};
use jatsdoc::{xml_tree, JatsdocError};

// ── Fixtures ─────────────────────────────────────────────────────────────────

const PROTEIN_ARTICLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE article PUBLIC "-//NLM//DTD JATS (Z39.96) Journal Archiving and Interchange DTD v1.3 20210610//EN" "JATS-archivearticle1-3.dtd">
<article xmlns:xlink="http://www.w3.org/1999/xlink" article-type="research-article">
  <body>
    <sec>
      <p>StayGold is bright<xref ref-type="bibr" rid="R1">1</xref>.</p>
      <table-wrap id="T1" position="float">
        <label>Table 1</label>
        <caption><p>Protein properties</p></caption>
        <table frame="hsides" rules="groups">
          <thead>
            <tr><th>Protein</th><th>Ex (nm)</th><th>QY</th></tr>
          </thead>
          <tbody>
            <tr><td>StayGold</td><td>496</td><td>0.93<sup>a</sup></td></tr>
            <tr><td>mNeonGreen<sup><xref ref-type="bibr" rid="R25">25</xref></sup></td><td>506</td><td>0.80<sup>b</sup></td></tr>
          </tbody>
        </table>
        <table-wrap-foot>
          <fn id="TF1"><p>aMeasured in this study</p></fn>;<fn id="TF2"><p>bFrom ref. 25</p></fn>
        </table-wrap-foot>
      </table-wrap>
    </sec>
  </body>
</article>"#;

const SPANNING_ARTICLE: &str = r#"<article><body>
  <table-wrap id="T2">
    <label>Table 2</label>
    <caption><title>Photophysical characterization</title></caption>
    <table>
      <thead>
        <tr>
          <th rowspan="2">Protein</th>
          <th colspan="2">Absorbance</th>
          <th colspan="2">Fluorescence</th>
        </tr>
        <tr>
          <th>λ<sub>max</sub> (nm)</th>
          <th>ε (M<sup>−1</sup>&#x2009;cm<sup>−1</sup>)</th>
          <th>λ<sub>max</sub> (nm)</th>
          <th>Φ</th>
        </tr>
      </thead>
      <tbody>
        <tr><td>EGFP</td><td>488</td><td>55,900</td><td>507</td><td>0.60</td></tr>
        <tr><td>mCherry</td><td>587</td><td>72,000</td></tr>
      </tbody>
    </table>
    <table-wrap-foot>
      <p>aMeasured at pH 7.4. bIn PBS. cRelative to fluorescein. dAverage of three replicates.</p>
    </table-wrap-foot>
  </table-wrap>
  <table-wrap id="T3"><label>Table 3</label><graphic xlink:href="t3.jpg" xmlns:xlink="http://www.w3.org/1999/xlink"/></table-wrap>
</body></article>"#;

// ── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn protein_table_end_to_end() {
    let tables = jats::extract_tables(PROTEIN_ARTICLE).unwrap();
    assert_eq!(tables.len(), 1);

    let md = &tables[0];
    let lines: Vec<&str> = md.lines().collect();
    assert_eq!(lines[0], "**Table 1: Protein properties**");
    assert_eq!(lines[2], "| Protein | Ex (nm) | QY |");
    assert_eq!(lines[3], "| --- | --- | --- |");
    assert_eq!(lines[4], "| StayGold | 496 | 0.93 a |");
    assert_eq!(lines[5], "| mNeonGreen | 506 | 0.80 b |");

    for row in &lines[4..6] {
        assert_eq!(row.matches(" | ").count() + 1, 3, "row {row:?}");
    }

    assert!(!md.contains("25 |"), "citation number leaked: {md}");
    assert!(md.ends_with("**Legend:**\n- a: Measured in this study\n- b: From ref. 25"));
}

#[test]
fn spanning_headers_end_to_end() {
    let tables = jats::extract_tables(SPANNING_ARTICLE).unwrap();
    // Table 3 is an image-only wrap and is skipped.
    assert_eq!(tables.len(), 1);

    let expected = "\
**Table 2: Photophysical characterization**

| Protein | Absorbance > λ_max (nm) | Absorbance > ε (M^−1 cm^−1) | Fluorescence > λ_max (nm) | Fluorescence > Φ |
| --- | --- | --- | --- | --- |
| EGFP | 488 | 55,900 | 507 | 0.60 |
| mCherry | 587 | 72,000 |  |  |

**Legend:**
- a: Measured at pH 7.4
- b: In PBS
- c: Relative to fluorescein
- d: Average of three replicates";
    assert_eq!(tables[0], expected);
}

#[test]
fn blocks_expose_structure() {
    let root = xml_tree::parse(SPANNING_ARTICLE).unwrap();
    let blocks: Vec<TableBlock> = jats::iter_tables(&root).collect();
    assert_eq!(blocks.len(), 1);

    let b = &blocks[0];
    assert_eq!(b.label(), "Table 2");
    assert_eq!(b.headers().len(), 5);
    assert!(b.rows().iter().all(|r| r.len() == 5));
}

#[test]
fn rendering_twice_is_identical() {
    let a = jats::extract_tables(SPANNING_ARTICLE).unwrap();
    let b = jats::extract_tables(SPANNING_ARTICLE).unwrap();
    assert_eq!(a, b);
}

// ── Front door ───────────────────────────────────────────────────────────────

#[test]
fn fulltext_routes_xml_bytes() {
    let tables = fulltext::extract_tables(PROTEIN_ARTICLE.as_bytes()).unwrap();
    assert_eq!(tables, jats::extract_tables(PROTEIN_ARTICLE).unwrap());

    let text = fulltext::extract_text(PROTEIN_ARTICLE.as_bytes()).unwrap();
    assert!(text.contains("StayGold is bright1."));
    assert!(text.contains("Protein properties"));
}

#[test]
fn fulltext_rejects_pdf_tables() {
    let err = fulltext::extract_tables(b"%PDF-1.4\n%%EOF\n").unwrap_err();
    assert!(matches!(err, JatsdocError::Unsupported(_)));
    assert_eq!(err.to_string(), "PDF table extraction is not supported");
}

#[test]
fn malformed_xml_is_reported() {
    let err = jats::extract_tables("<article><table-wrap></article>").unwrap_err();
    assert!(matches!(err, JatsdocError::Xml(_)));
}
