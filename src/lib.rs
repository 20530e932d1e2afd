//! `jatsdoc` — tables and text out of scientific full-text articles.
//!
//! The core is the JATS `<table-wrap>` extractor in [`jats`]: nested header
//! rows with row/column spans are flattened, superscript footnote markers
//! are kept, citation cross-references are stripped, and every table comes
//! out as standalone GFM markdown. [`fulltext`] sniffs XML vs PDF input and
//! routes to table or plain-text extraction; [`article_id`] classifies the
//! DOI/PMID/PMCID identifiers callers pass around.
//!
//! ```
//! let xml = r#"<article><table-wrap><label>Table 1</label>
//!   <table><thead><tr><th colspan="2">Group</th></tr><tr><th>A</th><th>B</th></tr></thead>
//!   <tbody><tr><td>1</td><td>2</td></tr></tbody></table></table-wrap></article>"#;
//! let tables = jatsdoc::jats::extract_tables(xml).unwrap();
//! assert_eq!(
//!     tables[0],
//!     "**Table 1**\n\n| Group > A | Group > B |\n| --- | --- |\n| 1 | 2 |"
//! );
//! ```

#![allow(clippy::redundant_pub_crate)]

pub mod article_id;
pub mod error;
pub mod fulltext;
pub mod jats;
mod pdf;
pub mod xml_tree;

pub use article_id::ArticleId;
pub use error::{JatsdocError, Result};
pub use fulltext::Format;
pub use jats::TableBlock;
