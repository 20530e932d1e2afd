//! Local classification of article identifiers: DOI, PMID, PMCID.
//!
//! Detection order goes from most to least specific:
//!
//! 1. PMCID — `PMC` prefix, digits, optional `.version`
//! 2. DOI — `10.<registrant>/<suffix>`, optionally behind `doi:` or a
//!    `doi.org` URL
//! 3. PMID — bare digits without a leading zero
//!
//! Completing the other identifiers (e.g. PMID → DOI) needs the remote ID
//! converter and is out of scope here.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::error::{JatsdocError, Result};

lazy_static! {
    static ref PMCID: Regex = Regex::new(r"^PMC\d+(?:\.\d+)?$").unwrap();
    static ref DOI: Regex = Regex::new(r"^10\.\d+/.+").unwrap();
}

/// Prefixes stripped before matching a DOI.
const DOI_PREFIXES: &[&str] = &["doi:", "https://doi.org/", "http://doi.org/"];

/// A classified article identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArticleId {
    Doi(String),
    Pmid(String),
    Pmcid(String),
}

impl ArticleId {
    /// Classify an identifier string.
    pub fn parse(s: &str) -> Result<Self> {
        let id = s.trim();

        if PMCID.is_match(id) {
            return Ok(ArticleId::Pmcid(id.to_string()));
        }

        let doi = DOI_PREFIXES
            .iter()
            .find_map(|p| id.strip_prefix(p))
            .map_or(id, str::trim);
        if DOI.is_match(doi) {
            return Ok(ArticleId::Doi(doi.to_string()));
        }

        if is_pmid(id) {
            return Ok(ArticleId::Pmid(id.to_string()));
        }

        Err(JatsdocError::Identifier(s.to_string()))
    }

    /// Short lowercase name of the identifier type.
    pub fn kind(&self) -> &'static str {
        match self {
            ArticleId::Doi(_) => "doi",
            ArticleId::Pmid(_) => "pmid",
            ArticleId::Pmcid(_) => "pmcid",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ArticleId::Doi(v) | ArticleId::Pmid(v) | ArticleId::Pmcid(v) => v,
        }
    }
}

/// Digits only, no leading zero (a lone `0` is allowed).
fn is_pmid(id: &str) -> bool {
    !id.is_empty()
        && id.bytes().all(|b| b.is_ascii_digit())
        && (id.len() == 1 || !id.starts_with('0'))
}

impl FromStr for ArticleId {
    type Err = JatsdocError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
