//! Error types for jatsdoc.
//!
//! Provides a single [`JatsdocError`] enum shared by the XML tree builder,
//! the full-text front door and the command-line surface.

/// All errors that can occur while reading articles and rendering output.
#[derive(Debug, thiserror::Error)]
pub enum JatsdocError {
    /// I/O error (file or stdin read).
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The XML is not well formed.
    #[error("malformed XML: {0}")]
    Xml(String),

    /// Document-level error (unrecognized format, no extractable text).
    #[error("{0}")]
    Document(String),

    /// The operation is not available for this content format.
    #[error("{0} is not supported")]
    Unsupported(&'static str),

    /// The string is not a DOI, PMID, or PMCID.
    #[error("not a DOI, PMID, or PMCID: {0:?}")]
    Identifier(String),

    /// Pretty-printing error (bat rendering failure).
    #[error("pretty print: {0}")]
    Render(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JatsdocError>;
