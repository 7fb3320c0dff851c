//! Document-type routing and the binary-conversion seam.
//!
//! File-extension dispatch is a pure routing concern; actual binary decoding
//! (Word, PDF, Excel) belongs to external collaborators behind the
//! [`TextExtractor`] trait. A decode failure propagates as a rejected
//! operation — the roster parser is never invoked on partial output.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while routing and converting roster documents.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension maps to no known document kind.
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    /// A binary document's text layer could not be decoded.
    #[error("document decode failed: {0}")]
    DecodeFailed(String),

    /// No conversion collaborator is configured for this document kind.
    #[error("no {0} converter configured")]
    ConverterUnavailable(&'static str),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Delimited-row decoding failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias for results with [`IngestError`].
pub type Result<T> = std::result::Result<T, IngestError>;

/// Kind of roster document, decided by file extension alone.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use roster_parser::ingest::DocumentKind;
///
/// assert_eq!(
///     DocumentKind::from_path(Path::new("roster.xlsx")).unwrap(),
///     DocumentKind::Spreadsheet
/// );
/// assert_eq!(
///     DocumentKind::from_path(Path::new("roster.txt")).unwrap(),
///     DocumentKind::PlainText
/// );
/// assert!(DocumentKind::from_path(Path::new("roster.png")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Binary spreadsheet (`.xlsx`, `.xls`) — rows arrive keyed by column.
    Spreadsheet,
    /// Delimited text rows (`.csv`, `.tsv`).
    DelimitedRows,
    /// Word document (`.doc`, `.docx`) — text extracted by a collaborator.
    Word,
    /// PDF document — per-page text concatenated with newline separators.
    Pdf,
    /// Plain extracted text (`.txt`, `.text`).
    PlainText,
}

impl DocumentKind {
    /// Resolves the document kind from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xls" => Ok(Self::Spreadsheet),
            "csv" | "tsv" => Ok(Self::DelimitedRows),
            "doc" | "docx" => Ok(Self::Word),
            "pdf" => Ok(Self::Pdf),
            "txt" | "text" => Ok(Self::PlainText),
            _ => Err(IngestError::UnsupportedExtension(extension)),
        }
    }

    /// Human-readable kind label, used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spreadsheet => "spreadsheet",
            Self::DelimitedRows => "delimited-row",
            Self::Word => "word",
            Self::Pdf => "pdf",
            Self::PlainText => "plain-text",
        }
    }
}

/// Collaborator seam for binary document-to-text conversion.
///
/// Implementations decode a document's text layer (Word body text, PDF
/// per-page text joined with `\n`). The roster parser consumes the returned
/// text as-is and has no page-boundary awareness. Implementations must fail
/// with [`IngestError::DecodeFailed`] rather than return partial output.
pub trait TextExtractor {
    /// Extracts the full text layer of a binary document.
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}
