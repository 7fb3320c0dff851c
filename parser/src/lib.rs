//! Heuristic student-roster extraction from converted document text.
//!
//! This crate turns the loosely-formatted text that Word/PDF conversion
//! produces into validated [`StudentRecord`]s. It copes with multiple,
//! mutually incompatible serializations of the same logical sign-in table —
//! a delimited line-per-row dump, or one cell per physical line — using only
//! line-adjacency heuristics, with no schema guarantee:
//!
//! - **Delimited** — a header line carrying both "First Name" and
//!   "Last Name" columns, split on tabs or multi-space runs.
//! - **Vertical cells** — header labels and data cells each on their own
//!   line, reconstructed as a fixed-width row cycle.
//!
//! Session metadata (course title and canonical `YYYY-MM-DD` date) is
//! inferred from the first two lines. Noise rows — attestation boilerplate,
//! consent checkboxes, repeated page headers, mis-split prose — are dropped
//! silently; every parser-internal condition resolves to fewer records, not
//! an error.
//!
//! # Main entry points
//!
//! - [`parse_roster_text`] — parse extracted text into a
//!   [`ParseResult`](roster_core::ParseResult).
//! - [`spreadsheet::record_from_keyed_row`] — map already-tabular rows
//!   keyed by column name, bypassing header inference.
//! - [`ingest::DocumentKind`] — file-extension routing, with the
//!   [`ingest::TextExtractor`] seam for binary conversion collaborators.
//!
//! # Example
//!
//! ```
//! use roster_parser::parse_roster_text;
//!
//! let text = "\
//! Intro to Widgets  3/4/2024
//! First Name\tLast Name
//! Jane\tDoe
//! John\tSmith";
//!
//! let result = parse_roster_text(text);
//! assert_eq!(result.course_name, "Intro to Widgets");
//! assert_eq!(result.date, "2024-03-04");
//! let names: Vec<&str> = result.records.iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(names, ["Jane Doe", "John Smith"]);
//! ```
//!
//! [`StudentRecord`]: roster_core::StudentRecord

pub mod ingest;
pub mod output;
pub mod parser;
pub mod spreadsheet;

pub use parser::RosterParser;

use roster_core::ParseResult;

/// Parses extracted roster text into an ordered sequence of student records.
///
/// This is the primary entry point. Zero records is a valid outcome — the
/// caller decides how to surface "no students found".
///
/// # Examples
///
/// ```
/// use roster_parser::parse_roster_text;
///
/// // Fewer than two non-blank lines can never describe a roster.
/// assert!(parse_roster_text("Course Title Only").records.is_empty());
/// ```
pub fn parse_roster_text(text: &str) -> ParseResult {
    RosterParser::new(text).parse()
}
