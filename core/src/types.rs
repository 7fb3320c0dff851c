//! Data model for extracted roster records.
//!
//! This module defines the types exchanged between the text parser, the
//! spreadsheet mapper, and the storage layer. All types serialize with
//! [`serde`] and round-trip through JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Date string used when no date can be inferred from a document.
pub const UNKNOWN_DATE: &str = "Unknown";

/// A single extracted student record.
///
/// Produced by the roster parser and the spreadsheet mapper. Every record in
/// one parse result shares the same `course_name` and `date` — a document is
/// assumed to describe one course session. Identity and upload timestamps are
/// assigned later by the storage layer.
///
/// # Examples
///
/// ```
/// use roster_core::StudentRecord;
///
/// let record = StudentRecord::new("Jane Doe", "Intro to Widgets", "2024-03-04");
/// assert_eq!(record.name, "Jane Doe");
/// assert_eq!(record.date, "2024-03-04");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Full student name, trimmed, internal whitespace collapsed.
    pub name: String,
    /// Course title shared by all records of a parse.
    pub course_name: String,
    /// Canonical `YYYY-MM-DD` session date, or [`UNKNOWN_DATE`].
    pub date: String,
}

impl StudentRecord {
    /// Creates a record from already-validated parts.
    pub fn new(name: &str, course_name: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            course_name: course_name.to_string(),
            date: date.to_string(),
        }
    }
}

/// Semantic role of a roster table column.
///
/// Only [`FirstName`](ColumnRole::FirstName) and
/// [`LastName`](ColumnRole::LastName) are required to extract records; the
/// auxiliary roles exist so header detection can recognize the full column
/// set of real sign-in sheets.
///
/// # Examples
///
/// ```
/// use roster_core::ColumnRole;
///
/// assert_eq!(ColumnRole::from_label("First Name"), Some(ColumnRole::FirstName));
/// assert_eq!(ColumnRole::from_label("Attended Class"), Some(ColumnRole::Attended));
/// assert_eq!(ColumnRole::from_label("Comments"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    /// First-name column.
    FirstName,
    /// Last-name column.
    LastName,
    /// Site or location column.
    Location,
    /// Phone number column.
    Phone,
    /// Email address column.
    Email,
    /// Signature column.
    Signature,
    /// Attendance checkbox column ("Attended", "Attended Class").
    Attended,
    /// Absence-reason column.
    ReasonForAbsence,
}

impl ColumnRole {
    /// Recognizes a column role from a raw header label.
    ///
    /// Matching is case-insensitive and ignores internal whitespace, so
    /// `"First Name"`, `"FirstName"`, and `"first  name"` all resolve to
    /// [`ColumnRole::FirstName`]. Labels that match no known role return
    /// `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let folded: String = label
            .to_lowercase()
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();
        if folded.is_empty() {
            return None;
        }

        if folded.contains("firstname") {
            Some(Self::FirstName)
        } else if folded.contains("lastname") {
            Some(Self::LastName)
        } else if folded.contains("reasonforabsence") {
            Some(Self::ReasonForAbsence)
        } else if folded.contains("attended") {
            Some(Self::Attended)
        } else if folded.contains("location") {
            Some(Self::Location)
        } else if folded.contains("phone") {
            Some(Self::Phone)
        } else if folded.contains("email") {
            Some(Self::Email)
        } else if folded.contains("signature") {
            Some(Self::Signature)
        } else {
            None
        }
    }
}

/// Column boundary used to split delimited roster rows.
///
/// Chosen once from the header line and reused for every data row — the
/// delimiter is never re-detected per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delimiter {
    /// Tab-separated columns.
    Tab,
    /// Runs of two or more spaces treated as one boundary.
    SpaceRun,
}

/// Table serialization shape a parse resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableLayout {
    /// One delimited row per line, header columns on a single line.
    Delimited(Delimiter),
    /// One table cell per physical line (common PDF text extraction).
    VerticalCells,
}

/// Resolved positions of column roles within a roster table.
///
/// In delimited mode a position is a column index; in vertical mode it is a
/// slot within the repeating row cycle. A schema is usable only once both
/// name roles resolve; any other missing role is ignored, not fatal.
///
/// # Examples
///
/// ```
/// use roster_core::{ColumnRole, HeaderSchema};
///
/// let mut schema = HeaderSchema::new();
/// schema.set(ColumnRole::FirstName, 0);
/// assert!(!schema.is_usable());
///
/// schema.set(ColumnRole::LastName, 1);
/// assert!(schema.is_usable());
/// assert_eq!(schema.position(ColumnRole::LastName), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeaderSchema {
    positions: HashMap<ColumnRole, usize>,
}

impl HeaderSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the position of a role, replacing any earlier position.
    pub fn set(&mut self, role: ColumnRole, position: usize) {
        self.positions.insert(role, position);
    }

    /// Returns the recorded position of a role.
    pub fn position(&self, role: ColumnRole) -> Option<usize> {
        self.positions.get(&role).copied()
    }

    /// Whether both name roles resolved to a position.
    pub fn is_usable(&self) -> bool {
        self.positions.contains_key(&ColumnRole::FirstName)
            && self.positions.contains_key(&ColumnRole::LastName)
    }

    /// Largest position among the two name roles.
    ///
    /// Delimited rows with fewer fields than this cannot contain both name
    /// cells and are skipped. Returns `None` until the schema is usable.
    pub fn max_name_position(&self) -> Option<usize> {
        let first = self.position(ColumnRole::FirstName)?;
        let last = self.position(ColumnRole::LastName)?;
        Some(first.max(last))
    }
}

/// Result of one roster parse.
///
/// Zero records is a valid outcome, not an error — the caller decides how to
/// surface "no students found". `layout` reports which strategy produced the
/// rows and stays `None` when neither matched.
///
/// # Examples
///
/// ```
/// use roster_core::ParseResult;
///
/// let result = ParseResult::empty();
/// assert!(result.records.is_empty());
/// assert_eq!(result.date, roster_core::UNKNOWN_DATE);
/// assert!(result.layout.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    /// Extracted records in document order.
    pub records: Vec<StudentRecord>,
    /// Course title inferred from the first line.
    pub course_name: String,
    /// Session date inferred from the first two lines, or [`UNKNOWN_DATE`].
    pub date: String,
    /// Table shape the winning strategy resolved, if any.
    pub layout: Option<TableLayout>,
    /// Candidate rows dropped by shape checks or the row validator.
    pub skipped_rows: usize,
}

impl ParseResult {
    /// Creates a result with no records and no inferred metadata.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            course_name: String::new(),
            date: UNKNOWN_DATE.to_string(),
            layout: None,
            skipped_rows: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_role_from_label_variants() {
        assert_eq!(ColumnRole::from_label("firstname"), Some(ColumnRole::FirstName));
        assert_eq!(ColumnRole::from_label("Last  Name"), Some(ColumnRole::LastName));
        assert_eq!(ColumnRole::from_label("LOCATION"), Some(ColumnRole::Location));
        assert_eq!(
            ColumnRole::from_label("Reason for Absence"),
            Some(ColumnRole::ReasonForAbsence)
        );
        assert_eq!(ColumnRole::from_label("AttendedClass"), Some(ColumnRole::Attended));
        assert_eq!(ColumnRole::from_label(""), None);
        assert_eq!(ColumnRole::from_label("Jane"), None);
    }

    #[test]
    fn test_header_schema_usable_requires_both_names() {
        let mut schema = HeaderSchema::new();
        schema.set(ColumnRole::FirstName, 2);
        schema.set(ColumnRole::Location, 0);
        assert!(!schema.is_usable());
        assert_eq!(schema.max_name_position(), None);

        schema.set(ColumnRole::LastName, 3);
        assert!(schema.is_usable());
        assert_eq!(schema.max_name_position(), Some(3));
    }

    #[test]
    fn test_student_record_round_trips_json() {
        let record = StudentRecord::new("Jane Doe", "Safety Training", "2024-01-05");
        let json = serde_json::to_string(&record).unwrap();
        let back: StudentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
