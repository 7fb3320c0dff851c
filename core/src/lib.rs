//! Core types and row validation for student roster extraction.
//!
//! This crate defines the data model shared by the roster text parser, the
//! spreadsheet mapper, and the storage layer:
//!
//! - [`StudentRecord`] — one extracted student, tagged with the shared course
//!   name and session date.
//! - [`ColumnRole`] / [`HeaderSchema`] — semantic column roles and their
//!   resolved positions within a detected header.
//! - [`Delimiter`] / [`TableLayout`] — how a document's table was serialized.
//! - [`ParseResult`] — the ordered outcome of one parse, including the rows
//!   that were skipped.
//!
//! Row validation ([`validate::build_student`]) rejects boilerplate and
//! malformed cells and composes the canonical full name.
//!
//! # Example
//!
//! ```
//! use roster_core::{ColumnRole, HeaderSchema, validate};
//!
//! let mut header = HeaderSchema::new();
//! header.set(ColumnRole::FirstName, 0);
//! header.set(ColumnRole::LastName, 1);
//! assert!(header.is_usable());
//!
//! let record = validate::build_student("Jane", "Doe", "Intro to Widgets", "2024-03-04");
//! assert_eq!(record.unwrap().name, "Jane Doe");
//! ```

pub mod types;
pub mod validate;

pub use types::{
    ColumnRole, Delimiter, HeaderSchema, ParseResult, StudentRecord, TableLayout, UNKNOWN_DATE,
};
