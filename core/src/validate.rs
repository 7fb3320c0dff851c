//! Row validation for candidate name pairs.
//!
//! Converted text is inherently noisy: signature boilerplate, consent
//! checkboxes, and stray header fragments routinely land in name columns.
//! Validation rejects those cells and composes the canonical full name;
//! there is no partial or warning state — a candidate row either becomes a
//! [`StudentRecord`] or is dropped.
//!
//! # Examples
//!
//! ```
//! use roster_core::validate::build_student;
//!
//! let record = build_student("Jane", "Doe", "Safety Training", "2024-01-05");
//! assert_eq!(record.unwrap().name, "Jane Doe");
//!
//! // Consent-checkbox leakage is rejected outright.
//! assert!(build_student("Jane", "Yes", "Safety Training", "2024-01-05").is_none());
//! ```

use crate::types::StudentRecord;

/// Longest accepted first-name cell.
///
/// Anything longer is almost certainly a mis-split row that absorbed
/// unrelated prose.
pub const MAX_FIRST_NAME_LEN: usize = 40;

/// Longest accepted last-name cell.
pub const MAX_LAST_NAME_LEN: usize = 60;

/// Collapses internal whitespace runs to single spaces and trims the ends.
///
/// # Examples
///
/// ```
/// use roster_core::validate::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Mary   Jane \t Watson "), "Mary Jane Watson");
/// ```
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns `true` when a name cell is empty, header leakage, or boilerplate.
fn is_rejected_cell(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lower = trimmed.to_lowercase();
    if lower.contains("first name") || lower.contains("last name") {
        return true;
    }
    if lower == "yes" || lower == "no" {
        return true;
    }
    lower.contains("attest") || lower.contains("agree") || lower.contains("signature")
}

/// Validates a candidate name pair and builds a [`StudentRecord`].
///
/// Each field is checked independently: empty cells, header leakage
/// ("first name"/"last name"), consent-checkbox values ("yes"/"no"), and
/// attestation boilerplate ("attest"/"agree"/"signature") are rejected, as
/// are fields beyond [`MAX_FIRST_NAME_LEN`]/[`MAX_LAST_NAME_LEN`]. On
/// acceptance the full name is composed with whitespace runs collapsed; a
/// name that collapses to nothing is also rejected.
pub fn build_student(
    first_name: &str,
    last_name: &str,
    course_name: &str,
    date: &str,
) -> Option<StudentRecord> {
    if is_rejected_cell(first_name) || is_rejected_cell(last_name) {
        return None;
    }
    if first_name.chars().count() > MAX_FIRST_NAME_LEN
        || last_name.chars().count() > MAX_LAST_NAME_LEN
    {
        return None;
    }

    let name = collapse_whitespace(&format!("{first_name} {last_name}"));
    if name.is_empty() {
        return None;
    }

    Some(StudentRecord::new(&name, course_name, date))
}
