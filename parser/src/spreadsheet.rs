//! Keyed-row mapping for already-tabular spreadsheet data.
//!
//! Spreadsheet libraries expose structured rows keyed by column name, so no
//! header inference is needed — records are synthesized with direct key
//! lookups across the known column-name variants. Rows whose resolved name is
//! empty are dropped, mirroring the text parser's silent-drop policy.

use std::collections::HashMap;
use std::io::Read;

use roster_core::{StudentRecord, validate};

use crate::ingest::Result;

const FIRST_NAME_KEYS: [&str; 4] = ["First Name", "FirstName", "first name", "firstname"];
const LAST_NAME_KEYS: [&str; 4] = ["Last Name", "LastName", "last name", "lastname"];
const NAME_KEYS: [&str; 4] = ["Student Name", "Name", "name", "Student"];
const COURSE_KEYS: [&str; 4] = ["Course Name", "Course", "course", "Class"];
const DATE_KEYS: [&str; 2] = ["Date", "date"];

fn lookup<'a>(row: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| row.get(*key))
        .map(String::as_str)
}

/// Synthesizes a record from a column-name → value row.
///
/// An explicit name column takes precedence over the combined
/// first + last pair; `default_date` fills in when the row has no date cell
/// (callers typically pass today's date). Returns `None` when no name can be
/// resolved.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use roster_parser::spreadsheet::record_from_keyed_row;
///
/// let mut row = HashMap::new();
/// row.insert("First Name".to_string(), "Jane".to_string());
/// row.insert("Last Name".to_string(), "Doe".to_string());
/// row.insert("Course".to_string(), "Widgets 101".to_string());
///
/// let record = record_from_keyed_row(&row, "2024-05-06").unwrap();
/// assert_eq!(record.name, "Jane Doe");
/// assert_eq!(record.course_name, "Widgets 101");
/// assert_eq!(record.date, "2024-05-06");
/// ```
pub fn record_from_keyed_row(
    row: &HashMap<String, String>,
    default_date: &str,
) -> Option<StudentRecord> {
    let first = lookup(row, &FIRST_NAME_KEYS).unwrap_or("").trim();
    let last = lookup(row, &LAST_NAME_KEYS).unwrap_or("").trim();
    let combined = validate::collapse_whitespace(&format!("{first} {last}"));

    let name = lookup(row, &NAME_KEYS)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(&combined);
    if name.is_empty() {
        return None;
    }

    let course_name = lookup(row, &COURSE_KEYS).unwrap_or("").trim();
    let date = lookup(row, &DATE_KEYS)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default_date);

    Some(StudentRecord::new(name, course_name, date))
}

/// Decodes headered comma-separated rows into records.
pub fn records_from_csv<R: Read>(reader: R, default_date: &str) -> Result<Vec<StudentRecord>> {
    records_from_reader(reader, b',', default_date)
}

/// Decodes headered tab-separated rows into records.
pub fn records_from_tsv<R: Read>(reader: R, default_date: &str) -> Result<Vec<StudentRecord>> {
    records_from_reader(reader, b'\t', default_date)
}

fn records_from_reader<R: Read>(
    reader: R,
    delimiter: u8,
    default_date: &str,
) -> Result<Vec<StudentRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let keyed: HashMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        if let Some(record) = record_from_keyed_row(&keyed, default_date) {
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_key_variants_resolve_names() {
        for (first_key, last_key) in [
            ("First Name", "Last Name"),
            ("FirstName", "LastName"),
            ("first name", "last name"),
            ("firstname", "lastname"),
        ] {
            let record =
                record_from_keyed_row(&row(&[(first_key, "Jane"), (last_key, "Doe")]), "Unknown")
                    .unwrap();
            assert_eq!(record.name, "Jane Doe", "keys: {first_key}/{last_key}");
        }
    }

    #[test]
    fn test_explicit_name_column_takes_precedence() {
        let record = record_from_keyed_row(
            &row(&[
                ("Student Name", "Mary Jane Watson"),
                ("First Name", "Jane"),
                ("Last Name", "Doe"),
            ]),
            "Unknown",
        )
        .unwrap();
        assert_eq!(record.name, "Mary Jane Watson");
    }

    #[test]
    fn test_empty_name_row_is_dropped() {
        assert!(record_from_keyed_row(&row(&[("Course", "Widgets 101")]), "Unknown").is_none());
        assert!(record_from_keyed_row(&row(&[("Name", "   ")]), "Unknown").is_none());
    }

    #[test]
    fn test_date_cell_overrides_default() {
        let dated = record_from_keyed_row(
            &row(&[("Name", "Jane Doe"), ("Date", "2024-01-05")]),
            "2024-09-09",
        )
        .unwrap();
        assert_eq!(dated.date, "2024-01-05");

        let dateless =
            record_from_keyed_row(&row(&[("Name", "Jane Doe")]), "2024-09-09").unwrap();
        assert_eq!(dateless.date, "2024-09-09");
    }

    #[test]
    fn test_csv_rows_map_through_keyed_lookup() {
        let data = "First Name,Last Name,Course\nJane,Doe,Widgets 101\n,,Widgets 101\nJohn,Smith,Widgets 101\n";
        let records = records_from_csv(data.as_bytes(), "2024-05-06").unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Jane Doe", "John Smith"]);
        assert_eq!(records[0].course_name, "Widgets 101");
    }

    #[test]
    fn test_tsv_rows_use_tab_delimiter() {
        let data = "First Name\tLast Name\nJane\tDoe\n";
        let records = records_from_tsv(data.as_bytes(), "2024-05-06").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Doe");
    }
}
