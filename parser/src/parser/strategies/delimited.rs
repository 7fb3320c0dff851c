//! Delimited-table strategy: header columns on a single line.

use roster_core::{ColumnRole, Delimiter, HeaderSchema, TableLayout, validate};

use super::{RosterStrategy, StrategyOutcome};
use crate::parser::PATTERNS;

pub(crate) struct DelimitedStrategy;

impl RosterStrategy for DelimitedStrategy {
    fn name(&self) -> &'static str {
        "delimited"
    }

    fn extract(
        &self,
        lines: &[String],
        course_name: &str,
        date: &str,
    ) -> Option<StrategyOutcome> {
        let (header_index, delimiter, schema) = locate_header(lines)?;
        let first_position = schema.position(ColumnRole::FirstName)?;
        let last_position = schema.position(ColumnRole::LastName)?;
        let max_position = schema.max_name_position()?;

        let mut records = Vec::new();
        let mut skipped_rows = 0;
        for line in &lines[header_index + 1..] {
            let cells: Vec<&str> = split_row(line, delimiter)
                .into_iter()
                .map(str::trim)
                .collect();
            if cells.len() <= max_position {
                skipped_rows += 1;
                continue;
            }
            match validate::build_student(
                cells[first_position],
                cells[last_position],
                course_name,
                date,
            ) {
                Some(record) => records.push(record),
                None => skipped_rows += 1,
            }
        }

        Some(StrategyOutcome {
            records,
            layout: TableLayout::Delimited(delimiter),
            skipped_rows,
        })
    }
}

/// Splits a row with the delimiter chosen from the header line.
///
/// Commas are deliberately not a boundary; they appear inside ordinary cell
/// text ("yes, and I attest...").
fn split_row<'a>(line: &'a str, delimiter: Delimiter) -> Vec<&'a str> {
    match delimiter {
        Delimiter::Tab => line.split('\t').collect(),
        Delimiter::SpaceRun => PATTERNS.space_run.split(line).collect(),
    }
}

/// Finds the first line carrying both name markers and resolves its columns.
///
/// The delimiter is decided from the header line alone: tab when one is
/// present, multi-space runs otherwise. A line whose columns do not resolve
/// both name roles is not a header; scanning continues below it.
fn locate_header(lines: &[String]) -> Option<(usize, Delimiter, HeaderSchema)> {
    for (index, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        let has_first = lower.contains("first name") || lower.contains("firstname");
        let has_last = lower.contains("last name") || lower.contains("lastname");
        if !has_first || !has_last {
            continue;
        }

        let delimiter = if line.contains('\t') {
            Delimiter::Tab
        } else {
            Delimiter::SpaceRun
        };

        let mut schema = HeaderSchema::new();
        for (column, cell) in split_row(line, delimiter).into_iter().enumerate() {
            let field = cell.trim().to_lowercase();
            let folded: String = field.chars().filter(|ch| !ch.is_whitespace()).collect();
            if folded == "firstname" || field.contains("first name") {
                schema.set(ColumnRole::FirstName, column);
            } else if folded == "lastname" || field.contains("last name") {
                schema.set(ColumnRole::LastName, column);
            } else if let Some(role) = ColumnRole::from_label(&field)
                && schema.position(role).is_none()
            {
                schema.set(role, column);
            }
        }

        if schema.is_usable() {
            return Some((index, delimiter, schema));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|line| line.to_string()).collect()
    }

    fn extract(text: &[&str]) -> Option<StrategyOutcome> {
        DelimitedStrategy.extract(&lines(text), "Widgets 101", "2024-05-06")
    }

    #[test]
    fn test_tab_delimited_rows() {
        let outcome = extract(&[
            "Widgets 101",
            "First Name\tLast Name\tEmail",
            "Jane\tDoe\tjane@example.com",
            "John\tSmith\tjohn@example.com",
        ])
        .unwrap();
        assert_eq!(outcome.layout, TableLayout::Delimited(Delimiter::Tab));
        let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Jane Doe", "John Smith"]);
    }

    #[test]
    fn test_space_run_delimited_rows() {
        let outcome = extract(&[
            "Location     First Name   Last Name",
            "HQ           Jane         Doe",
            "Remote       John         Smith",
        ])
        .unwrap();
        assert_eq!(outcome.layout, TableLayout::Delimited(Delimiter::SpaceRun));
        let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Jane Doe", "John Smith"]);
    }

    #[test]
    fn test_short_rows_are_skipped_not_fatal() {
        let outcome = extract(&[
            "First Name\tLast Name",
            "Jane\tDoe",
            "continued on next page",
            "John\tSmith",
        ])
        .unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped_rows, 1);
    }

    #[test]
    fn test_boilerplate_rows_are_dropped() {
        let outcome = extract(&[
            "First Name\tLast Name",
            "Jane\tDoe",
            "Yes\tI attest the above is correct",
            "\tSignature",
        ])
        .unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.skipped_rows, 2);
    }

    #[test]
    fn test_line_with_one_marker_is_not_a_header() {
        assert!(extract(&["First Name\tPhone", "Jane\t555-0100"]).is_none());
    }

    #[test]
    fn test_repeated_page_headers_are_rejected_as_rows() {
        let outcome = extract(&[
            "First Name\tLast Name",
            "Jane\tDoe",
            "First Name\tLast Name",
            "John\tSmith",
        ])
        .unwrap();
        let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Jane Doe", "John Smith"]);
        assert_eq!(outcome.skipped_rows, 1);
    }
}
