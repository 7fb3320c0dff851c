//! Vertical-cell strategy: one table cell per physical line.
//!
//! PDF text extraction commonly flattens a table into a stream of cells, so
//! "First Name" and "Last Name" land on separate lines with the rest of the
//! header around them. This strategy reconstructs a fixed-width virtual row
//! schema from the surrounding header-like tokens, then consumes the
//! remaining lines in groups of one row cycle.

use roster_core::{ColumnRole, HeaderSchema, TableLayout, validate};

use super::{RosterStrategy, StrategyOutcome};

/// How far below a "first name" line a "last name" line may sit.
const LAST_NAME_WINDOW: usize = 10;

/// How far the header may extend above the "first name" line.
const BACKWARD_SPAN: usize = 8;

/// Total header span cap, measured from the "first name" line.
const TOTAL_HEADER_SPAN: usize = 30;

/// A row cycle needs at least a first and a last name cell.
const MIN_ROW_SIZE: usize = 2;

pub(crate) struct VerticalCellStrategy;

impl RosterStrategy for VerticalCellStrategy {
    fn name(&self) -> &'static str {
        "vertical-cells"
    }

    fn extract(
        &self,
        lines: &[String],
        course_name: &str,
        date: &str,
    ) -> Option<StrategyOutcome> {
        let (first_line, last_line) = locate_name_pair(lines)?;

        // Expand outward while neighbors still look like header tokens.
        let mut header_start = first_line;
        while header_start > 0
            && is_header_token(&lines[header_start - 1])
            && first_line - (header_start - 1) <= BACKWARD_SPAN
        {
            header_start -= 1;
        }
        let mut header_end = last_line;
        while header_end + 1 < lines.len()
            && is_header_token(&lines[header_end + 1])
            && (header_end + 1) - first_line <= TOTAL_HEADER_SPAN
        {
            header_end += 1;
        }

        // Merge multi-line header labels into the preceding token. Best
        // effort: a data cell that happens to start with "(" or "or " would
        // mis-merge, but such documents have no reliable grammar to lean on.
        let mut headers: Vec<String> = Vec::new();
        for raw in &lines[header_start..=header_end] {
            if let Some(previous) = headers.last_mut()
                && is_header_continuation(raw)
            {
                *previous = validate::collapse_whitespace(&format!("{previous} {raw}"));
                continue;
            }
            headers.push(raw.trim().to_string());
        }

        let mut schema = HeaderSchema::new();
        for (slot, label) in headers.iter().enumerate() {
            if let Some(role) = ColumnRole::from_label(label)
                && schema.position(role).is_none()
            {
                schema.set(role, slot);
            }
        }
        if !schema.is_usable() {
            return None;
        }
        let first_slot = schema.position(ColumnRole::FirstName)?;
        let last_slot = schema.position(ColumnRole::LastName)?;

        let row_size = headers.len();
        if row_size < MIN_ROW_SIZE {
            return None;
        }

        let cells: Vec<&str> = lines[header_end + 1..]
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();

        let mut records = Vec::new();
        let mut skipped_rows = 0;
        let mut cursor = 0;
        while cursor + row_size <= cells.len() {
            let group = &cells[cursor..cursor + row_size];
            cursor += row_size;

            // Paginated documents repeat the header block; skip the whole
            // group when marker text shows up inside it.
            let repeats_header = group.iter().any(|cell| {
                let lower = cell.to_lowercase();
                lower.contains("first name") || lower.contains("last name")
            });
            if repeats_header {
                skipped_rows += 1;
                continue;
            }

            match validate::build_student(group[first_slot], group[last_slot], course_name, date)
            {
                Some(record) => records.push(record),
                None => skipped_rows += 1,
            }
        }

        Some(StrategyOutcome {
            records,
            layout: TableLayout::VerticalCells,
            skipped_rows,
        })
    }
}

/// Finds a "first name" line with a "last name" line within the window below.
fn locate_name_pair(lines: &[String]) -> Option<(usize, usize)> {
    for (index, line) in lines.iter().enumerate() {
        let lower = line.trim().to_lowercase();
        if !(lower.contains("first name") || lower.contains("firstname")) {
            continue;
        }
        let window_end = (index + LAST_NAME_WINDOW + 1).min(lines.len());
        for candidate in index + 1..window_end {
            let candidate_lower = lines[candidate].trim().to_lowercase();
            if candidate_lower.contains("last name") || candidate_lower.contains("lastname") {
                return Some((index, candidate));
            }
        }
    }
    None
}

/// Whether a line reads as one of the known header labels.
fn is_header_token(line: &str) -> bool {
    ColumnRole::from_label(line).is_some()
}

/// Whether a line continues the previous header label rather than starting a
/// new column.
fn is_header_continuation(line: &str) -> bool {
    let lower = line.trim().to_lowercase();
    lower.starts_with('(') || lower.starts_with("or ") || lower.contains("reason for absence")
}
