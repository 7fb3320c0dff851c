//! Heuristic roster-table parser for converted document text.
//!
//! Text produced by Word/PDF extraction carries no schema: the same logical
//! sign-in table arrives as a delimited line-per-row dump, or as one cell per
//! physical line, mixed with attestation boilerplate and repeated page
//! headers. This module locates a usable first/last-name header, infers the
//! column layout, and emits validated [`StudentRecord`]s:
//!
//! - **Delimited** — header columns on a single line, split on tabs or
//!   multi-space runs.
//! - **Vertical cells** — each table cell on its own line, reconstructed as a
//!   fixed-width row cycle (the common PDF text-layer shape).
//!
//! # Architecture
//!
//! Strategies are attempted in fixed priority order and are independent and
//! side-effect-free; the first one that yields records wins. Delimited
//! detection is cheaper and more reliable when applicable, so it always takes
//! precedence even when leftover lines would also match the vertical shape.
//! Session metadata (course title, start date) is inferred from the first two
//! lines before any strategy runs.
//!
//! The primary entry point is [`RosterParser::new`] followed by
//! [`RosterParser::parse`], but most consumers should use the higher-level
//! [`parse_roster_text`](crate::parse_roster_text) function instead.
//!
//! [`StudentRecord`]: roster_core::StudentRecord

mod course;
mod date;
mod normalize;
mod strategies;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use roster_core::{ParseResult, UNKNOWN_DATE};

use strategies::RosterStrategy;

/// Month-name alternation shared by the date-shaped patterns.
const MONTH_NAMES: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|\
jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

/// Regex patterns for roster text extraction.
pub(crate) static PATTERNS: LazyLock<RosterPatterns> = LazyLock::new(RosterPatterns::new);

pub(crate) struct RosterPatterns {
    /// ISO date with 1-2 digit month/day: 2024-1-5
    pub(crate) iso_date: Regex,
    /// US-style date: 1/5/2024, 1-5-24
    pub(crate) us_date: Regex,
    /// Long month name with optional ordinal suffix: January 5th, 2024
    pub(crate) month_name_date: Regex,
    /// Any of the three date shapes, for locating dates inside a course line.
    pub(crate) any_date: Regex,
    /// Bounded time range: 9:00am - 5:00pm
    pub(crate) time_range: Regex,
    /// Column boundary in space-delimited rows.
    pub(crate) space_run: Regex,
    /// Separator/whitespace tail trimmed off course titles.
    pub(crate) trailing_separators: Regex,
}

impl RosterPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime condition.
        Self {
            iso_date: Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b")
                .expect("static regex must compile"),
            us_date: Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b")
                .expect("static regex must compile"),
            month_name_date: Regex::new(&format!(
                r"(?i)\b({MONTH_NAMES})\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b"
            ))
            .expect("static regex must compile"),
            any_date: Regex::new(&format!(
                r"(?i)\b\d{{4}}-\d{{1,2}}-\d{{1,2}}\b|\b\d{{1,2}}[/-]\d{{1,2}}[/-]\d{{2,4}}\b|\b(?:{MONTH_NAMES})\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"
            ))
            .expect("static regex must compile"),
            time_range: Regex::new(
                r"(?i)\b\d{1,2}:\d{2}(?:\s*[ap]m)?\s*[-–—]\s*\d{1,2}:\d{2}(?:\s*[ap]m)?\b",
            )
            .expect("static regex must compile"),
            space_run: Regex::new(r"\s{2,}").expect("static regex must compile"),
            trailing_separators: Regex::new(r"[-–—|\s]+$").expect("static regex must compile"),
        }
    }
}

/// Parser for one roster document's extracted text.
///
/// Pure and deterministic: parsing the same text twice yields an identical
/// ordered result. All failure modes resolve to fewer records, never to an
/// error — converted text is inherently untrustworthy.
pub struct RosterParser {
    raw_text: String,
}

impl RosterParser {
    /// Creates a parser over raw extracted text.
    pub fn new(text: &str) -> Self {
        Self {
            raw_text: text.to_string(),
        }
    }

    /// Parses the text into an ordered sequence of student records.
    ///
    /// Lines are normalized first (trailing whitespace trimmed, blank lines
    /// dropped). Fewer than two remaining lines terminates with an empty
    /// result. The course title comes from line 0; the session date from
    /// line 1, falling back to line 0, then to
    /// [`UNKNOWN_DATE`](roster_core::UNKNOWN_DATE).
    pub fn parse(&self) -> ParseResult {
        let lines = normalize::normalize_lines(&self.raw_text);
        if lines.len() < 2 {
            debug!(lines = lines.len(), "too few lines for a roster");
            return ParseResult::empty();
        }

        let course_line = lines[0].trim();
        let date = date::extract_start_date(&lines[1])
            .or_else(|| date::extract_start_date(course_line))
            .unwrap_or_else(|| UNKNOWN_DATE.to_string());
        let course_name = course::extract_course_name(course_line);
        debug!(course = %course_name, date = %date, "extracted session metadata");

        let delimited = strategies::delimited::DelimitedStrategy;
        let vertical = strategies::vertical::VerticalCellStrategy;
        let ordered: [&dyn RosterStrategy; 2] = [&delimited, &vertical];

        for strategy in ordered {
            let Some(outcome) = strategy.extract(&lines, &course_name, &date) else {
                continue;
            };
            if outcome.records.is_empty() {
                debug!(strategy = strategy.name(), "layout matched but produced no rows");
                continue;
            }
            debug!(
                strategy = strategy.name(),
                rows = outcome.records.len(),
                skipped = outcome.skipped_rows,
                "strategy produced records"
            );
            return ParseResult {
                records: outcome.records,
                course_name,
                date,
                layout: Some(outcome.layout),
                skipped_rows: outcome.skipped_rows,
            };
        }

        debug!("no usable roster header found");
        ParseResult {
            records: Vec::new(),
            course_name,
            date,
            layout: None,
            skipped_rows: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use roster_core::{Delimiter, TableLayout};

    use super::*;

    #[test]
    fn test_parse_tab_delimited_roster() {
        let text = "Intro to Widgets  3/4/2024\nFirst Name\tLast Name\nJane\tDoe\nJohn\tSmith";
        let result = RosterParser::new(text).parse();

        assert_eq!(result.course_name, "Intro to Widgets");
        assert_eq!(result.date, "2024-03-04");
        assert_eq!(result.layout, Some(TableLayout::Delimited(Delimiter::Tab)));
        let names: Vec<&str> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Jane Doe", "John Smith"]);
        for record in &result.records {
            assert_eq!(record.course_name, "Intro to Widgets");
            assert_eq!(record.date, "2024-03-04");
        }
    }

    #[test]
    fn test_parse_requires_two_lines() {
        assert!(RosterParser::new("").parse().records.is_empty());
        assert!(RosterParser::new("Course Title Only").parse().records.is_empty());
        assert!(RosterParser::new("\n\n   \n").parse().records.is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "Safety Training\nJanuary 5th, 2024\nFirst Name  Last Name\nJane  Doe\nJohn  Smith";
        let parser = RosterParser::new(text);
        let first = parser.parse();
        let second = parser.parse();
        assert_eq!(first.records, second.records);
        assert_eq!(first.course_name, second.course_name);
        assert_eq!(first.date, second.date);
    }

    #[test]
    fn test_date_falls_back_to_course_line_then_unknown() {
        let with_course_date =
            RosterParser::new("Widgets 101 - 2024-06-01\nInstructor: Smith\nno table here").parse();
        assert_eq!(with_course_date.date, "2024-06-01");

        let dateless = RosterParser::new("Widgets 101\nInstructor: Smith\nno table here").parse();
        assert_eq!(dateless.date, UNKNOWN_DATE);
    }

    #[test]
    fn test_delimited_takes_precedence_over_vertical() {
        // Trailing one-cell-per-line content must not override a delimited hit.
        let text = "Widgets 101  5/6/2024\n\
                    First Name\tLast Name\n\
                    Jane\tDoe\n\
                    First Name\n\
                    Last Name\n\
                    John\n\
                    Smith";
        let result = RosterParser::new(text).parse();
        assert_eq!(result.layout, Some(TableLayout::Delimited(Delimiter::Tab)));
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name, "Jane Doe");
    }

    #[test]
    fn test_no_header_yields_empty_result_with_metadata() {
        let result = RosterParser::new("Widgets 101  5/6/2024\nsome prose\nmore prose").parse();
        assert!(result.records.is_empty());
        assert!(result.layout.is_none());
        assert_eq!(result.course_name, "Widgets 101");
        assert_eq!(result.date, "2024-05-06");
    }
}
