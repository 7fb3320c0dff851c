//! Course-title extraction from the first line of roster text.
//!
//! Course lines routinely embed the session date or a time range
//! ("Safety Training January 5th, 2024", "Widgets 101  9:00am - 5:00pm").
//! The title is everything before the first embedded date when one exists at
//! a non-zero offset; otherwise every date-shaped and time-range substring is
//! stripped from the whole line. Either way the result is a best-effort
//! title, never an error.

use super::PATTERNS;

/// Derives a course title from the raw first line.
pub(crate) fn extract_course_name(raw_course_line: &str) -> String {
    if let Some(found) = PATTERNS.any_date.find(raw_course_line)
        && found.start() > 0
    {
        let cleaned = strip_trailing_separators(&raw_course_line[..found.start()]);
        if !cleaned.is_empty() {
            return cleaned;
        }
    }

    // Fallback: strip date-shaped and time-range substrings anywhere in the
    // line, then collapse the leftover gaps.
    let mut stripped = PATTERNS
        .iso_date
        .replace_all(raw_course_line, "")
        .into_owned();
    stripped = PATTERNS.us_date.replace_all(&stripped, "").into_owned();
    stripped = PATTERNS
        .month_name_date
        .replace_all(&stripped, "")
        .into_owned();
    stripped = PATTERNS.time_range.replace_all(&stripped, "").into_owned();
    let collapsed = PATTERNS.space_run.replace_all(&stripped, " ");
    strip_trailing_separators(&collapsed)
}

fn strip_trailing_separators(value: &str) -> String {
    PATTERNS
        .trailing_separators
        .replace(value, "")
        .trim()
        .to_string()
}
