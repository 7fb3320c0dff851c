//! Start-date extraction from a line of roster text.
//!
//! Three date shapes are recognized, tried in order with the first match
//! winning: ISO (`2024-1-5`), US slash/dash (`1/5/2024`, `1-5-24`), and long
//! month name (`January 5th, 2024`). All three normalize to one canonical
//! `YYYY-MM-DD` output shape, so downstream grouping never sees two spellings
//! of the same session date.

use chrono::{Datelike, NaiveDate};

use super::PATTERNS;

/// Extracts a canonical `YYYY-MM-DD` date from a line of text, if any.
///
/// Two-digit US-style years are interpreted as `2000 + year`. Month-name
/// dates are validated by calendar construction and re-emitted from the
/// parsed year/month/day rather than the original substring, so ordinal
/// suffixes and abbreviations never leak into the output.
pub(crate) fn extract_start_date(input: &str) -> Option<String> {
    if let Some(caps) = PATTERNS.iso_date.captures(input) {
        let year: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return Some(normalize_ymd(year, month, day));
    }

    if let Some(caps) = PATTERNS.us_date.captures(input) {
        let month: u32 = caps[1].parse().ok()?;
        let day: u32 = caps[2].parse().ok()?;
        let mut year: u32 = caps[3].parse().ok()?;
        if year < 100 {
            year += 2000;
        }
        return Some(normalize_ymd(year, month, day));
    }

    if let Some(caps) = PATTERNS.month_name_date.captures(input) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        return Some(normalize_ymd(
            date.year() as u32,
            date.month(),
            date.day(),
        ));
    }

    None
}

fn normalize_ymd(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.to_lowercase().chars().take(3).collect();
    match prefix.as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalent_formats_share_one_canonical_output() {
        for input in [
            "2024-03-04",
            "2024-3-4",
            "3/4/2024",
            "3-4-24",
            "March 4th, 2024",
            "Mar 4 2024",
        ] {
            assert_eq!(
                extract_start_date(input).as_deref(),
                Some("2024-03-04"),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_extracts_date_embedded_in_prose() {
        assert_eq!(
            extract_start_date("Session runs 1/5/2024 through 1/9/2024").as_deref(),
            Some("2024-01-05")
        );
        assert_eq!(
            extract_start_date("Starts January 5, 2024 at 9am").as_deref(),
            Some("2024-01-05")
        );
    }

    #[test]
    fn test_two_digit_years_map_to_2000s() {
        assert_eq!(extract_start_date("12/31/99").as_deref(), Some("2099-12-31"));
        assert_eq!(extract_start_date("1-2-07").as_deref(), Some("2007-01-02"));
    }

    #[test]
    fn test_iso_takes_priority_over_us_style() {
        assert_eq!(
            extract_start_date("1/2/2024 or 2024-06-07").as_deref(),
            Some("2024-06-07")
        );
    }

    #[test]
    fn test_invalid_month_name_dates_are_rejected() {
        // February 30 fails calendar construction.
        assert_eq!(extract_start_date("February 30, 2024"), None);
    }

    #[test]
    fn test_no_date_yields_none() {
        assert_eq!(extract_start_date("Advanced Widgets"), None);
        assert_eq!(extract_start_date(""), None);
    }
}
