//! Line normalization for converted document text.

/// Splits raw text into trimmed, non-blank lines.
///
/// Trailing whitespace is stripped per line and blank lines are discarded
/// before any other stage runs; ordering is preserved. Carriage returns from
/// Windows-style or classic-Mac line endings are treated as separators.
pub(crate) fn normalize_lines(raw: &str) -> Vec<String> {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_blank_lines_and_trims_trailing_whitespace() {
        let lines = normalize_lines("first   \n\n   \nsecond\t\n");
        assert_eq!(lines, ["first", "second"]);
    }

    #[test]
    fn test_handles_crlf_and_bare_cr() {
        let lines = normalize_lines("one\r\ntwo\rthree");
        assert_eq!(lines, ["one", "two", "three"]);
    }

    #[test]
    fn test_preserves_leading_whitespace_and_order() {
        let lines = normalize_lines("  indented\nplain");
        assert_eq!(lines, ["  indented", "plain"]);
    }
}
