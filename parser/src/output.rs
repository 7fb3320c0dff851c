//! Output formatting for parse results.

use roster_core::{Delimiter, ParseResult, TableLayout};

/// Supported output formats.
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Formats a parse result in the requested output format.
pub fn format_result(result: &ParseResult, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(result).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(result_to_table(result)),
    }
}

/// Short label for a detected table layout.
pub fn layout_label(layout: Option<TableLayout>) -> &'static str {
    match layout {
        Some(TableLayout::Delimited(Delimiter::Tab)) => "delimited (tab)",
        Some(TableLayout::Delimited(Delimiter::SpaceRun)) => "delimited (spaces)",
        Some(TableLayout::VerticalCells) => "vertical cells",
        None => "none",
    }
}

fn result_to_table(result: &ParseResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Course: {}\n", result.course_name));
    out.push_str(&format!("Date:   {}\n", result.date));
    out.push_str(&format!("Layout: {}\n\n", layout_label(result.layout)));

    if result.records.is_empty() {
        out.push_str("no students found\n");
        return out;
    }

    out.push_str("Name\n");
    out.push_str("----\n");
    for record in &result.records {
        out.push_str(&record.name);
        out.push('\n');
    }
    out.push_str(&format!(
        "\n{} student(s), {} row(s) skipped\n",
        result.records.len(),
        result.skipped_rows
    ));
    out
}
