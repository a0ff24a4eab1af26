//! CSV export of application records.

/// Download name offered in `Content-Disposition`.
pub const EXPORT_FILENAME: &str = "applications.csv";

/// Header row, in data-model order.
pub const APPLICATION_CSV_COLUMNS: &[&str] = &[
    "full_name",
    "usn",
    "branch_semester",
    "email",
    "phone",
    "skillset",
    "experience_level",
    "has_projects",
    "portfolio_link",
    "weekly_hours",
    "communication_platform",
    "gaming_preferences",
    "join_reason",
    "has_computer",
    "id",
    "created_at",
];

/// Separator for multi-valued cells (the skillset).
pub const MULTI_VALUE_SEPARATOR: &str = ";";

/// A record that can be rendered as one CSV row.
///
/// `csv_fields` must return exactly one cell per entry in
/// [`APPLICATION_CSV_COLUMNS`], in the same order, unescaped.
pub trait CsvRecord {
    fn csv_fields(&self) -> Vec<String>;
}

/// Quote a cell if it contains a delimiter, quote, or line break.
pub fn csv_escape(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Build the CSV document: one header row, then one row per record.
pub fn build_csv<R: CsvRecord>(records: &[R]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(APPLICATION_CSV_COLUMNS.join(","));

    for record in records {
        let row: Vec<String> = record
            .csv_fields()
            .iter()
            .map(|cell| csv_escape(cell))
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Render an optional text cell; absent values become empty cells.
pub fn optional_cell(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
