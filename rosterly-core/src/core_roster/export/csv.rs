/*
    csv.rs - CSV serialization of user records

    The string-producing function is the portable contract: a fixed
    column order with conditional quoting, and dates rendered day-only
    in UTC. Writing the text to a file stands in for the browser
    download at the UI boundary.
*/

use crate::core_roster::model::UserRecord;
use chrono::{DateTime, Utc};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Header row, always the first line of an export
pub const CSV_HEADER: &str = "Name,Email,Date of Birth,Gender,Profile Picture,Created At,Updated At,ID";

/// Errors that can occur when exporting to a file
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the generated text failed
    #[error("Failed to write CSV file: {0}")]
    FileWrite(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWrite(err.to_string())
    }
}

/// Serialize records to CSV text. Infallible: absent values become empty
/// cells and every date renders as its UTC calendar day.
pub fn to_csv(records: &[UserRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for record in records {
        lines.push(record_row(record));
    }
    lines.join("\n")
}

/// Generate the CSV text and write it to `path`
pub fn write_csv_file(records: &[UserRecord], path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    std::fs::write(path, to_csv(records))?;
    info!(count = records.len(), path = %path.display(), "Wrote CSV export");
    Ok(())
}

fn record_row(record: &UserRecord) -> String {
    let cells = [
        escape_cell(&record.name),
        escape_cell(&record.email),
        escape_cell(&date_cell(record.date_of_birth)),
        escape_cell(record.gender.as_str()),
        escape_cell(record.profile_picture.as_deref().unwrap_or("")),
        escape_cell(&date_cell(record.created_at)),
        escape_cell(&date_cell(record.updated_at)),
        escape_cell(record.id.as_str()),
    ];
    cells.join(",")
}

fn date_cell(value: DateTime<Utc>) -> String {
    value.date_naive().format("%Y-%m-%d").to_string()
}

/// Quote-wrap and double internal quotes, but only when the value
/// contains a comma, a quote, or a newline
fn escape_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_plain_values_stay_bare() {
        assert_eq!(escape_cell("Ann"), "Ann");
        assert_eq!(escape_cell("ann@example.com"), "ann@example.com");
        assert_eq!(escape_cell(""), "");
    }

    #[test]
    fn test_special_values_are_quoted() {
        assert_eq!(escape_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_date_cell_uses_utc_day() {
        let late = Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap();
        assert_eq!(date_cell(late), "2024-03-10");

        let early = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 1).unwrap();
        assert_eq!(date_cell(early), "2024-03-10");
    }

    #[test]
    fn test_export_error_display() {
        let err = ExportError::FileWrite("permission denied".to_string());
        assert_eq!(err.to_string(), "Failed to write CSV file: permission denied");
    }
}
