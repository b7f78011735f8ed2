//! Export engine
//!
//! Serializes the currently visible (filtered + sorted) row set into
//! delimited text and a single-sheet spreadsheet workbook. Export is never
//! paginated and never consults display overrides; cells are formatted by
//! [`crate::logic::format::export_value`].

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::logic::format::export_value;
use crate::model::types::{Column, Record};

/// Render rows as CSV with a header row of column labels.
///
/// Values containing the delimiter, quotes, or newlines are quoted/escaped by
/// the writer, so the output round-trips.
pub fn to_csv(rows: &[Record], columns: &[Column]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(columns.iter().map(|col| col.label.as_str()))
        .context("Failed to write CSV header")?;

    for row in rows {
        writer
            .write_record(columns.iter().map(|col| export_value(col, row)))
            .context("Failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Render rows as an XLSX workbook: one sheet, label header row, data rows.
pub fn to_workbook(rows: &[Record], columns: &[Column]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col_idx, column) in columns.iter().enumerate() {
        worksheet
            .write_string(0, col_idx as u16, &column.label)
            .context("Failed to write workbook header")?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, column) in columns.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32 + 1, col_idx as u16, export_value(column, row))
                .context("Failed to write workbook cell")?;
        }
    }

    workbook
        .save_to_buffer()
        .context("Failed to serialize workbook")
}

/// Output file name: table title with whitespace collapsed to underscores
/// plus a fixed `_export` suffix and the format extension.
pub fn export_file_name(title: &str, extension: &str) -> String {
    let stem: String = title.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_export.{}", stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: serde_json::Value) -> Record {
        fields.as_object().unwrap().clone()
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::text("name", "Name"),
            Column::boolean("published", "Published"),
            Column::date("created_at", "Created At"),
        ]
    }

    #[test]
    fn test_csv_header_is_labels_in_order() {
        let csv = to_csv(&[], &columns()).unwrap();
        assert_eq!(csv.lines().next().unwrap(), "Name,Published,Created At");
    }

    #[test]
    fn test_csv_boolean_and_date_cells() {
        let rows = vec![record(json!({
            "name": "Oven",
            "published": true,
            "created_at": "2024-03-15T08:30:00Z",
        }))];
        let csv = to_csv(&rows, &columns()).unwrap();
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "Oven,Yes,2024-03-15 08:30:00"
        );
    }

    #[test]
    fn test_csv_escapes_delimiters_and_quotes() {
        let rows = vec![record(json!({
            "name": "Fridge, 300l \"frost-free\"",
            "published": false,
        }))];
        let csv = to_csv(&rows, &columns()).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert!(line.starts_with("\"Fridge, 300l \"\"frost-free\"\"\""));
    }

    #[test]
    fn test_workbook_bytes_are_zip() {
        let rows = vec![record(json!({"name": "x", "published": true}))];
        let bytes = to_workbook(&rows, &columns()).unwrap();
        // XLSX is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_file_name_derivation() {
        assert_eq!(export_file_name("Product List", "csv"), "Product_List_export.csv");
        assert_eq!(export_file_name("Enquiries", "xlsx"), "Enquiries_export.xlsx");
        assert_eq!(export_file_name("a  b\tc", "csv"), "a_b_c_export.csv");
    }
}
