//! Table actions that touch the outside world: exports, deletes, detail
//! fetches. Pure row manipulation lives in the logic modules; these wrap it
//! with API requests and filesystem writes.

use std::fs;

use anyhow::{Context, Result};

use crate::log_debug;
use crate::logic::export::{export_file_name, to_csv, to_workbook};
use crate::services::api::ApiRequest;

use super::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl App {
    /// Write every visible row (all filters applied, all pages) to a file
    /// in the export directory. Display overrides are ignored; exports carry
    /// raw formatted values.
    pub fn export_visible(&mut self, format: ExportFormat) {
        match self.write_export(format) {
            Ok(name) => self.model.show_toast(format!("Exported {}", name)),
            Err(e) => {
                log_debug(&format!("export failed: {:#}", e));
                self.model.show_toast(format!("Error: {}", e));
            }
        }
    }

    fn write_export(&self, format: ExportFormat) -> Result<String> {
        let rows = self.model.visible_rows();
        let columns = &self.model.table.columns;
        let name = export_file_name(&self.model.table.title, format.extension());
        let path = self.export_dir.join(&name);
        match format {
            ExportFormat::Csv => {
                let text = to_csv(&rows, columns)?;
                fs::write(&path, text)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            ExportFormat::Xlsx => {
                let bytes = to_workbook(&rows, columns)?;
                fs::write(&path, bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
        Ok(name)
    }

    /// Ask for confirmation before deleting the row under the cursor
    pub fn confirm_delete_cursor_row(&mut self) {
        let visible = self.model.visible_rows();
        let rows = self.model.table.page_rows(&visible);
        let Some(row) = self.model.table.cursor_row(&rows) else {
            return;
        };
        let Some(id) = row
            .get(self.model.table.key_field.as_str())
            .and_then(crate::logic::values::value_text)
        else {
            self.model.show_toast("Row has no id".to_string());
            return;
        };
        let label = row
            .get("name")
            .or_else(|| row.get("title"))
            .or_else(|| row.get("email"))
            .and_then(crate::logic::values::value_text)
            .unwrap_or_else(|| id.clone());
        self.model.ui.confirm_delete = Some((id, label));
    }

    pub fn delete_confirmed(&mut self) {
        if let Some((id, _)) = self.model.ui.confirm_delete.take() {
            let _ = self.api_tx.send(ApiRequest::DeleteRecord {
                resource: self.model.data.resource,
                id,
            });
        }
    }

    /// Fetch full detail for the row under the cursor
    pub fn view_cursor_row(&mut self) {
        let visible = self.model.visible_rows();
        let rows = self.model.table.page_rows(&visible);
        let Some(row) = self.model.table.cursor_row(&rows) else {
            return;
        };
        let Some(id) = row
            .get(self.model.table.key_field.as_str())
            .and_then(crate::logic::values::value_text)
        else {
            return;
        };
        let _ = self.api_tx.send(ApiRequest::GetDetail {
            resource: self.model.data.resource,
            id,
        });
    }
}
