//! Cell value formatting
//!
//! The explicit two-path design: [`display_value`] is what the screen shows
//! and honors a column's display override; [`export_value`] is what files
//! contain and always formats the raw typed value. Default formatting is a
//! per-kind function resolved once from the column's kind tag.

use serde_json::Value;

use crate::logic::values::{parse_value_date, value_text, value_truthy};
use crate::model::types::{Column, ColumnKind, Record};

impl ColumnKind {
    /// Default formatter for this kind, shared by display and export
    pub fn formatter(self) -> fn(&Value) -> String {
        match self {
            ColumnKind::Text => format_text,
            ColumnKind::Boolean => format_boolean,
            ColumnKind::Date => format_date,
        }
    }
}

fn format_text(value: &Value) -> String {
    value_text(value).unwrap_or_default()
}

fn format_boolean(value: &Value) -> String {
    if value_truthy(value) { "Yes" } else { "No" }.to_string()
}

/// Date plus time; falls back to the raw text when the value won't parse
fn format_date(value: &Value) -> String {
    match parse_value_date(value) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => value_text(value).unwrap_or_default(),
    }
}

/// On-screen cell text: the column's display override when present,
/// otherwise the kind's default formatter. Missing fields render empty.
pub fn display_value(column: &Column, row: &Record) -> String {
    let value = row.get(&column.key).unwrap_or(&Value::Null);
    match column.display {
        Some(display) => display(value, row),
        None => (column.kind.formatter())(value),
    }
}

/// Exported cell text: always the kind's default formatter over the raw
/// value. Display overrides are intentionally not consulted here.
pub fn export_value(column: &Column, row: &Record) -> String {
    let value = row.get(&column.key).unwrap_or(&Value::Null);
    (column.kind.formatter())(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: serde_json::Value) -> Record {
        fields.as_object().unwrap().clone()
    }

    #[test]
    fn test_boolean_yes_no() {
        let col = Column::boolean("active", "Active");
        assert_eq!(display_value(&col, &record(json!({"active": true}))), "Yes");
        assert_eq!(display_value(&col, &record(json!({"active": false}))), "No");
        // Missing field is falsy
        assert_eq!(display_value(&col, &record(json!({}))), "No");
    }

    #[test]
    fn test_date_formatting_and_fallback() {
        let col = Column::date("created_at", "Created");
        assert_eq!(
            display_value(&col, &record(json!({"created_at": "2024-03-15T08:30:00Z"}))),
            "2024-03-15 08:30:00"
        );
        assert_eq!(
            display_value(&col, &record(json!({"created_at": "pending"}))),
            "pending"
        );
    }

    #[test]
    fn test_display_override_is_screen_only() {
        fn shout(value: &Value, _row: &Record) -> String {
            format!("<<{}>>", value.as_str().unwrap_or(""))
        }

        let col = Column::text("name", "Name").with_display(shout);
        let row = record(json!({"name": "widget"}));

        assert_eq!(display_value(&col, &row), "<<widget>>");
        // Export keeps the raw value
        assert_eq!(export_value(&col, &row), "widget");
    }

    #[test]
    fn test_text_formats_numbers_plainly() {
        let col = Column::text("qty", "Qty");
        assert_eq!(display_value(&col, &record(json!({"qty": 42}))), "42");
    }
}
