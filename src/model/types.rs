//! Core table data types
//!
//! Declarative column model plus the small value types the table engines
//! share: sort configuration, date-range filters, and the record alias.

use chrono::NaiveDate;
use serde_json::Value;

/// One row of domain data, an opaque field-name -> value mapping.
///
/// Rows are identified by a caller-specified key field (usually `"id"`).
/// Key uniqueness within a record set is a caller invariant; duplicate keys
/// make selection and row identity ambiguous.
pub type Record = serde_json::Map<String, Value>;

/// Pure display override for one cell: `(value, row) -> text`.
///
/// Fully replaces default on-screen rendering for the column. Never consulted
/// by the export path, which always formats the raw typed value.
pub type DisplayFn = fn(&Value, &Record) -> String;

/// Value type of a column, driving comparison, filtering, and formatting.
///
/// Resolved once per column definition; every engine dispatches on this tag
/// instead of re-deriving behavior per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Boolean,
    Date,
}

/// Declarative description of one data column.
///
/// `key` addresses a top-level field on [`Record`] (direct lookup, no dotted
/// paths). Pure configuration, no behavior.
#[derive(Debug, Clone)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub filterable: bool,
    /// Whether free-text search scans this column (boolean columns never do)
    pub searchable: bool,
    /// Fixed render width in cells (None = share remaining space)
    pub width: Option<u16>,
    pub display: Option<DisplayFn>,
}

impl Column {
    pub fn new(key: &str, label: &str, kind: ColumnKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            sortable: true,
            filterable: true,
            searchable: true,
            width: None,
            display: None,
        }
    }

    /// Text column with default flags
    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnKind::Text)
    }

    /// Boolean column (filters cycle all/true/false, search skips it)
    pub fn boolean(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnKind::Boolean)
    }

    /// Date column (timestamp comparison, range filtering)
    pub fn date(key: &str, label: &str) -> Self {
        Self::new(key, label, ColumnKind::Date)
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_display(mut self, display: DisplayFn) -> Self {
        self.display = Some(display);
        self
    }
}

/// Sort direction for a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn indicator(&self) -> &str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort: one column at a time, no multi-key sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

/// Date-range filter bounds for one column.
///
/// An absent bound is unbounded on that side. `start` compares from the start
/// of its day, `end` is inclusive through 23:59:59.999 of its day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Which bound of a date-range filter an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builders() {
        let col = Column::boolean("active", "Active").not_sortable().width(8);
        assert_eq!(col.kind, ColumnKind::Boolean);
        assert!(!col.sortable);
        assert!(col.filterable);
        assert_eq!(col.width, Some(8));
    }

    #[test]
    fn test_date_range_emptiness() {
        let mut range = DateRange::default();
        assert!(range.is_empty());

        range.end = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert!(!range.is_empty());
    }
}
