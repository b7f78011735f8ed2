//! Table orchestrator
//!
//! Owns the interaction state every list screen shares (search term, column
//! filters, date-range filters, sort, selection, the open date-filter editor,
//! cursor and column focus) and derives the visible row set as
//! `sort(filter(data))`. Interaction state persists across data refreshes by
//! design; it resets only when the view is rebuilt for another resource.

use std::collections::HashMap;

use chrono::NaiveDate;
use ratatui::widgets::TableState;

use crate::logic::filter::{cycle_boolean_filter, filter_records, BOOL_FILTER_ALL};
use crate::logic::paging::{slice_page, PageWindow};
use crate::logic::select::{toggle_all, toggle_row};
use crate::logic::sort::{next_sort_config, sort_records};
use crate::model::types::{
    Column, ColumnKind, DateBound, DateRange, Record, SortConfig,
};
use crate::resources::Resource;

/// Whether the server or the orchestrator slices pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    /// List endpoints return one page at a time; visible rows pass through
    Server,
    /// The full set is in memory; the orchestrator slices it
    Client,
}

/// Open date-filter editor: one at a time, for one date column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilterEditor {
    pub key: String,
    pub start_input: String,
    pub end_input: String,
    pub focus: DateBound,
}

/// Interaction state and derivation pipeline for one list screen
#[derive(Debug, Clone)]
pub struct TableView {
    pub columns: Vec<Column>,
    pub key_field: String,
    pub title: String,
    pub paging: PagingMode,

    pub search_term: String,
    pub column_filters: HashMap<String, String>,
    pub date_filters: HashMap<String, DateRange>,
    pub sort: Option<SortConfig>,
    pub selected: Vec<Record>,
    pub date_editor: Option<DateFilterEditor>,

    /// Client-side paging window (unused in Server mode)
    pub client_window: PageWindow,

    /// Row cursor for the rendered table
    pub cursor: TableState,
    /// Index of the focused column (filter/sort target)
    pub focused_column: usize,
}

impl TableView {
    pub fn new(columns: Vec<Column>, key_field: &str, title: &str, paging: PagingMode) -> Self {
        let mut cursor = TableState::default();
        cursor.select(Some(0));
        Self {
            columns,
            key_field: key_field.to_string(),
            title: title.to_string(),
            paging,
            search_term: String::new(),
            column_filters: HashMap::new(),
            date_filters: HashMap::new(),
            sort: None,
            selected: Vec::new(),
            date_editor: None,
            client_window: PageWindow::new(10),
            cursor,
            focused_column: 0,
        }
    }

    /// Fresh view configured from a resource's declarative column model
    pub fn for_resource(resource: Resource) -> Self {
        Self::new(
            resource.columns(),
            resource.key_field(),
            resource.title(),
            PagingMode::Server,
        )
    }

    // ========================================================================
    // DERIVATION PIPELINE
    // ========================================================================

    /// Filter then sort: the set the user sees, exports, and selects against
    pub fn visible_rows(&self, data: &[Record]) -> Vec<Record> {
        let filtered = filter_records(
            data,
            &self.search_term,
            &self.column_filters,
            &self.date_filters,
            &self.columns,
        );
        sort_records(filtered, self.sort.as_ref(), &self.columns)
    }

    /// Visible rows for the current page: a slice in Client mode, passthrough
    /// in Server mode (the backend already sliced).
    pub fn page_rows(&self, visible: &[Record]) -> Vec<Record> {
        match self.paging {
            PagingMode::Server => visible.to_vec(),
            PagingMode::Client => slice_page(
                visible,
                self.client_window.page,
                self.client_window.limit,
            )
            .to_vec(),
        }
    }

    /// Row under the cursor within the visible set
    pub fn cursor_row(&self, visible: &[Record]) -> Option<Record> {
        self.cursor
            .selected()
            .and_then(|idx| visible.get(idx))
            .cloned()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self.column_filters.values().any(|v| !v.is_empty() && v != BOOL_FILTER_ALL)
            || self.date_filters.values().any(|r| !r.is_empty())
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn set_column_filter(&mut self, key: &str, value: String) {
        if value.is_empty() {
            self.column_filters.remove(key);
        } else {
            self.column_filters.insert(key.to_string(), value);
        }
    }

    /// Advance a boolean column's filter through all -> true -> false
    pub fn cycle_boolean_filter(&mut self, key: &str) {
        let current = self
            .column_filters
            .get(key)
            .map(String::as_str)
            .unwrap_or(BOOL_FILTER_ALL);
        let next = cycle_boolean_filter(current);
        if next == BOOL_FILTER_ALL {
            self.column_filters.remove(key);
        } else {
            self.column_filters.insert(key.to_string(), next.to_string());
        }
    }

    pub fn clear_column_filter(&mut self, key: &str) {
        self.column_filters.remove(key);
    }

    pub fn set_date_filter(&mut self, key: &str, bound: DateBound, value: Option<NaiveDate>) {
        let range = self.date_filters.entry(key.to_string()).or_default();
        match bound {
            DateBound::Start => range.start = value,
            DateBound::End => range.end = value,
        }
        if range.is_empty() {
            self.date_filters.remove(key);
        }
    }

    pub fn clear_date_filter(&mut self, key: &str) {
        self.date_filters.remove(key);
    }

    /// Toggle sort on a column: same column flips direction, a new column
    /// starts ascending. Unsortable columns are ignored.
    pub fn request_sort(&mut self, key: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|col| col.key == key && col.sortable);
        if !sortable {
            return;
        }
        self.sort = Some(next_sort_config(self.sort.as_ref(), key));
    }

    pub fn toggle_row(&mut self, row: &Record) {
        self.selected = toggle_row(std::mem::take(&mut self.selected), row, &self.key_field);
    }

    /// Select or clear all currently visible rows (never the hidden ones)
    pub fn toggle_all(&mut self, visible: &[Record]) {
        self.selected = toggle_all(visible, std::mem::take(&mut self.selected));
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    // ========================================================================
    // DATE-FILTER EDITOR (one open at a time)
    // ========================================================================

    /// Open the date-range editor for a date column, replacing any other open
    /// editor. Pre-fills inputs from the active filter so edits are additive.
    pub fn open_date_filter(&mut self, key: &str) {
        let is_date = self
            .columns
            .iter()
            .any(|col| col.key == key && col.kind == ColumnKind::Date);
        if !is_date {
            return;
        }

        let existing = self.date_filters.get(key).copied().unwrap_or_default();
        self.date_editor = Some(DateFilterEditor {
            key: key.to_string(),
            start_input: existing
                .start
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            end_input: existing
                .end
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            focus: DateBound::Start,
        });
    }

    pub fn close_date_filter(&mut self) {
        self.date_editor = None;
    }

    /// Apply the open editor's inputs as the column's date filter and close
    /// it. Blank or unparseable inputs leave that bound unset.
    pub fn apply_date_editor(&mut self) {
        let Some(editor) = self.date_editor.take() else {
            return;
        };

        let parse = |input: &str| NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok();
        self.set_date_filter(&editor.key, DateBound::Start, parse(&editor.start_input));
        self.set_date_filter(&editor.key, DateBound::End, parse(&editor.end_input));
    }

    // ========================================================================
    // FOCUS / CURSOR
    // ========================================================================

    pub fn focused_column(&self) -> Option<&Column> {
        self.columns.get(self.focused_column)
    }

    pub fn focus_next_column(&mut self) {
        if !self.columns.is_empty() {
            self.focused_column = (self.focused_column + 1) % self.columns.len();
        }
    }

    pub fn focus_prev_column(&mut self) {
        if !self.columns.is_empty() {
            self.focused_column =
                (self.focused_column + self.columns.len() - 1) % self.columns.len();
        }
    }

    pub fn cursor_down(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.cursor.select(None);
            return;
        }
        let next = match self.cursor.selected() {
            Some(idx) if idx + 1 < visible_len => idx + 1,
            Some(idx) => idx,
            None => 0,
        };
        self.cursor.select(Some(next));
    }

    pub fn cursor_up(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.cursor.select(None);
            return;
        }
        let next = self.cursor.selected().map(|idx| idx.saturating_sub(1)).unwrap_or(0);
        self.cursor.select(Some(next));
    }

    /// Keep the cursor within the visible set after filters change
    pub fn clamp_cursor(&mut self, visible_len: usize) {
        if visible_len == 0 {
            self.cursor.select(None);
        } else {
            match self.cursor.selected() {
                Some(idx) if idx < visible_len => {}
                _ => self.cursor.select(Some(visible_len.saturating_sub(1))),
            }
        }
    }
}
