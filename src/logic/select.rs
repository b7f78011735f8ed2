//! Selection tracker
//!
//! Row selection keyed by a configurable field, compared by value rather
//! than identity: callers refetch record arrays wholesale, so the same row
//! arrives as a fresh allocation on every refresh.

use crate::model::types::Record;

/// Whether two records carry the same key-field value
pub fn key_equals(a: &Record, b: &Record, key_field: &str) -> bool {
    match (a.get(key_field), b.get(key_field)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Whether a row is currently selected
pub fn is_selected(selected: &[Record], row: &Record, key_field: &str) -> bool {
    selected.iter().any(|s| key_equals(s, row, key_field))
}

/// Toggle one row: remove it when a record with the same key-field value is
/// already selected, otherwise append the full row.
pub fn toggle_row(selected: Vec<Record>, row: &Record, key_field: &str) -> Vec<Record> {
    if is_selected(&selected, row, key_field) {
        selected
            .into_iter()
            .filter(|s| !key_equals(s, row, key_field))
            .collect()
    } else {
        let mut selected = selected;
        selected.push(row.clone());
        selected
    }
}

/// Toggle all rows, scoped to what the user can currently see.
///
/// When every visible (post-filter, post-sort) row is selected, clear the
/// selection; otherwise replace it with exactly the visible rows. Hidden or
/// filtered-out rows are never selected silently.
pub fn toggle_all(visible: &[Record], selected: Vec<Record>) -> Vec<Record> {
    if selected.len() == visible.len() {
        Vec::new()
    } else {
        visible.to_vec()
    }
}
