//! Tests for the table orchestrator
//!
//! Drives a TableView end to end the way the key handlers do: apply filters,
//! sort, select, and page, then read the derived visible set. Interaction
//! state must survive a data refresh and reset only when the view is rebuilt
//! for another resource.

use serde_json::json;

use admintui::model::types::{DateBound, Record, SortDirection};
use admintui::table::{PagingMode, TableView};
use admintui::resources::Resource;

fn record(fields: serde_json::Value) -> Record {
    fields.as_object().unwrap().clone()
}

fn product_rows() -> Vec<Record> {
    vec![
        record(json!({"id": "1", "name": "Cover Basic", "price": 40, "in_stock": true, "updated_at": "2026-01-10T08:00:00Z"})),
        record(json!({"id": "2", "name": "Cover Deluxe", "price": 90, "in_stock": false, "updated_at": "2026-02-05T12:00:00Z"})),
        record(json!({"id": "3", "name": "Roller", "price": 15, "in_stock": true, "updated_at": "2026-02-20T16:45:00Z"})),
    ]
}

#[test]
fn test_search_then_sort_pipeline() {
    let mut view = TableView::for_resource(Resource::Products);
    let rows = product_rows();

    view.set_search_term("cover".to_string());
    view.request_sort("price");
    let visible = view.visible_rows(&rows);

    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].get("name"), Some(&json!("Cover Basic")));
    assert_eq!(visible[1].get("name"), Some(&json!("Cover Deluxe")));
}

#[test]
fn test_sort_request_on_unsortable_column_is_ignored() {
    let mut view = TableView::for_resource(Resource::Products);
    view.request_sort("nonexistent");
    assert!(view.sort.is_none());
}

#[test]
fn test_sort_toggles_direction_on_repeat() {
    let mut view = TableView::for_resource(Resource::Products);
    view.request_sort("name");
    assert_eq!(view.sort.as_ref().unwrap().direction, SortDirection::Ascending);
    view.request_sort("name");
    assert_eq!(view.sort.as_ref().unwrap().direction, SortDirection::Descending);
}

/// Filters and selection survive a refresh because they live on the view,
/// not on the data
#[test]
fn test_interaction_state_survives_data_refresh() {
    let mut view = TableView::for_resource(Resource::Products);
    let rows = product_rows();

    view.set_column_filter("name", "Cover".to_string());
    let visible = view.visible_rows(&rows);
    view.toggle_row(&visible[0]);

    // Simulate a refresh delivering fresh copies of the same rows
    let refreshed = product_rows();
    let visible_after = view.visible_rows(&refreshed);
    assert_eq!(visible_after.len(), 2);
    assert_eq!(view.selected.len(), 1);
}

/// Select-all picks exactly the filtered set, then clears on repeat
#[test]
fn test_select_all_uses_filtered_set() {
    let mut view = TableView::for_resource(Resource::Products);
    let rows = product_rows();

    view.set_column_filter("name", "Cover".to_string());
    let visible = view.visible_rows(&rows);
    assert_eq!(visible.len(), 2);

    view.toggle_all(&visible);
    assert_eq!(view.selected.len(), 2);
    view.toggle_all(&visible);
    assert!(view.selected.is_empty());
}

#[test]
fn test_date_editor_applies_range() {
    let mut view = TableView::for_resource(Resource::Products);
    let rows = product_rows();

    view.open_date_filter("updated_at");
    {
        let editor = view.date_editor.as_mut().unwrap();
        editor.start_input = "2026-02-01".to_string();
        editor.focus = DateBound::End;
        editor.end_input = "2026-02-05".to_string();
    }
    view.apply_date_editor();

    assert!(view.date_editor.is_none());
    let visible = view.visible_rows(&rows);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].get("name"), Some(&json!("Cover Deluxe")));
}

/// Date editors only open for date columns
#[test]
fn test_date_editor_rejects_text_column() {
    let mut view = TableView::for_resource(Resource::Products);
    view.open_date_filter("name");
    assert!(view.date_editor.is_none());
}

#[test]
fn test_client_paging_slices_visible_set() {
    let mut view = TableView::for_resource(Resource::Products);
    view.paging = PagingMode::Client;
    view.client_window.limit = 2;
    view.client_window.total = 3;

    let rows = product_rows();
    let visible = view.visible_rows(&rows);
    assert_eq!(view.page_rows(&visible).len(), 2);

    assert!(view.client_window.set_page(2));
    assert_eq!(view.page_rows(&visible).len(), 1);
}

/// Server mode passes rows through untouched: the backend already sliced
#[test]
fn test_server_paging_is_passthrough() {
    let view = TableView::for_resource(Resource::Products);
    let rows = product_rows();
    assert_eq!(view.page_rows(&rows).len(), 3);
}
