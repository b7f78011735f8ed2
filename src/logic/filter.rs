//! Filter engine
//!
//! Pure predicates reducing a record set to the rows matching the free-text
//! search, per-column filters, and per-column date ranges. Order-preserving;
//! a record passes only when every active predicate accepts it.

use std::collections::HashMap;

use crate::logic::values::{parse_value_date, value_text, value_truthy};
use crate::model::types::{Column, ColumnKind, DateRange, Record};

/// Boolean column filter states cycled by the UI
pub const BOOL_FILTER_ALL: &str = "all";
pub const BOOL_FILTER_TRUE: &str = "true";
pub const BOOL_FILTER_FALSE: &str = "false";

/// Next state in the all -> true -> false cycle
pub fn cycle_boolean_filter(current: &str) -> &'static str {
    match current {
        BOOL_FILTER_ALL => BOOL_FILTER_TRUE,
        BOOL_FILTER_TRUE => BOOL_FILTER_FALSE,
        _ => BOOL_FILTER_ALL,
    }
}

/// Apply search, column, and date filters in that order.
///
/// Filtering is pure: the input is untouched and passing records keep their
/// relative order. Filtering an already-filtered set with the same arguments
/// yields the same set.
pub fn filter_records(
    records: &[Record],
    search_term: &str,
    column_filters: &HashMap<String, String>,
    date_filters: &HashMap<String, DateRange>,
    columns: &[Column],
) -> Vec<Record> {
    records
        .iter()
        .filter(|record| {
            matches_search(record, search_term, columns)
                && matches_column_filters(record, column_filters, columns)
                && matches_date_filters(record, date_filters)
        })
        .cloned()
        .collect()
}

/// Free-text search across searchable, non-boolean columns.
///
/// Case-insensitive substring match on the stringified value; null or absent
/// fields never match. An empty term passes everything.
pub fn matches_search(record: &Record, search_term: &str, columns: &[Column]) -> bool {
    if search_term.is_empty() {
        return true;
    }

    let needle = search_term.to_lowercase();
    columns
        .iter()
        .filter(|col| col.searchable && col.kind != ColumnKind::Boolean)
        .any(|col| {
            record
                .get(&col.key)
                .and_then(value_text)
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
}

/// Per-column filters: boolean columns interpret "all"/"true"/"false" against
/// field truthiness, all other columns do a case-insensitive substring match.
pub fn matches_column_filters(
    record: &Record,
    column_filters: &HashMap<String, String>,
    columns: &[Column],
) -> bool {
    column_filters.iter().all(|(key, raw)| {
        if raw.is_empty() {
            return true;
        }

        let is_boolean = columns
            .iter()
            .find(|col| col.key == *key)
            .map(|col| col.kind == ColumnKind::Boolean)
            .unwrap_or(false);

        let value = record.get(key);

        if is_boolean {
            match raw.as_str() {
                BOOL_FILTER_TRUE => value.map(value_truthy).unwrap_or(false),
                BOOL_FILTER_FALSE => !value.map(value_truthy).unwrap_or(false),
                // "all" and anything unrecognized pass
                _ => true,
            }
        } else {
            let needle = raw.to_lowercase();
            value
                .and_then(value_text)
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        }
    })
}

/// Date-range filters with inclusive end-of-day semantics.
///
/// A record with an unparseable (or missing) date field is excluded whenever
/// a bound is set for that column. `start` compares from 00:00:00 of its day;
/// `end` passes any time up to 23:59:59.999 of its day, so a record stamped
/// late on the `end` date still matches.
pub fn matches_date_filters(record: &Record, date_filters: &HashMap<String, DateRange>) -> bool {
    date_filters.iter().all(|(key, range)| {
        if range.is_empty() {
            return true;
        }

        let Some(record_dt) = record.get(key).and_then(parse_value_date) else {
            return false;
        };

        if let Some(start) = range.start {
            let Some(start_dt) = start.and_hms_opt(0, 0, 0) else {
                return false;
            };
            if record_dt < start_dt {
                return false;
            }
        }

        if let Some(end) = range.end {
            let Some(end_dt) = end.and_hms_milli_opt(23, 59, 59, 999) else {
                return false;
            };
            if record_dt > end_dt {
                return false;
            }
        }

        true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn record(fields: serde_json::Value) -> Record {
        fields.as_object().unwrap().clone()
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::text("name", "Name"),
            Column::boolean("active", "Active"),
            Column::date("created_at", "Created"),
            Column::text("token", "Token").not_searchable(),
        ]
    }

    #[test]
    fn test_empty_search_passes_all() {
        let rec = record(json!({"name": "Widget"}));
        assert!(matches_search(&rec, "", &columns()));
    }

    #[test]
    fn test_search_case_insensitive() {
        let rec = record(json!({"name": "Garden Hose"}));
        assert!(matches_search(&rec, "garden", &columns()));
        assert!(matches_search(&rec, "HOSE", &columns()));
        assert!(!matches_search(&rec, "sprinkler", &columns()));
    }

    #[test]
    fn test_search_skips_boolean_and_unsearchable_columns() {
        // "true" appears only in the boolean field; token is opted out
        let rec = record(json!({"name": "x", "active": true, "token": "truest"}));
        assert!(!matches_search(&rec, "true", &columns()));
    }

    #[test]
    fn test_search_null_never_matches() {
        let rec = record(json!({"name": null}));
        assert!(!matches_search(&rec, "null", &columns()));
    }

    #[test]
    fn test_boolean_filter_states() {
        let on = record(json!({"active": true}));
        let off = record(json!({"active": false}));
        let cols = columns();

        let mut filters = HashMap::new();
        filters.insert("active".to_string(), BOOL_FILTER_TRUE.to_string());
        assert!(matches_column_filters(&on, &filters, &cols));
        assert!(!matches_column_filters(&off, &filters, &cols));

        filters.insert("active".to_string(), BOOL_FILTER_FALSE.to_string());
        assert!(!matches_column_filters(&on, &filters, &cols));
        assert!(matches_column_filters(&off, &filters, &cols));

        filters.insert("active".to_string(), BOOL_FILTER_ALL.to_string());
        assert!(matches_column_filters(&on, &filters, &cols));
        assert!(matches_column_filters(&off, &filters, &cols));
    }

    #[test]
    fn test_text_filter_substring() {
        let rec = record(json!({"name": "Stainless Oven"}));
        let cols = columns();

        let mut filters = HashMap::new();
        filters.insert("name".to_string(), "oven".to_string());
        assert!(matches_column_filters(&rec, &filters, &cols));

        filters.insert("name".to_string(), "fridge".to_string());
        assert!(!matches_column_filters(&rec, &filters, &cols));
    }

    #[test]
    fn test_empty_filter_value_passes() {
        let rec = record(json!({"name": "x"}));
        let mut filters = HashMap::new();
        filters.insert("name".to_string(), String::new());
        assert!(matches_column_filters(&rec, &filters, &columns()));
    }

    #[test]
    fn test_date_end_bound_is_end_of_day() {
        let rec = record(json!({"created_at": "2024-03-15T23:00:00Z"}));
        let mut filters = HashMap::new();
        filters.insert(
            "created_at".to_string(),
            DateRange {
                start: None,
                end: NaiveDate::from_ymd_opt(2024, 3, 15),
            },
        );
        assert!(matches_date_filters(&rec, &filters));

        let next_day = record(json!({"created_at": "2024-03-16T00:00:00Z"}));
        assert!(!matches_date_filters(&next_day, &filters));
    }

    #[test]
    fn test_date_start_bound_is_start_of_day() {
        let rec = record(json!({"created_at": "2024-03-15T00:00:00Z"}));
        let mut filters = HashMap::new();
        filters.insert(
            "created_at".to_string(),
            DateRange {
                start: NaiveDate::from_ymd_opt(2024, 3, 15),
                end: None,
            },
        );
        assert!(matches_date_filters(&rec, &filters));

        let before = record(json!({"created_at": "2024-03-14T23:59:59Z"}));
        assert!(!matches_date_filters(&before, &filters));
    }

    #[test]
    fn test_unparseable_date_excluded() {
        let rec = record(json!({"created_at": "soonish"}));
        let mut filters = HashMap::new();
        filters.insert(
            "created_at".to_string(),
            DateRange {
                start: NaiveDate::from_ymd_opt(2024, 1, 1),
                end: None,
            },
        );
        assert!(!matches_date_filters(&rec, &filters));
    }

    #[test]
    fn test_filter_records_order_preserving() {
        let rows: Vec<Record> = ["cherry", "apple", "apricot"]
            .iter()
            .map(|n| record(json!({"name": n})))
            .collect();

        let filtered = filter_records(&rows, "ap", &HashMap::new(), &HashMap::new(), &columns());
        let names: Vec<&str> = filtered
            .iter()
            .map(|r| r.get("name").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["apple", "apricot"]);
    }

    #[test]
    fn test_cycle_boolean_filter() {
        assert_eq!(cycle_boolean_filter(BOOL_FILTER_ALL), BOOL_FILTER_TRUE);
        assert_eq!(cycle_boolean_filter(BOOL_FILTER_TRUE), BOOL_FILTER_FALSE);
        assert_eq!(cycle_boolean_filter(BOOL_FILTER_FALSE), BOOL_FILTER_ALL);
        assert_eq!(cycle_boolean_filter("junk"), BOOL_FILTER_ALL);
    }
}
