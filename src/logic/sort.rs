//! Sort engine
//!
//! Stable, type-aware ordering of a record set by one column. Comparison
//! never panics: unparseable dates and mixed-type values compare as equal,
//! which leaves their relative input order intact (the sort is stable).

use std::cmp::Ordering;

use crate::logic::values::{parse_value_date, value_truthy};
use crate::model::types::{Column, ColumnKind, Record, SortConfig, SortDirection};

/// Order records by the configured column, or return them unchanged when no
/// sort is active (original fetch order).
pub fn sort_records(
    mut records: Vec<Record>,
    sort: Option<&SortConfig>,
    columns: &[Column],
) -> Vec<Record> {
    let Some(sort) = sort else {
        return records;
    };

    let kind = columns
        .iter()
        .find(|col| col.key == sort.key)
        .map(|col| col.kind)
        .unwrap_or(ColumnKind::Text);

    // Vec::sort_by is stable; ties keep their input order
    records.sort_by(|a, b| {
        let ordering = compare_field(a.get(&sort.key), b.get(&sort.key), kind);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    records
}

/// Compare two field values under a column kind.
///
/// Date columns compare parsed timestamps; boolean columns compare truthiness
/// as 0/1; text columns compare numbers numerically and strings lexically.
/// Ordering across mixed JSON types is undefined and resolves to Equal.
pub fn compare_field(
    a: Option<&serde_json::Value>,
    b: Option<&serde_json::Value>,
    kind: ColumnKind,
) -> Ordering {
    use serde_json::Value;

    match kind {
        ColumnKind::Date => {
            let a_ts = a.and_then(parse_value_date);
            let b_ts = b.and_then(parse_value_date);
            match (a_ts, b_ts) {
                (Some(a), Some(b)) => a.cmp(&b),
                // Unparseable dates compare equal rather than erroring
                _ => Ordering::Equal,
            }
        }
        ColumnKind::Boolean => {
            let a_bit = a.map(value_truthy).unwrap_or(false) as u8;
            let b_bit = b.map(value_truthy).unwrap_or(false) as u8;
            a_bit.cmp(&b_bit)
        }
        ColumnKind::Text => match (a, b) {
            (Some(Value::Number(a)), Some(Value::Number(b))) => a
                .as_f64()
                .partial_cmp(&b.as_f64())
                .unwrap_or(Ordering::Equal),
            (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
            (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
            _ => Ordering::Equal,
        },
    }
}

/// Compute the sort that follows a sort request on `key`.
///
/// Requesting the active column toggles ascending -> descending; requesting
/// any other column starts ascending. There is no third "unsorted" state.
pub fn next_sort_config(current: Option<&SortConfig>, key: &str) -> SortConfig {
    let direction = match current {
        Some(sort) if sort.key == key && sort.direction == SortDirection::Ascending => {
            SortDirection::Descending
        }
        Some(sort) if sort.key == key => SortDirection::Ascending,
        _ => SortDirection::Ascending,
    };

    SortConfig {
        key: key.to_string(),
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: serde_json::Value) -> Record {
        fields.as_object().unwrap().clone()
    }

    fn name_of(r: &Record) -> &str {
        r.get("name").unwrap().as_str().unwrap()
    }

    #[test]
    fn test_no_sort_returns_input_order() {
        let rows = vec![
            record(json!({"name": "b"})),
            record(json!({"name": "a"})),
        ];
        let sorted = sort_records(rows.clone(), None, &[Column::text("name", "Name")]);
        assert_eq!(name_of(&sorted[0]), "b");
        assert_eq!(name_of(&sorted[1]), "a");
    }

    #[test]
    fn test_lexical_sort_both_directions() {
        let cols = vec![Column::text("name", "Name")];
        let rows = vec![
            record(json!({"name": "pear"})),
            record(json!({"name": "apple"})),
            record(json!({"name": "mango"})),
        ];

        let asc = sort_records(
            rows.clone(),
            Some(&SortConfig {
                key: "name".to_string(),
                direction: SortDirection::Ascending,
            }),
            &cols,
        );
        assert_eq!(name_of(&asc[0]), "apple");
        assert_eq!(name_of(&asc[2]), "pear");

        let desc = sort_records(
            rows,
            Some(&SortConfig {
                key: "name".to_string(),
                direction: SortDirection::Descending,
            }),
            &cols,
        );
        assert_eq!(name_of(&desc[0]), "pear");
        assert_eq!(name_of(&desc[2]), "apple");
    }

    #[test]
    fn test_numeric_sort_is_numeric_not_lexical() {
        let cols = vec![Column::text("qty", "Qty")];
        let rows = vec![
            record(json!({"qty": 10, "name": "ten"})),
            record(json!({"qty": 2, "name": "two"})),
        ];
        let asc = sort_records(
            rows,
            Some(&SortConfig {
                key: "qty".to_string(),
                direction: SortDirection::Ascending,
            }),
            &cols,
        );
        // Lexically "10" < "2"; numerically 2 < 10
        assert_eq!(name_of(&asc[0]), "two");
    }

    #[test]
    fn test_date_sort_with_unparseable_values() {
        let cols = vec![Column::date("created_at", "Created")];
        let rows = vec![
            record(json!({"created_at": "2024-05-01T00:00:00Z", "name": "late"})),
            record(json!({"created_at": "garbage", "name": "junk"})),
            record(json!({"created_at": "2024-01-01T00:00:00Z", "name": "early"})),
        ];
        // Must not panic; garbage compares equal to its neighbors
        let sorted = sort_records(
            rows,
            Some(&SortConfig {
                key: "created_at".to_string(),
                direction: SortDirection::Ascending,
            }),
            &cols,
        );
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn test_boolean_sort_false_before_true_ascending() {
        let cols = vec![Column::boolean("active", "Active")];
        let rows = vec![
            record(json!({"active": true, "name": "on"})),
            record(json!({"active": false, "name": "off"})),
        ];
        let asc = sort_records(
            rows,
            Some(&SortConfig {
                key: "active".to_string(),
                direction: SortDirection::Ascending,
            }),
            &cols,
        );
        assert_eq!(name_of(&asc[0]), "off");
    }

    #[test]
    fn test_stability_on_duplicate_keys() {
        let cols = vec![Column::text("group", "Group")];
        let rows = vec![
            record(json!({"group": "b", "name": "first-b"})),
            record(json!({"group": "a", "name": "first-a"})),
            record(json!({"group": "b", "name": "second-b"})),
            record(json!({"group": "a", "name": "second-a"})),
        ];
        let asc = sort_records(
            rows,
            Some(&SortConfig {
                key: "group".to_string(),
                direction: SortDirection::Ascending,
            }),
            &cols,
        );
        let names: Vec<&str> = asc.iter().map(name_of).collect();
        assert_eq!(names, vec!["first-a", "second-a", "first-b", "second-b"]);
    }

    #[test]
    fn test_request_sort_toggles_direction() {
        let first = next_sort_config(None, "name");
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = next_sort_config(Some(&first), "name");
        assert_eq!(second.direction, SortDirection::Descending);

        let third = next_sort_config(Some(&second), "name");
        assert_eq!(third.direction, SortDirection::Ascending);

        // A different column resets to ascending
        let other = next_sort_config(Some(&second), "created_at");
        assert_eq!(other.key, "created_at");
        assert_eq!(other.direction, SortDirection::Ascending);
    }
}
