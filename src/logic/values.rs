//! Field value coercion helpers
//!
//! The table operates on untyped JSON records, so every engine shares the
//! same rules for truthiness, stringification, and date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Loose truthiness over JSON values: `false`, `0`, `""`, and `null` are
/// falsy, everything else (including objects and arrays) is truthy.
pub fn value_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stringify a field value for search and substring filtering.
///
/// Null yields None so absent values never match a search term. Strings are
/// used as-is (no surrounding quotes); other values use their JSON text.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parse a record field as a date, leniently.
///
/// Accepts RFC 3339, common ISO datetime shapes with or without fractional
/// seconds, bare dates (midnight), and numbers as epoch milliseconds.
/// Returns None for anything else; callers decide whether unparseable means
/// "excluded" (filtering) or "equal" (sorting).
pub fn parse_value_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| DateTime::from_timestamp_millis(millis))
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!value_truthy(&Value::Null));
        assert!(!value_truthy(&json!(false)));
        assert!(!value_truthy(&json!(0)));
        assert!(!value_truthy(&json!("")));
        assert!(value_truthy(&json!(true)));
        assert!(value_truthy(&json!(1)));
        assert!(value_truthy(&json!("no")));
        assert!(value_truthy(&json!([])));
    }

    #[test]
    fn test_value_text_null_is_none() {
        assert_eq!(value_text(&Value::Null), None);
        assert_eq!(value_text(&json!("abc")), Some("abc".to_string()));
        assert_eq!(value_text(&json!(42)), Some("42".to_string()));
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_value_date(&json!("2024-03-15T23:00:00Z")).unwrap();
        assert_eq!(dt.to_string(), "2024-03-15 23:00:00");
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let dt = parse_value_date(&json!("2024-03-15")).unwrap();
        assert_eq!(dt.to_string(), "2024-03-15 00:00:00");
    }

    #[test]
    fn test_parse_epoch_millis() {
        let dt = parse_value_date(&json!(0)).unwrap();
        assert_eq!(dt.to_string(), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_value_date(&json!("not a date")).is_none());
        assert!(parse_value_date(&json!(true)).is_none());
    }
}
