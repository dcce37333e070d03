//! Tests for single-value field parsing

use crate::app::models::FieldValue;
use crate::app::services::record_codec::field_codec::FieldKind;
use chrono::{NaiveDate, NaiveDateTime};

#[test]
fn test_integer_parsing() {
    assert_eq!(FieldKind::Integer.parse("25"), Ok(FieldValue::Integer(25)));
    assert_eq!(FieldKind::Integer.parse("-3"), Ok(FieldValue::Integer(-3)));

    assert!(FieldKind::Integer.parse("abc").is_err());
    assert!(FieldKind::Integer.parse("12.5").is_err());
    assert!(FieldKind::Integer.parse("").is_err());
}

#[test]
fn test_decimal_parsing_and_two_place_formatting() {
    let parsed = FieldKind::Decimal.parse("3.5").unwrap();
    assert_eq!(parsed, FieldValue::Decimal(3.5));
    // output always carries two decimal places, whatever the input precision
    assert_eq!(parsed.to_string(), "3.50");
    assert_eq!(FieldKind::Decimal.parse("2").unwrap().to_string(), "2.00");
    assert_eq!(
        FieldKind::Decimal.parse("19.999").unwrap().to_string(),
        "20.00"
    );

    assert!(FieldKind::Decimal.parse("money").is_err());
    assert!(FieldKind::Decimal.parse("NaN").is_err());
    assert!(FieldKind::Decimal.parse("inf").is_err());
}

#[test]
fn test_text_parsing_is_total() {
    assert_eq!(
        FieldKind::Text.parse("Kofi Mensah"),
        Ok(FieldValue::Text("Kofi Mensah".to_string()))
    );
}

#[test]
fn test_date_parsing_accepts_only_canonical_layout() {
    assert_eq!(
        FieldKind::Date.parse("2025-07-15"),
        Ok(FieldValue::Date(
            NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
        ))
    );

    assert!(FieldKind::Date.parse("15/07/2025").is_err());
    assert!(FieldKind::Date.parse("2025-13-01").is_err());
    assert!(FieldKind::Date.parse("2025-07-15 10:30:00").is_err());
}

#[test]
fn test_datetime_parsing_accepts_minutes_or_seconds() {
    let with_seconds =
        NaiveDateTime::parse_from_str("2025-07-15 10:30:45", "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(
        FieldKind::DateTime.parse("2025-07-15 10:30:45"),
        Ok(FieldValue::DateTime(with_seconds))
    );

    let without_seconds =
        NaiveDateTime::parse_from_str("2025-07-15 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(
        FieldKind::DateTime.parse("2025-07-15 10:30"),
        Ok(FieldValue::DateTime(without_seconds))
    );

    assert!(FieldKind::DateTime.parse("2025-07-15").is_err());
    assert!(FieldKind::DateTime.parse("10:30:00").is_err());
}

#[test]
fn test_datetime_always_writes_seconds() {
    // a short-layout input normalizes to the canonical written layout
    let value = FieldKind::DateTime.parse("2025-08-01 09:15").unwrap();
    assert_eq!(value.to_string(), "2025-08-01 09:15:00");
}

#[test]
fn test_error_messages_name_the_expected_layout() {
    let err = FieldKind::DateTime.parse("yesterday").unwrap_err();
    assert!(err.message.contains("YYYY-MM-DD HH:MM:SS"));

    let err = FieldKind::Date.parse("yesterday").unwrap_err();
    assert!(err.message.contains("YYYY-MM-DD"));
}
