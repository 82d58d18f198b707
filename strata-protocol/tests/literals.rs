use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serde::Serialize;
use strata_protocol::Value;
use test_case::test_case;

fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

#[test_case(Value::Str("a".into()), r#""a""#; "plain string")]
#[test_case(Value::Str(r#"he said "hi""#.into()), r#""he said \"hi\"""#; "escaped string")]
#[test_case(Value::Int(5), "5"; "integer")]
#[test_case(Value::Int(-12), "-12"; "negative integer")]
#[test_case(Value::Float(1.5), "1.5"; "float")]
#[test_case(Value::Float(f64::NAN), "null"; "non-finite float")]
#[test_case(Value::Bool(true), "true"; "bool")]
#[test_case(Value::Null, "null"; "null")]
fn scalar_literals(value: Value, expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[test_case("2020-01-02T03:04:05.006Z", r#""2020-01-02T03:04:05.006Z""#; "millisecond precision")]
#[test_case("2021-01-01T00:00:00Z", r#""2021-01-01T00:00:00.000Z""#; "whole second pads millis")]
#[test_case("2020-01-02T05:04:05.006+02:00", r#""2020-01-02T03:04:05.006Z""#; "converted to utc")]
fn datetime_literals(input: &str, expected: &str) {
    assert_eq!(Value::DateTime(utc(input)).to_string(), expected);
}

#[test]
fn json_fallback() {
    let value = Value::json(&vec!["a", "b"]).unwrap();
    assert_eq!(value.to_string(), r#"["a","b"]"#);

    #[derive(Serialize)]
    struct Record {
        id: String,
    }
    let value = Value::json(&Record { id: "x".into() }).unwrap();
    assert_eq!(value.to_string(), r#"{"id":"x"}"#);
}

#[test]
fn json_unrepresentable_data() {
    // map keys must be strings
    let mut data = BTreeMap::new();
    data.insert((1, 2), "x");
    let err = Value::json(&data).unwrap_err();
    assert!(err.is::<strata_errors::EncodeError>());
    assert!(err.is::<strata_errors::ClientError>());
}

#[test]
fn conversions() {
    assert_eq!(Value::from("a"), Value::Str("a".into()));
    assert_eq!(Value::from(5i64), Value::Int(5));
    assert_eq!(Value::from(5i32), Value::Int(5));
    assert_eq!(Value::from(false), Value::Bool(false));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("a")), Value::Str("a".into()));
    assert_eq!(Value::from(serde_json::json!({})).kind(), "json");
}
