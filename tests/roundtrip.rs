//! Round-trip behaviour across nesting, numeric kinds, and timezone
//! normalization.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use indexmap::IndexMap;
use json_tagged::{from_str, to_string, Value};
use rust_decimal::Decimal;

fn roundtrip(v: &Value) -> Value {
    from_str(&to_string(v).unwrap()).unwrap()
}

#[test]
fn test_int_and_float_stay_distinct_kinds() {
    assert!(matches!(roundtrip(&Value::Int(1)), Value::Int(1)));
    match roundtrip(&Value::Float(1.0)) {
        Value::Float(f) => assert_eq!(f, 1.0),
        other => panic!("expected float, got {other:?}"),
    }
}

#[test]
fn test_bool_is_never_an_int() {
    assert!(matches!(roundtrip(&Value::Bool(true)), Value::Bool(true)));
    assert!(matches!(roundtrip(&Value::Bool(false)), Value::Bool(false)));
}

#[test]
fn test_list_order_is_preserved_exactly() {
    let v = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    match roundtrip(&v) {
        Value::List(elems) => {
            assert_eq!(elems, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        }
        other => panic!("expected list, got {other:?}"),
    }
}

#[test]
fn test_dict_key_order_is_preserved() {
    let mut map = IndexMap::new();
    map.insert("z".to_string(), Value::Int(1));
    map.insert("a".to_string(), Value::Int(2));
    map.insert("m".to_string(), Value::Int(3));
    match roundtrip(&Value::Dict(map)) {
        Value::Dict(decoded) => {
            let keys: Vec<&String> = decoded.keys().collect();
            assert_eq!(keys, ["z", "a", "m"]);
        }
        other => panic!("expected dict, got {other:?}"),
    }
}

#[test]
fn test_heterogeneous_nesting() {
    let mut inner = IndexMap::new();
    inner.insert("xs".to_string(), Value::set([Value::Int(1), Value::Int(2)]));
    inner.insert(
        "pair".to_string(),
        Value::tuple([Value::Str("a".into()), Value::Float(0.5)]),
    );
    let v = Value::List(vec![
        Value::None,
        Value::Bool(false),
        Value::Dict(inner),
        Value::Decimal("10.01".parse::<Decimal>().unwrap()),
    ]);
    assert_eq!(roundtrip(&v), v);
}

#[test]
fn test_deep_nesting() {
    let mut v = Value::Int(0);
    for _ in 0..50 {
        v = Value::List(vec![v]);
    }
    assert_eq!(roundtrip(&v), v);
}

#[test]
fn test_unicode_strings() {
    let v = Value::Str("приветствие \u{1f980} \"quoted\"\n".into());
    assert_eq!(roundtrip(&v), v);
}

#[test]
fn test_int_extremes() {
    assert_eq!(roundtrip(&Value::Int(i64::MAX)), Value::Int(i64::MAX));
    assert_eq!(roundtrip(&Value::Int(i64::MIN)), Value::Int(i64::MIN));
}

#[test]
fn test_decimal_text_is_exact() {
    for text in ["1.2342", "0.1", "-99999999.000000001", "0.0000000001"] {
        let d: Decimal = text.parse().unwrap();
        assert_eq!(roundtrip(&Value::Decimal(d)), Value::Decimal(d));
    }
}

#[test]
fn test_datetime_with_offset_normalizes_to_utc() {
    let offset = FixedOffset::east_opt(3 * 3600).unwrap();
    let local = offset.with_ymd_and_hms(2020, 5, 17, 15, 30, 0).unwrap();
    let v = Value::from(local);

    // Conversion already pinned the instant to UTC.
    let expected_utc: DateTime<Utc> = local.with_timezone(&Utc);
    assert_eq!(v, Value::DateTime(expected_utc));
    assert_eq!(roundtrip(&v), Value::DateTime(expected_utc));
}

#[test]
fn test_datetime_microseconds_survive() {
    let dt = DateTime::from_timestamp(1_600_000_000, 123_456_000).unwrap();
    assert_eq!(roundtrip(&Value::DateTime(dt)), Value::DateTime(dt));
}

#[test]
fn test_pre_epoch_datetime_roundtrips() {
    let dt = DateTime::from_timestamp(-1_000_000, 500_000_000).unwrap();
    assert_eq!(roundtrip(&Value::DateTime(dt)), Value::DateTime(dt));
}

#[test]
fn test_set_roundtrip_ignores_wire_order() {
    let v = Value::set([
        Value::Int(3),
        Value::Str("s".into()),
        Value::tuple([Value::Int(1)]),
    ]);
    assert_eq!(roundtrip(&v), v);
}

#[test]
fn test_empty_containers() {
    assert_eq!(roundtrip(&Value::List(vec![])), Value::List(vec![]));
    assert_eq!(roundtrip(&Value::set([])), Value::set([]));
    assert_eq!(roundtrip(&Value::frozenset([])), Value::frozenset([]));
    assert_eq!(roundtrip(&Value::tuple([])), Value::tuple([]));
    assert_eq!(
        roundtrip(&Value::Dict(IndexMap::new())),
        Value::Dict(IndexMap::new())
    );
}

#[test]
fn test_from_conversions_round_trip() {
    let v: Value = vec![
        Value::from(true),
        Value::from(42i64),
        Value::from(2.5f64),
        Value::from("text"),
        Value::from(None::<i64>),
    ]
    .into();
    assert_eq!(roundtrip(&v), v);
}

#[test]
fn test_bytes_entry_point() {
    let v = Value::tuple([Value::Int(1), Value::Str("b".into())]);
    let bytes = json_tagged::to_vec(&v).unwrap();
    assert_eq!(json_tagged::from_slice(&bytes).unwrap(), v);
}
