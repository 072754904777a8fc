//! Decoding: tagged JSON back to native values.
//!
//! [`from_str`] / [`from_slice`] parse with the JSON parser and then run
//! [`unwrap`] over the tree. `unwrap` is pure, infallible and post-order:
//! children are rebuilt before the node that contains them, which is what
//! lets a container be constructed directly from already-native elements.
//!
//! Decoding is deliberately permissive where encoding is strict: an object
//! with no `_type`, an unknown tag, or a payload that does not match its
//! tag's shape passes through as a plain map instead of failing. Callers
//! that need strict validation check after decoding.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value as Json};

use crate::error::DecodeError;
use crate::tags::{Tag, TYPE_KEY, VALUE_KEY};
use crate::value::Value;

/// Decode tagged JSON text into a native value.
///
/// The only failure mode is the text not being valid JSON.
///
/// # Example
///
/// ```
/// use json_tagged::{from_str, Value};
///
/// let v = from_str(r#"{"_type":"int","value":7}"#).unwrap();
/// assert_eq!(v, Value::Int(7));
/// ```
pub fn from_str(text: &str) -> Result<Value, DecodeError> {
    Ok(unwrap(&serde_json::from_str(text)?))
}

/// Decode tagged JSON from UTF-8 bytes.
pub fn from_slice(bytes: &[u8]) -> Result<Value, DecodeError> {
    Ok(unwrap(&serde_json::from_slice(bytes)?))
}

/// Recursively transform a JSON tree into a native value.
///
/// Tagged nodes are reconstructed per their `_type`; everything else maps
/// structurally (null to `None`, numbers to `Int` or `Float` by whether
/// they fit an `i64`, arrays to `List`, untagged objects to `Dict`).
pub fn unwrap(node: &Json) -> Value {
    match node {
        Json::Null => Value::None,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => number(n),
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(arr) => Value::List(arr.iter().map(unwrap).collect()),
        Json::Object(obj) => unwrap_object(obj),
    }
}

fn unwrap_object(obj: &Map<String, Json>) -> Value {
    let tag = obj
        .get(TYPE_KEY)
        .and_then(Json::as_str)
        .and_then(Tag::from_str);
    match tag {
        Some(tag) => reconstruct(tag, obj.get(VALUE_KEY)).unwrap_or_else(|| passthrough(obj)),
        // No `_type`, or one outside the vocabulary: pass the object
        // through unchanged rather than failing.
        None => passthrough(obj),
    }
}

/// Rebuild the native value for a recognized tag. `None` means the payload
/// does not have the shape the tag promises, which demotes the node to
/// passthrough.
fn reconstruct(tag: Tag, payload: Option<&Json>) -> Option<Value> {
    if tag == Tag::None {
        return Some(Value::None);
    }
    let payload = payload?;
    match tag {
        Tag::None => unreachable!(),
        Tag::Bool => payload.as_bool().map(Value::Bool),
        Tag::Str => payload.as_str().map(|s| Value::Str(s.to_string())),
        Tag::Int => match payload {
            Json::Number(n) => Some(number(n)),
            _ => None,
        },
        // The tag, not the number's spelling, decides floatness.
        Tag::Float => payload.as_f64().map(Value::Float),
        Tag::Dict => payload.as_object().map(|obj| Value::Dict(unwrap_entries(obj))),
        Tag::List => payload
            .as_array()
            .map(|arr| Value::List(arr.iter().map(unwrap).collect())),
        Tag::Set => payload
            .as_array()
            .map(|arr| Value::set(arr.iter().map(unwrap))),
        Tag::FrozenSet => payload
            .as_array()
            .map(|arr| Value::frozenset(arr.iter().map(unwrap))),
        Tag::Tuple => payload
            .as_array()
            .map(|arr| Value::tuple(arr.iter().map(unwrap))),
        Tag::Decimal => payload
            .as_str()
            .and_then(|s| s.parse::<Decimal>().ok())
            .map(Value::Decimal),
        Tag::DateTime => payload
            .as_f64()
            .and_then(datetime_from_secs)
            .map(Value::DateTime),
        #[cfg(feature = "frozendict")]
        Tag::FrozenDict => payload
            .as_object()
            .map(|obj| Value::FrozenDict(unwrap_entries(obj))),
    }
}

fn passthrough(obj: &Map<String, Json>) -> Value {
    Value::Dict(unwrap_entries(obj))
}

fn unwrap_entries(obj: &Map<String, Json>) -> IndexMap<String, Value> {
    obj.iter()
        .map(|(key, val)| (key.clone(), unwrap(val)))
        .collect()
}

fn number(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(f) = n.as_f64() {
        Value::Float(f)
    } else {
        // Only reachable with serde_json's arbitrary-precision numbers.
        Value::Str(n.to_string())
    }
}

/// Fractional POSIX seconds, always read as UTC. The fraction is rounded to
/// microseconds, the most a double can carry for present-day instants.
fn datetime_from_secs(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let mut whole = secs.floor();
    let mut micros = ((secs - whole) * 1e6).round() as i64;
    if micros >= 1_000_000 {
        whole += 1.0;
        micros = 0;
    }
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(whole as i64, micros as u32 * 1000)
}
