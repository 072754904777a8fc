//! Encoding: native values to tagged JSON.
//!
//! [`wrap`] builds the tagged tree; [`to_string`], [`to_string_pretty`] and
//! [`to_vec`] run it through the JSON serializer. The dispatch is a single
//! exhaustive match over [`Value`] — in particular booleans are their own
//! variant, so a `true` can never be tagged `int` the way it could in a
//! language where booleans are integers.

use serde_json::{Map, Number, Value as Json};

use crate::error::EncodeError;
use crate::tags::{Tag, TYPE_KEY, VALUE_KEY};
use crate::value::Value;

/// Recursively transform a value into its tagged JSON node.
///
/// Pure and total over the value universe except for non-finite floats,
/// which have no JSON number and raise
/// [`EncodeError::UnsupportedValue`]. The error propagates out of any
/// enclosing container; no partial tree is ever returned.
///
/// # Example
///
/// ```
/// use json_tagged::{wrap, Value};
/// use serde_json::json;
///
/// let node = wrap(&Value::Int(7)).unwrap();
/// assert_eq!(node, json!({"_type": "int", "value": 7}));
/// ```
pub fn wrap(value: &Value) -> Result<Json, EncodeError> {
    let payload = match value {
        Value::None => return Ok(tagged(Tag::None, None)),
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::from(*i),
        Value::Float(f) => Json::Number(finite_number(*f)?),
        Value::Str(s) => Json::String(s.clone()),
        Value::Dict(map) => wrap_map(map)?,
        Value::List(elems) | Value::Set(elems) | Value::FrozenSet(elems) | Value::Tuple(elems) => {
            let mut arr = Vec::with_capacity(elems.len());
            for elem in elems {
                arr.push(wrap(elem)?);
            }
            Json::Array(arr)
        }
        Value::Decimal(d) => Json::String(d.to_string()),
        Value::DateTime(dt) => {
            // Fractional POSIX seconds, already UTC. Sub-second precision is
            // whatever survives the double, not a fixed unit.
            let secs = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_micros()) / 1e6;
            Json::Number(finite_number(secs)?)
        }
        #[cfg(feature = "frozendict")]
        Value::FrozenDict(map) => wrap_map(map)?,
    };
    Ok(tagged(value.tag(), Some(payload)))
}

/// Encode a value to compact tagged JSON text.
///
/// # Example
///
/// ```
/// use json_tagged::{to_string, Value};
///
/// let text = to_string(&Value::Str("hi".into())).unwrap();
/// assert_eq!(text, r#"{"_type":"str","value":"hi"}"#);
/// ```
pub fn to_string(value: &Value) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&wrap(value)?)?)
}

/// Encode a value to pretty-printed tagged JSON text.
pub fn to_string_pretty(value: &Value) -> Result<String, EncodeError> {
    Ok(serde_json::to_string_pretty(&wrap(value)?)?)
}

/// Encode a value to tagged JSON as UTF-8 bytes.
pub fn to_vec(value: &Value) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(&wrap(value)?)?)
}

fn tagged(tag: Tag, payload: Option<Json>) -> Json {
    let mut node = Map::with_capacity(2);
    node.insert(TYPE_KEY.to_string(), Json::String(tag.as_str().to_string()));
    if let Some(payload) = payload {
        node.insert(VALUE_KEY.to_string(), payload);
    }
    Json::Object(node)
}

fn finite_number(f: f64) -> Result<Number, EncodeError> {
    Number::from_f64(f).ok_or_else(|| EncodeError::UnsupportedValue(f.to_string()))
}

/// Map entries keep their keys untagged; only the values are wrapped.
fn wrap_map(map: &indexmap::IndexMap<String, Value>) -> Result<Json, EncodeError> {
    let mut obj = Map::with_capacity(map.len());
    for (key, val) in map {
        obj.insert(key.clone(), wrap(val)?);
    }
    Ok(Json::Object(obj))
}
