//! The native value universe the codec round-trips.
//!
//! One variant per supported kind. Sets are stored in a `Vec` because
//! elements may be heterogeneous and floats are neither `Ord` nor `Hash`;
//! the constructors enforce uniqueness and equality ignores element order,
//! so the storage order is an implementation detail.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::tags::Tag;

/// A value the codec knows how to encode and decode.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence of a value.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered string-keyed map. Iteration order is insertion order and is
    /// preserved on the wire.
    Dict(IndexMap<String, Value>),
    List(Vec<Value>),
    /// Unordered unique collection. Build through [`Value::set`] to keep the
    /// uniqueness invariant.
    Set(Vec<Value>),
    /// Immutable unordered unique collection. Build through
    /// [`Value::frozenset`].
    FrozenSet(Vec<Value>),
    /// Fixed-arity ordered sequence, distinct from `List` after decode.
    Tuple(Vec<Value>),
    Decimal(Decimal),
    /// An instant in time. Always UTC; an instant supplied with another
    /// offset is normalized before encoding.
    DateTime(DateTime<Utc>),
    /// Immutable string-keyed map.
    #[cfg(feature = "frozendict")]
    FrozenDict(IndexMap<String, Value>),
}

impl Value {
    /// The wire tag for this value's kind.
    pub const fn tag(&self) -> Tag {
        match self {
            Value::None => Tag::None,
            Value::Bool(_) => Tag::Bool,
            Value::Int(_) => Tag::Int,
            Value::Float(_) => Tag::Float,
            Value::Str(_) => Tag::Str,
            Value::Dict(_) => Tag::Dict,
            Value::List(_) => Tag::List,
            Value::Set(_) => Tag::Set,
            Value::FrozenSet(_) => Tag::FrozenSet,
            Value::Tuple(_) => Tag::Tuple,
            Value::Decimal(_) => Tag::Decimal,
            Value::DateTime(_) => Tag::DateTime,
            #[cfg(feature = "frozendict")]
            Value::FrozenDict(_) => Tag::FrozenDict,
        }
    }

    /// Build a set, dropping duplicate elements.
    ///
    /// # Example
    ///
    /// ```
    /// use json_tagged::Value;
    ///
    /// let s = Value::set([Value::Int(1), Value::Int(2), Value::Int(1)]);
    /// assert_eq!(s, Value::set([Value::Int(2), Value::Int(1)]));
    /// ```
    pub fn set(elems: impl IntoIterator<Item = Value>) -> Value {
        Value::Set(dedup(elems))
    }

    /// Build a frozenset, dropping duplicate elements.
    pub fn frozenset(elems: impl IntoIterator<Item = Value>) -> Value {
        Value::FrozenSet(dedup(elems))
    }

    /// Build a tuple from its elements.
    pub fn tuple(elems: impl IntoIterator<Item = Value>) -> Value {
        Value::Tuple(elems.into_iter().collect())
    }
}

fn dedup(elems: impl IntoIterator<Item = Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for elem in elems {
        if !out.contains(&elem) {
            out.push(elem);
        }
    }
    out
}

/// Order-insensitive comparison of two unique-element collections.
fn set_eq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().all(|elem| b.contains(elem))
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            // Element order never matters for set kinds.
            (Value::Set(a), Value::Set(b)) => set_eq(a, b),
            (Value::FrozenSet(a), Value::FrozenSet(b)) => set_eq(a, b),
            (Value::Dict(a), Value::Dict(b)) => map_eq(a, b),
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            #[cfg(feature = "frozendict")]
            (Value::FrozenDict(a), Value::FrozenDict(b)) => map_eq(a, b),
            // Different kinds are never equal.
            _ => false,
        }
    }
}

/// Key-by-key comparison; insertion order does not affect map equality.
fn map_eq(a: &IndexMap<String, Value>, b: &IndexMap<String, Value>) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, val_a)| match b.get(key) {
            Some(val_b) => val_a == val_b,
            None => false,
        })
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Value {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elems: Vec<Value>) -> Value {
        Value::List(elems)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Value {
        Value::Dict(map)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Value {
        Value::Decimal(d)
    }
}

/// Any offset is accepted; the instant is normalized to UTC on the way in.
impl<Tz: chrono::TimeZone> From<DateTime<Tz>> for Value {
    fn from(dt: DateTime<Tz>) -> Value {
        Value::DateTime(dt.with_timezone(&Utc))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        match opt {
            Some(v) => v.into(),
            None => Value::None,
        }
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Value {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_constructor_drops_duplicates() {
        let s = Value::set([Value::Int(1), Value::Int(1), Value::Int(2)]);
        match &s {
            Value::Set(elems) => assert_eq!(elems.len(), 2),
            other => panic!("expected set, got {other:?}"),
        }
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a = Value::set([Value::Int(1), Value::Str("x".into())]);
        let b = Value::set([Value::Str("x".into()), Value::Int(1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_and_frozenset_are_distinct_kinds() {
        let a = Value::set([Value::Int(1)]);
        let b = Value::frozenset([Value::Int(1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_list_equality_is_ordered() {
        let a = Value::List(vec![Value::Int(1), Value::Int(2)]);
        let b = Value::List(vec![Value::Int(2), Value::Int(1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_int_and_float_are_distinct_kinds() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn test_dict_equality_ignores_insertion_order() {
        let mut a = IndexMap::new();
        a.insert("x".to_string(), Value::Int(1));
        a.insert("y".to_string(), Value::Int(2));
        let mut b = IndexMap::new();
        b.insert("y".to_string(), Value::Int(2));
        b.insert("x".to_string(), Value::Int(1));
        assert_eq!(Value::Dict(a), Value::Dict(b));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::None);
        assert_eq!(Value::from(Some(3i64)), Value::Int(3));
    }
}
