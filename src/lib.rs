//! Type-preserving tagged JSON.
//!
//! Plain JSON cannot tell a set from a list, a decimal from a float, or a
//! timestamp from a number. This crate closes that gap for a fixed, closed
//! set of value kinds by encoding every node as a **tagged node** — a JSON
//! object `{"_type": <tag>, "value": <payload>}` — and rebuilding the exact
//! native kind on decode.
//!
//! Encoding is strict (a value with no JSON rendering fails, never coerces)
//! while decoding is permissive (objects with unknown or missing tags pass
//! through as plain maps instead of failing).
//!
//! # Example
//!
//! ```
//! use json_tagged::{from_str, to_string, Value};
//!
//! let v = Value::set([Value::Int(1), Value::Int(2)]);
//! let text = to_string(&v).unwrap();
//! // The wire keeps the kind: a set, not a list.
//! assert!(text.contains(r#""_type":"set""#));
//! assert_eq!(from_str(&text).unwrap(), v);
//! ```
//!
//! The optional `frozendict` cargo feature adds an immutable string-keyed
//! map kind to the universe; without it the `frozendict` wire tag is never
//! produced and decodes as a passthrough map.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod tags;
pub mod value;

pub use decoder::{from_slice, from_str, unwrap};
pub use encoder::{to_string, to_string_pretty, to_vec, wrap};
pub use error::{DecodeError, EncodeError};
pub use tags::{Tag, TYPE_KEY, VALUE_KEY};
pub use value::Value;
