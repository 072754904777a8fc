//! Error types for tagged-JSON encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding a value to tagged JSON.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The value has no tagged JSON representation. Carries a human-readable
    /// rendering of the offending value. Encoding produces no partial output
    /// when this is raised; it propagates out of any container nesting.
    #[error("{0} is not representable as tagged JSON")]
    UnsupportedValue(String),

    /// The underlying JSON serializer failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while decoding tagged JSON text.
///
/// Unrecognized or malformed tagged nodes are not an error: they pass
/// through as plain maps. The only failure is the JSON text itself not
/// parsing.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The underlying JSON parser rejected the input.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
