//! JSON round-trip helpers.
//!
//! Thin wrappers over `serde_json` that pin down the toolkit's error
//! surface: serialization and parsing failures both arrive as
//! [`JsonError`] instead of leaking the underlying error type.
//!
//! Reconstruction is typed: [`from_json`] maps JSON object keys onto the
//! target type's fields by name via its `Deserialize` implementation, so
//! field order in the JSON text never matters.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error type for JSON conversion.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be represented as JSON text.
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The input was not valid JSON, or did not match the target type.
    #[error("malformed JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Serialize a value to canonical JSON text.
///
/// Object keys appear in the order the type's fields are declared.
///
/// # Errors
///
/// [`JsonError::Serialize`] if the value cannot be represented as JSON
/// (for example a map with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Parse JSON text into an instance of `T`.
///
/// # Errors
///
/// [`JsonError::Parse`] if the text is not well-formed JSON or does not
/// match the shape of `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Parse)
}
