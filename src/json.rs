use serde::Serialize;
use serde::de::DeserializeOwned;

use super::*;

/// Renders a structured value as its canonical JSON encoding.
pub fn to_text<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|err| Error::Json(err.to_string()))
}

/// Parses a JSON encoding back into a typed value. The target type stands
/// in for the blueprint: its fields are populated directly from the text,
/// without running any constructor logic.
pub fn from_text<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|err| Error::Json(err.to_string()))
}
