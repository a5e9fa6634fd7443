//! Validation of conversion input arriving from a dynamically typed source.
//!
//! Inside the library every formatter takes `&str`. Callers that receive
//! values from JSON, a config file, or another loosely typed boundary go
//! through [`Input`] first so that absent and mistyped values are reported
//! with the same error kinds a string-typed caller would see.

use crate::case::tokenizer::is_whitespace;
use crate::error::CaseError;
use serde_json::Value;

/// A value presented for conversion, before it is known to be a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// No value was supplied at all.
    Missing,
    /// An explicit null.
    Null,
    Text(&'a str),
    /// Any other value, described by its runtime type name.
    Other(&'static str),
}

impl<'a> Input<'a> {
    /// Classify a JSON value. `None` means the value was absent.
    ///
    /// Type names follow the usual dynamic-language vocabulary: `boolean`,
    /// `number`, and `object` for both arrays and maps.
    pub fn from_json(value: Option<&'a Value>) -> Self {
        match value {
            None => Input::Missing,
            Some(Value::Null) => Input::Null,
            Some(Value::String(s)) => Input::Text(s.as_str()),
            Some(Value::Bool(_)) => Input::Other("boolean"),
            Some(Value::Number(_)) => Input::Other("number"),
            Some(Value::Array(_)) | Some(Value::Object(_)) => Input::Other("object"),
        }
    }

    /// Unwrap the string, rejecting absent and non-string values.
    ///
    /// Emptiness is not checked here; see [`validate`].
    pub fn into_text(self) -> Result<&'a str, CaseError> {
        match self {
            Input::Missing | Input::Null => Err(CaseError::NullOrUndefined),
            Input::Other(found) => Err(CaseError::Type { found }),
            Input::Text(text) => Ok(text),
        }
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Input::Missing, Input::Text)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Text(value)
    }
}

/// Run every pre-split check on `input`: presence, type, then emptiness.
pub fn validate(input: Input<'_>) -> Result<&str, CaseError> {
    validate_text(input.into_text()?)
}

/// Reject strings that are empty once surrounding whitespace is trimmed.
///
/// Returns the original, untrimmed text on success.
pub fn validate_text(text: &str) -> Result<&str, CaseError> {
    if text.trim_matches(is_whitespace).is_empty() {
        return Err(CaseError::EmptyInput);
    }
    Ok(text)
}
