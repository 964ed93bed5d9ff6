pub mod country;
pub mod fixture;
pub mod league;
pub mod statistics;
pub mod team;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// The API's wrapper around every payload: a match count plus the actual
/// data, which is an array for listings and lookups.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub results: i64,
    #[serde(default)]
    pub response: Value,
}

impl Envelope {
    /// Borrow the payload as an array, the shape every listing and lookup
    /// endpoint uses.
    pub fn entries(&self) -> Result<&[Value]> {
        self.response
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| Error::MalformedResponse("envelope `response` is not an array".into()))
    }
}

/// Deserialize a payload fragment into a typed record, reporting a shape
/// mismatch as `MalformedResponse` with the fragment named.
pub(crate) fn from_value<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::MalformedResponse(format!("{}: {}", what, e)))
}

/// Required string field of a raw JSON object, by name.
pub(crate) fn req_str(object: &Value, key: &str) -> Result<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::MissingField(key.to_string()))
}

/// Required integer field of a raw JSON object, by name.
pub(crate) fn req_i64(object: &Value, key: &str) -> Result<i64> {
    object
        .get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| Error::MissingField(key.to_string()))
}
