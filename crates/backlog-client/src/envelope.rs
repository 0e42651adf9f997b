//! Success envelope handling
//!
//! Every successful service body is `{"data": <payload>}`. Absence of
//! `data` is the universal rejection signal, not an HTTP-status branch:
//! the parsed body itself is the error payload.

use crate::error::{ClientError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Unwrap a response body into its `data` payload
///
/// A body that is not JSON at all is a transport-class failure. A JSON
/// body with a missing or null `data` field rejects with the body
/// verbatim.
pub fn unwrap_envelope(body: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(body)
        .map_err(|err| ClientError::transport(format!("response body is not JSON: {err}")))?;

    match parsed.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err(ClientError::rejected(parsed)),
    }
}

/// Decode an unwrapped payload into a typed value
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|err| ClientError::decode(err.to_string()))
}
