//! Response classification and entity mapping
//!
//! The service wraps every success payload in a `{data: …}` envelope and
//! signals failure with a status code plus an error body whose envelope
//! key differs by operation (`error` for some, `message` for others).
//! This module normalizes both into the error taxonomy in
//! [`crate::error`]: free functions, no state.

use serde_json::Value;

use crate::entity::ShortUrl;
use crate::error::{ApiError, Error, Result};
use crate::transport::Response;

/// Expected success status for create, fetch and edit
pub const STATUS_OK: u16 = 200;

/// Expected success status for delete, which returns no body
pub const STATUS_NO_CONTENT: u16 = 204;

/// Check a response against the expected success status and decode its body.
///
/// On a status match the body must be valid JSON; anything else is a
/// service contract violation and surfaces as
/// [`Error::MalformedResponse`], never as a silent success. On a mismatch
/// the response is turned into an [`ApiError`] carrying the actual status
/// and whatever error payload could be decoded.
pub fn classify(expected: u16, response: &Response) -> Result<Value> {
    if response.status != expected {
        return Err(Error::Api(api_error(response)));
    }

    serde_json::from_slice(&response.body).map_err(|e| Error::MalformedResponse {
        status: response.status,
        detail: e.to_string(),
    })
}

/// Check a response whose success contract is "no error, no body".
///
/// The success path never attempts to decode a body; the error path is
/// classified exactly like [`classify`].
pub fn classify_empty(expected: u16, response: &Response) -> Result<()> {
    if response.status != expected {
        return Err(Error::Api(api_error(response)));
    }

    Ok(())
}

/// Extract the entity from a decoded success body.
///
/// All entity-bearing successes are 200, so a violated envelope is
/// reported against that status.
pub fn to_entity(body: Value) -> Result<ShortUrl> {
    let data = match body {
        Value::Object(mut obj) => obj.remove("data").ok_or_else(|| Error::MalformedResponse {
            status: STATUS_OK,
            detail: "success body has no data key".to_string(),
        })?,
        other => {
            return Err(Error::MalformedResponse {
                status: STATUS_OK,
                detail: format!("success body is not an object: {other}"),
            });
        }
    };

    serde_json::from_value(data).map_err(|e| Error::MalformedResponse {
        status: STATUS_OK,
        detail: e.to_string(),
    })
}

/// Build an [`ApiError`] for a status mismatch.
fn api_error(response: &Response) -> ApiError {
    // The error envelope key is not uniform across operations. Check
    // both, and keep the whole decoded body when neither is present.
    let payload = serde_json::from_slice::<Value>(&response.body)
        .ok()
        .map(|decoded| match decoded {
            Value::Object(mut obj) => obj
                .remove("error")
                .or_else(|| obj.remove("message"))
                .unwrap_or(Value::Object(obj)),
            other => other,
        });

    ApiError {
        status: response.status,
        message: format!("Unexpected status {} {}", response.status, response.reason),
        payload,
    }
}
