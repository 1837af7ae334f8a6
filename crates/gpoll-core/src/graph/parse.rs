//! Map an HTTP status and JSON body onto a profile or a fetch error.

use serde::Deserialize;
use serde_json::Value;

use super::{FetchError, GraphError, UserInfo};

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    code: i64,
    #[serde(default)]
    error_subcode: Option<i64>,
    #[serde(default)]
    fbtrace_id: String,
}

impl From<ErrorBody> for GraphError {
    fn from(body: ErrorBody) -> Self {
        GraphError {
            message: body.message,
            kind: body.kind,
            code: body.code,
            subcode: body.error_subcode,
            trace_id: body.fbtrace_id,
        }
    }
}

/// Interpret a Graph API response.
///
/// An `error` object wins regardless of status. Otherwise a 2xx body must have the
/// `UserInfo` shape; anything else is `NoData`.
pub fn parse_response(status: u32, body: &[u8]) -> Result<UserInfo, FetchError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        FetchError::NoData(format!("malformed response body (HTTP {}): {}", status, e))
    })?;

    if value.get("error").is_some() {
        let envelope: ErrorEnvelope = serde_json::from_value(value).map_err(|e| {
            FetchError::NoData(format!(
                "unrecognized error envelope (HTTP {}): {}",
                status, e
            ))
        })?;
        return Err(FetchError::Graph(envelope.error.into()));
    }

    if !(200..300).contains(&status) {
        return Err(FetchError::NoData(format!(
            "HTTP {} without error envelope",
            status
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| FetchError::NoData(format!("unexpected response shape: {}", e)))
}
