//! Response data model shared by all handlers.
//!
//! Every request — successful or not — resolves to an
//! [`HttpClientResponse`]. The three fields carry no linked invariant: a
//! handler is free to populate `data` and `error` however its transport and
//! error conventions dictate.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error payload for failed requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique code of the error. Custom or one of the standard HTTP codes.
    pub code: ErrorCode,

    /// Descriptive information about the error.
    pub message: String,

    /// Additional free-form records describing the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Map<String, Value>>>,
}

/// An error code that is either textual or numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    /// A numeric code, e.g. an HTTP status.
    Numeric(i64),
    /// A textual code, e.g. `"E_TIMEOUT"`.
    Text(String),
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self::Numeric(code)
    }
}

impl From<u16> for ErrorCode {
    fn from(code: u16) -> Self {
        Self::Numeric(i64::from(code))
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::Text(code.to_owned())
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self::Text(code)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(code) => write!(f, "{code}"),
            Self::Text(code) => f.write_str(code),
        }
    }
}

/// Response model for all requests.
///
/// `D` is the payload type produced by the request handler;
/// [`serde_json::Value`] by default for fully dynamic payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClientResponse<D = Value> {
    /// The request status.
    pub status: StatusCode,

    /// Response payload, `None` when the request produced no data.
    pub data: Option<D>,

    /// Error payload when the request failed; `None` on success.
    pub error: Option<ErrorResponse>,
}

/// The unconfigured sentinel: `{status: 500, data: None, error: None}`.
///
/// This is the value the default handlers resolve to when an application
/// has not supplied a configuration, distinguishing "unconfigured" (a soft,
/// resolved failure) from "misused" (a hard error such as an empty URL).
impl<D> Default for HttpClientResponse<D> {
    fn default() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            data: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_sentinel_shape() {
        let sentinel = HttpClientResponse::<Value>::default();
        assert_eq!(sentinel.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(sentinel.data, None);
        assert_eq!(sentinel.error, None);
    }

    #[test]
    fn test_error_code_untagged_serde() {
        let numeric: ErrorCode = serde_json::from_value(json!(404)).unwrap();
        assert_eq!(numeric, ErrorCode::Numeric(404));

        let textual: ErrorCode = serde_json::from_value(json!("E_TIMEOUT")).unwrap();
        assert_eq!(textual, ErrorCode::Text("E_TIMEOUT".into()));

        assert_eq!(serde_json::to_value(ErrorCode::from(404_u16)).unwrap(), json!(404));
    }

    #[test]
    fn test_error_response_optional_details() {
        let parsed: ErrorResponse =
            serde_json::from_value(json!({"code": "E_AUTH", "message": "unauthorized"})).unwrap();
        assert_eq!(parsed.code, ErrorCode::Text("E_AUTH".into()));
        assert_eq!(parsed.errors, None);

        let serialized = serde_json::to_value(&parsed).unwrap();
        assert_eq!(serialized, json!({"code": "E_AUTH", "message": "unauthorized"}));
    }
}
