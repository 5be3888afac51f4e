//! The uniform response envelope and the client-side error taxonomy.

use serde::Deserialize;
use std::fmt;

/// Every endpoint answers `{code, msg, data}`; `code == 0` is success.
#[derive(Debug, Deserialize)]
pub struct HttpResp<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

pub const CODE_OK: i32 = 0;
/// Informational business code whose message must not be toasted.
pub const CODE_SILENT: i32 = 6;
/// "Not a whitelisted user" — toast and hard-redirect to the fallback route.
pub const CODE_NOT_WHITELISTED: i32 = 20010;
/// Generic forced redirect — toast and hard-redirect to the fallback route.
pub const CODE_FORCE_REDIRECT: i32 = 20000;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-zero envelope code, carrying the server message.
    Server { code: i32, msg: String },
    /// The response did not match the expected shape.
    Decode(String),
    /// The transport failed before an envelope was received.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server { msg, .. } => write!(f, "{msg}"),
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn server_code(&self) -> Option<i32> {
        match self {
            ApiError::Server { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// What the UI layer does with a non-zero envelope code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPolicy {
    pub toast: bool,
    pub redirect: bool,
}

pub fn error_policy(code: i32) -> ErrorPolicy {
    ErrorPolicy {
        toast: code != CODE_SILENT,
        redirect: matches!(code, CODE_NOT_WHITELISTED | CODE_FORCE_REDIRECT),
    }
}

/// Unwraps an envelope into its payload. A success envelope without a
/// payload is a decode error, not a silent `None`.
pub fn unwrap_envelope<T>(resp: HttpResp<T>) -> Result<T, ApiError> {
    if resp.code != CODE_OK {
        return Err(ApiError::Server {
            code: resp.code,
            msg: resp.msg,
        });
    }
    resp.data
        .ok_or_else(|| ApiError::Decode("success envelope without data".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        x: i32,
    }

    #[test]
    fn ok_envelope_yields_data() {
        let resp: HttpResp<Payload> =
            serde_json::from_value(json!({"code": 0, "msg": "", "data": {"x": 1}})).unwrap();
        assert_eq!(unwrap_envelope(resp).unwrap(), Payload { x: 1 });
    }

    #[test]
    fn error_envelope_carries_server_message() {
        let resp: HttpResp<Payload> =
            serde_json::from_value(json!({"code": 5, "msg": "bad", "data": null})).unwrap();
        let err = unwrap_envelope(resp).unwrap_err();
        assert_eq!(err, ApiError::Server { code: 5, msg: "bad".into() });
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn ok_envelope_without_data_is_a_decode_error() {
        let resp: HttpResp<Payload> =
            serde_json::from_value(json!({"code": 0, "msg": ""})).unwrap();
        assert!(matches!(unwrap_envelope(resp), Err(ApiError::Decode(_))));
    }

    #[test]
    fn policy_silences_code_6_and_redirects_sentinels() {
        assert_eq!(error_policy(5), ErrorPolicy { toast: true, redirect: false });
        assert_eq!(error_policy(CODE_SILENT), ErrorPolicy { toast: false, redirect: false });
        assert_eq!(error_policy(CODE_NOT_WHITELISTED), ErrorPolicy { toast: true, redirect: true });
        assert_eq!(error_policy(CODE_FORCE_REDIRECT), ErrorPolicy { toast: true, redirect: true });
    }
}
