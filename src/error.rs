use std::fmt;

/// Failure raised when a fares API call cannot produce a usable response.
///
/// One kind covers three causes, told apart by the message: the transport
/// produced no response, the API returned a non-success status, or the body
/// could not be decoded into the expected shape.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    /// Raw response text for diagnostics, when a body was available.
    pub raw_response: Option<String>,
}

impl ApiError {
    pub(crate) fn transport(detail: String) -> Self {
        Self {
            message: format!("fares API returned no response ({detail})"),
            raw_response: None,
        }
    }

    pub(crate) fn bad_status(status: u16, reason: Option<&str>, body: String) -> Self {
        Self {
            message: format!(
                "fares API returned an unsuccessful status code. Code: {status}, Reason: {reason}",
                reason = reason.unwrap_or("unknown"),
            ),
            raw_response: Some(body),
        }
    }

    pub(crate) fn unparsable(json: &str) -> Self {
        Self {
            message: "response could not be parsed to the expected format".into(),
            raw_response: Some(json.to_string()),
        }
    }

    pub(crate) fn unparsable_with(detail: &serde_json::Error, json: &str) -> Self {
        Self {
            message: format!("response could not be parsed to the expected format: {detail}"),
            raw_response: Some(json.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

pub(crate) fn from_transport_error(err: wreq::Error) -> ApiError {
    let msg = err.to_string();

    if err.is_timeout() {
        return ApiError::transport(format!("timed out: {msg}"));
    }

    if err.is_connect() {
        return ApiError::transport(format!("connection failed: {msg}"));
    }

    ApiError::transport(msg)
}
