//! API Errors
//!
//! Failure taxonomy for calls against the remote task-list API.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// 401 / 403: credential missing, wrong or expired
    #[error("unauthorized ({status}): {body}")]
    Unauthorized { status: u16, body: String },

    /// Any other non-200 status; `body` is the raw response text
    #[error("request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("local storage unavailable: {0}")]
    Storage(String),

    /// Client-side validation failed, nothing was sent
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Classify a non-200 response
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized { status, body },
            _ => ApiError::Rejected { status, body },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text shown in the red error slot under a form
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Unauthorized { body, .. } | ApiError::Rejected { body, .. } => {
                format!("Error: {}", body)
            }
            ApiError::Invalid(msg) => msg.clone(),
            other => format!("Error: {}", other),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(ApiError::from_status(401, String::new()).is_auth());
        assert!(ApiError::from_status(403, String::new()).is_auth());
        assert_eq!(
            ApiError::from_status(500, r#"{"msg":"failed user login"}"#.into()),
            ApiError::Rejected { status: 500, body: r#"{"msg":"failed user login"}"#.into() }
        );
    }

    #[test]
    fn test_display_message_shows_raw_body() {
        let err = ApiError::from_status(500, r#"{"msg":"failed basic auth"}"#.into());
        assert_eq!(err.display_message(), r#"Error: {"msg":"failed basic auth"}"#);

        let err = ApiError::Invalid("Password is required".into());
        assert_eq!(err.display_message(), "Password is required");

        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.display_message(), "Error: network error: connection refused");
    }

    #[test]
    fn test_serde_error_is_decode() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
